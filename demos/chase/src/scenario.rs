//! JSON scenario format: config plus named agents with behaviors and targets.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use steer_agent::{AgentSpawn, AgentStoreBuilder};
use steer_behavior::{BehaviorKind, TargetData};
use steer_core::{AgentId, SimConfig, Vec2};
use steer_movement::KinematicLocomotion;
use steer_sim::{Sim, SimBuilder, TargetSource};

/// Five agents: a wanderer, a pursuer chasing it, an evader running from the
/// pursuer, an arriver homing on a fixed point, and a turret-like facer.
pub const DEFAULT_SCENARIO: &str = r#"{
  "config": {
    "delta_secs": 0.0166667,
    "total_ticks": 600,
    "seed": 42,
    "snapshot_interval_ticks": 120
  },
  "agents": [
    {
      "name": "wanderer",
      "spawn": { "position": [0.0, 0.0], "max_linear_speed": 80.0 },
      "behavior": { "type": "wander" }
    },
    {
      "name": "pursuer",
      "spawn": { "position": [-300.0, -200.0], "rotation": 45.0, "max_linear_speed": 110.0 },
      "behavior": { "type": "pursuit" },
      "target": { "type": "agent", "name": "wanderer" }
    },
    {
      "name": "evader",
      "spawn": { "position": [150.0, 120.0], "max_linear_speed": 100.0 },
      "behavior": { "type": "evade" },
      "target": { "type": "agent", "name": "pursuer" }
    },
    {
      "name": "arriver",
      "spawn": { "position": [-400.0, 300.0], "max_linear_speed": 150.0 },
      "behavior": { "type": "arrive", "target_radius": 20.0, "slow_radius": 150.0 },
      "target": { "type": "point", "position": [250.0, -250.0] }
    },
    {
      "name": "facer",
      "spawn": { "position": [400.0, 0.0], "rotation": 180.0, "max_angular_speed": 90.0 },
      "behavior": { "type": "face" },
      "target": { "type": "agent", "name": "wanderer" }
    }
  ]
}"#;

#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub config: SimConfig,

    /// Turn moving agents toward their velocity.  Off leaves heading to
    /// angular steering alone.
    #[serde(default = "enabled")]
    pub orient_to_movement: bool,

    pub agents: Vec<ScenarioAgent>,
}

#[derive(Debug, Deserialize)]
pub struct ScenarioAgent {
    pub name: String,

    #[serde(default)]
    pub spawn: AgentSpawn,

    #[serde(default = "idle")]
    pub behavior: BehaviorKind,

    #[serde(default)]
    pub target: ScenarioTarget,
}

fn enabled() -> bool {
    true
}

fn idle() -> BehaviorKind {
    BehaviorKind::Idle
}

/// Target as written in the file; agents are referenced by name.
#[derive(Debug, Default, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioTarget {
    #[default]
    None,
    Point {
        position: Vec2,
        /// Radians.
        #[serde(default)]
        orientation: f32,
    },
    Agent {
        name: String,
    },
}

impl Scenario {
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid scenario JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&json).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn names(&self) -> Vec<&str> {
        self.agents.iter().map(|a| a.name.as_str()).collect()
    }

    /// Spawn the agents and wire behaviors and targets into a [`Sim`].
    pub fn build(self) -> Result<Sim> {
        let mut ids: HashMap<&str, AgentId> = HashMap::new();
        for (i, agent) in self.agents.iter().enumerate() {
            if ids.insert(agent.name.as_str(), AgentId(i as u32)).is_some() {
                bail!("duplicate agent name {:?}", agent.name);
            }
        }

        let (store, rngs) = AgentStoreBuilder::new(self.config.seed)
            .spawn_all(self.agents.iter().map(|a| a.spawn.clone()))
            .build();
        let locomotion = KinematicLocomotion { orient_to_movement: self.orient_to_movement };
        let mut builder = SimBuilder::new(self.config.clone(), store, rngs).locomotion(locomotion);

        for (i, agent) in self.agents.iter().enumerate() {
            let id = AgentId(i as u32);
            builder = builder
                .behavior_kind(id, &agent.behavior)
                .with_context(|| format!("agent {:?}", agent.name))?;

            let target = match &agent.target {
                ScenarioTarget::None => TargetSource::None,
                ScenarioTarget::Point { position, orientation } => {
                    TargetSource::Fixed(TargetData::new(*position, *orientation))
                }
                ScenarioTarget::Agent { name } => match ids.get(name.as_str()) {
                    Some(&other) => TargetSource::Agent(other),
                    None => bail!("agent {:?} targets unknown agent {name:?}", agent.name),
                },
            };
            builder = builder.target(id, target);
        }

        Ok(builder.build()?)
    }
}
