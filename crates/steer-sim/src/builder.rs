//! Fluent builder for constructing a [`Sim`].

use log::debug;

use steer_agent::{AgentRngs, AgentStore};
use steer_behavior::{BehaviorKind, DebugSink, NoopDebugSink, SteeringBehavior};
use steer_core::{AgentId, SimConfig};
use steer_movement::{KinematicLocomotion, Locomotion, MovementEngine};

use crate::{Sim, SimError, SimResult, TargetSource};

/// Fluent builder for [`Sim<L>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — tick length, total ticks, seed, snapshot interval
/// - [`AgentStore`] + [`AgentRngs`] — from [`steer_agent::AgentStoreBuilder`]
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                                   |
/// |-------------------------|-------------------------------------------|
/// | `.behavior(id, b)`      | No behavior: the agent does not move      |
/// | `.target(id, t)`        | `TargetSource::None`                      |
/// | `.debug_sink(s)`        | `NoopDebugSink`                           |
/// | `.locomotion(l)`        | `KinematicLocomotion`                     |
///
/// # Example
///
/// ```rust,ignore
/// let (store, rngs) = AgentStoreBuilder::new(seed).spawn_all(spawns).build();
/// let mut sim = SimBuilder::new(config, store, rngs)
///     .behavior(AgentId(0), Box::new(Seek))
///     .target(AgentId(0), TargetSource::Agent(AgentId(1)))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<L: Locomotion = KinematicLocomotion> {
    config:     SimConfig,
    agents:     AgentStore,
    rngs:       AgentRngs,
    behaviors:  Vec<(AgentId, Box<dyn SteeringBehavior>)>,
    targets:    Vec<(AgentId, TargetSource)>,
    debug:      Box<dyn DebugSink>,
    locomotion: L,
}

impl SimBuilder<KinematicLocomotion> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, agents: AgentStore, rngs: AgentRngs) -> Self {
        Self {
            config,
            agents,
            rngs,
            behaviors:  Vec::new(),
            targets:    Vec::new(),
            debug:      Box::new(NoopDebugSink),
            locomotion: KinematicLocomotion::default(),
        }
    }
}

impl<L: Locomotion> SimBuilder<L> {
    /// Assign `behavior` to `agent`.  A later call for the same agent wins.
    pub fn behavior(mut self, agent: AgentId, behavior: Box<dyn SteeringBehavior>) -> Self {
        self.behaviors.push((agent, behavior));
        self
    }

    /// Build `kind` and assign it to `agent`.
    pub fn behavior_kind(self, agent: AgentId, kind: &BehaviorKind) -> SimResult<Self> {
        Ok(self.behavior(agent, kind.build()?))
    }

    /// Set what `agent` steers relative to.
    pub fn target(mut self, agent: AgentId, target: TargetSource) -> Self {
        self.targets.push((agent, target));
        self
    }

    /// Receive the debug shapes behaviors emit.
    pub fn debug_sink(mut self, sink: Box<dyn DebugSink>) -> Self {
        self.debug = sink;
        self
    }

    /// Replace the host movement model.
    pub fn locomotion<M: Locomotion>(self, locomotion: M) -> SimBuilder<M> {
        SimBuilder {
            config:    self.config,
            agents:    self.agents,
            rngs:      self.rngs,
            behaviors: self.behaviors,
            targets:   self.targets,
            debug:     self.debug,
            locomotion,
        }
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<L>> {
        self.config
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))?;

        let agent_count = self.agents.count;
        if self.rngs.len() != agent_count {
            return Err(SimError::AgentCountMismatch {
                expected: agent_count,
                got:      self.rngs.len(),
                what:     "agent RNGs",
            });
        }

        // ── Resolve per-agent slots ───────────────────────────────────────
        let mut targets = vec![TargetSource::None; agent_count];
        for (agent, target) in self.targets {
            if !self.agents.contains(agent) {
                return Err(SimError::AgentNotFound(agent));
            }
            if let TargetSource::Agent(other) = target {
                if !self.agents.contains(other) {
                    return Err(SimError::AgentNotFound(other));
                }
            }
            targets[agent.index()] = target;
        }

        let mut behaviors: Vec<Option<Box<dyn SteeringBehavior>>> =
            (0..agent_count).map(|_| None).collect();
        for (agent, behavior) in self.behaviors {
            if !self.agents.contains(agent) {
                return Err(SimError::AgentNotFound(agent));
            }
            debug!("{agent}: assigned {}", behavior.name());
            behaviors[agent.index()] = Some(behavior);
        }

        Ok(Sim {
            clock:     self.config.make_clock(),
            config:    self.config,
            agents:    self.agents,
            rngs:      self.rngs,
            movement:  MovementEngine::new(self.locomotion),
            behaviors,
            targets,
            debug:     self.debug,
        })
    }
}
