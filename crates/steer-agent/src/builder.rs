//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use steer_agent::{AgentSpawn, AgentStoreBuilder};
//! use steer_core::Vec2;
//!
//! let (store, rngs) = AgentStoreBuilder::new(/*seed=*/ 42)
//!     .spawn(AgentSpawn::at(Vec2::new(0.0, 0.0)))
//!     .spawn(AgentSpawn::at(Vec2::new(100.0, 0.0)).facing(180.0))
//!     .build();
//!
//! assert_eq!(store.count, 2);
//! assert_eq!(rngs.len(),  2);
//! ```

use steer_core::Vec2;

use crate::{AgentRngs, AgentStore};

/// Initial state for one agent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentSpawn {
    pub position: Vec2,

    /// Heading in degrees.
    pub rotation: f32,

    pub max_linear_speed: f32,

    /// Degrees per second.
    pub max_angular_speed: f32,
}

impl Default for AgentSpawn {
    fn default() -> Self {
        Self {
            position:          Vec2::ZERO,
            rotation:          0.0,
            max_linear_speed:  100.0,
            max_angular_speed: 180.0,
        }
    }
}

impl AgentSpawn {
    /// Default limits at `position`, facing `+X`.
    pub fn at(position: Vec2) -> Self {
        Self { position, ..Self::default() }
    }

    pub fn facing(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn max_linear_speed(mut self, speed: f32) -> Self {
        self.max_linear_speed = speed;
        self
    }

    pub fn max_angular_speed(mut self, degrees_per_sec: f32) -> Self {
        self.max_angular_speed = degrees_per_sec;
        self
    }
}

/// Fluent builder for [`AgentStore`] + [`AgentRngs`].
///
/// Agents receive ids in spawn order starting at `AgentId(0)`.
pub struct AgentStoreBuilder {
    seed:   u64,
    spawns: Vec<AgentSpawn>,
}

impl AgentStoreBuilder {
    /// Create an empty builder using `seed` as the global RNG seed.
    pub fn new(seed: u64) -> Self {
        Self { seed, spawns: Vec::new() }
    }

    /// Queue one agent.
    pub fn spawn(mut self, spawn: AgentSpawn) -> Self {
        self.spawns.push(spawn);
        self
    }

    /// Queue every agent in `spawns`, in iteration order.
    pub fn spawn_all<I: IntoIterator<Item = AgentSpawn>>(mut self, spawns: I) -> Self {
        self.spawns.extend(spawns);
        self
    }

    /// Construct `AgentStore` and `AgentRngs`.
    pub fn build(self) -> (AgentStore, AgentRngs) {
        let mut store = AgentStore::with_capacity(self.spawns.len());
        for s in &self.spawns {
            store.push(s.position, s.rotation, s.max_linear_speed, s.max_angular_speed);
        }
        let rngs = AgentRngs::new(store.count, self.seed);
        (store, rngs)
    }
}
