//! `steer-sim` — tick loop orchestrator for the steer framework.
//!
//! # Three-phase tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Targets  — resolve every agent's TargetSource against the store
//!                as it stands at the start of the tick.
//!   ② Steer    — for each agent with a behavior, ascending AgentId:
//!                  calculate_steering → restore stale Arrive bindings
//!                  → integrate_steering (movement input + clamped turn)
//!   ③ Move     — Locomotion::advance consumes movement input.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use steer_agent::{AgentSpawn, AgentStoreBuilder};
//! use steer_behavior::Seek;
//! use steer_core::{AgentId, SimConfig, Vec2};
//! use steer_sim::{NoopObserver, SimBuilder, TargetSource};
//!
//! let (store, rngs) = AgentStoreBuilder::new(42)
//!     .spawn(AgentSpawn::at(Vec2::ZERO))
//!     .spawn(AgentSpawn::at(Vec2::new(100.0, 0.0)))
//!     .build();
//! let mut sim = SimBuilder::new(SimConfig::default(), store, rngs)
//!     .behavior(AgentId(0), Box::new(Seek))
//!     .target(AgentId(0), TargetSource::Agent(AgentId(1)))
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod target;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use target::TargetSource;
