//! `steer-behavior` — steering behaviors and their value types.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`output`]  | `SteeringOutput` — desired linear vector + desired turn         |
//! | [`target`]  | `TargetData` — position/orientation snapshot steered against    |
//! | [`context`] | `SteeringContext` — per-evaluation read-only inputs             |
//! | [`model`]   | `SteeringBehavior` trait                                        |
//! | [`debug`]   | `DebugSink` trait, `NoopDebugSink`, `DebugRecorder`             |
//! | [`seek`]    | `Seek`, `seek_direction`                                        |
//! | [`flee`]    | `Flee`, `flee_vector`                                           |
//! | [`arrive`]  | `Arrive`, `ArriveBinding`, `arrive_speed_fraction`              |
//! | [`face`]    | `Face`, `face_angle`                                            |
//! | [`pursuit`] | `Pursuit`, `Evade`, `predict_target_position`                   |
//! | [`wander`]  | `Wander`                                                        |
//! | [`noop`]    | `NoopBehavior` — explicit "stand still"                         |
//! | [`kind`]    | `BehaviorKind` — data description that builds a behavior        |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Design notes
//!
//! Every behavior is a strategy object behind `dyn SteeringBehavior`.  The
//! algorithms themselves are free functions so behaviors compose instead of
//! inheriting: Wander builds a synthetic target and calls
//! [`seek_direction`]; Evade negates [`pursuit_vector`].
//!
//! Only two behaviors carry state between calls:
//!
//! - **Arrive** binds to one agent, overrides its max linear speed every
//!   tick, and restores the captured baseline when released or rebound.
//! - **Wander** accumulates a random-walk angle drawn from the injected
//!   [`AgentRng`][steer_core::AgentRng].
//!
//! Evaluation never fails: degenerate numeric input (coincident positions,
//! zero slow radius) maps to defined fallbacks.

pub mod arrive;
pub mod context;
pub mod debug;
pub mod error;
pub mod face;
pub mod flee;
pub mod kind;
pub mod model;
pub mod noop;
pub mod output;
pub mod pursuit;
pub mod seek;
pub mod target;
pub mod wander;

#[cfg(test)]
mod tests;

pub use arrive::{Arrive, ArriveBinding, arrive_speed_fraction};
pub use context::SteeringContext;
pub use debug::{DebugColor, DebugRecorder, DebugShape, DebugSink, NoopDebugSink};
pub use error::{BehaviorError, BehaviorResult};
pub use face::{Face, face_angle};
pub use flee::{Flee, flee_vector};
pub use kind::BehaviorKind;
pub use model::SteeringBehavior;
pub use noop::NoopBehavior;
pub use output::SteeringOutput;
pub use pursuit::{Evade, Pursuit, predict_target_position, pursuit_vector};
pub use seek::{Seek, seek_direction};
pub use target::TargetData;
pub use wander::Wander;
