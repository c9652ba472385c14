//! `steer-movement` — turning a steering output into actual motion.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                        |
//! |-----------------|-----------------------------------------------------------------|
//! | [`step`]        | `integrate_steering` — the per-tick integration step            |
//! | [`locomotion`]  | `Locomotion` trait, `KinematicLocomotion` default host model    |
//! | [`engine`]      | `MovementEngine<L>` — checked integration + locomotion advance  |
//! | [`error`]       | `MovementError`, `MovementResult<T>`                            |
//!
//! # Movement model
//!
//! Each tick runs in two phases:
//!
//! 1. For every steered agent, [`integrate_steering`] pushes the behavior's
//!    linear output as movement input (unclamped) and applies the angular
//!    output as a rotation change clamped to `max_angular_speed * dt`.
//! 2. Once every agent has been steered, the [`Locomotion`] model consumes
//!    the accumulated movement input and moves the agents.
//!
//! Keeping phase 2 separate means every behavior in a tick sees the world as
//! it was at the start of the tick, whatever order agents are evaluated in.

pub mod engine;
pub mod error;
pub mod locomotion;
pub mod step;


pub use engine::MovementEngine;
pub use error::{MovementError, MovementResult};
pub use locomotion::{KinematicLocomotion, Locomotion};
pub use step::{ANGULAR_EPSILON, AppliedMotion, integrate_steering};
