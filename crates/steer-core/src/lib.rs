//! `steer-core` — foundational types for the `steer` agent-steering framework.
//!
//! This crate is a dependency of every other `steer-*` crate.  It intentionally
//! has no `steer-*` dependencies and minimal external ones (`glam`, `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`geom`]        | `Vec2`, safe normalisation, headings, angle deltas    |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `AgentRng` (per-agent, seeded from the global seed)   |
//! | [`error`]       | `SteerError`, `SteerResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required for loading scenarios from JSON.                  |

pub mod error;
pub mod geom;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SteerError, SteerResult};
pub use geom::Vec2;
pub use ids::AgentId;
pub use rng::AgentRng;
pub use time::{SimClock, SimConfig, Tick};
