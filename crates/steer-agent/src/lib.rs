//! `steer-agent` — the agent state contract and SoA agent storage.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`agent`]     | `SteeringAgent` (read/write contract), `SteeringActor`      |
//! | [`store`]     | `AgentStore` (SoA arrays), `AgentMut` handle, `AgentRngs`   |
//! | [`builder`]   | `AgentStoreBuilder`, `AgentSpawn`                           |
//!
//! Steering behaviors only ever see an agent through [`SteeringAgent`].  The
//! integration step additionally needs [`SteeringActor`] to push movement
//! input and change rotation.  [`AgentMut`] implements both on top of the
//! store, so the same behavior code runs against the simulation's agents and
//! against hand-written test doubles.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `AgentSpawn`.     |

pub mod agent;
pub mod builder;
pub mod store;


pub use agent::{SteeringActor, SteeringAgent};
pub use builder::{AgentSpawn, AgentStoreBuilder};
pub use store::{AgentMut, AgentRngs, AgentStore};
