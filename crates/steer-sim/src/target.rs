//! Where each agent's per-tick `TargetData` comes from.

use steer_agent::AgentStore;
use steer_behavior::TargetData;
use steer_core::AgentId;

/// What an agent steers relative to.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum TargetSource {
    /// Nothing.  The agent's own position and heading are used, so
    /// target-seeking behaviors produce no movement.
    #[default]
    None,

    /// A fixed point and orientation.
    Fixed(TargetData),

    /// Another agent, snapshotted at the start of every tick.
    Agent(AgentId),
}

impl TargetSource {
    /// Capture the target for `agent` from the current store state.
    ///
    /// Returns `None` only if a referenced agent is not in `store`.
    pub fn resolve(&self, agent: AgentId, store: &AgentStore) -> Option<TargetData> {
        match *self {
            TargetSource::None          => snapshot(agent, store),
            TargetSource::Fixed(target) => Some(target),
            TargetSource::Agent(other)  => snapshot(other, store),
        }
    }
}

/// Position and heading of `agent`, with the heading converted from the
/// store's degrees to radians.
fn snapshot(agent: AgentId, store: &AgentStore) -> Option<TargetData> {
    if !store.contains(agent) {
        return None;
    }
    let i = agent.index();
    Some(TargetData::new(store.position[i], store.rotation[i].to_radians()))
}
