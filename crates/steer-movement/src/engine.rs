//! High-level movement engine used by steer-sim.

use log::debug;

use steer_agent::AgentStore;
use steer_behavior::SteeringOutput;
use steer_core::AgentId;

use crate::{AppliedMotion, Locomotion, MovementError, MovementResult, integrate_steering};

/// Wraps a [`Locomotion`] model and applies steering outputs to agents in an
/// [`AgentStore`].
///
/// # Type parameter
///
/// `L` is the host movement model (e.g. [`crate::KinematicLocomotion`]).
/// Swap it at compile time for a different model with no runtime overhead.
pub struct MovementEngine<L: Locomotion> {
    pub locomotion: L,
}

impl<L: Locomotion> MovementEngine<L> {
    pub fn new(locomotion: L) -> Self {
        Self { locomotion }
    }

    /// Integrate `output` onto `agent`.
    ///
    /// Fails if `agent` is not in `store` or `delta_secs` is negative or not
    /// finite; the agent is left untouched in both cases.
    pub fn apply(
        &self,
        store:      &mut AgentStore,
        agent:      AgentId,
        output:     &SteeringOutput,
        delta_secs: f32,
    ) -> MovementResult<AppliedMotion> {
        check_delta(delta_secs)?;
        let mut handle = store.agent_mut(agent).ok_or(MovementError::AgentNotFound(agent))?;
        Ok(integrate_steering(&mut handle, output, delta_secs))
    }

    /// Run the locomotion model over every agent.
    pub fn advance(&mut self, store: &mut AgentStore, delta_secs: f32) -> MovementResult<()> {
        check_delta(delta_secs)?;
        self.locomotion.advance(store, delta_secs);
        debug!("advanced {} agents by {delta_secs} s", store.count);
        Ok(())
    }
}

impl<L: Locomotion + Default> Default for MovementEngine<L> {
    fn default() -> Self {
        Self::new(L::default())
    }
}

fn check_delta(delta_secs: f32) -> MovementResult<()> {
    if delta_secs.is_finite() && delta_secs >= 0.0 {
        Ok(())
    } else {
        Err(MovementError::NonFiniteDelta(delta_secs))
    }
}
