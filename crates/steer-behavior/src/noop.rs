//! A behavior that never asks for movement.

use steer_agent::SteeringAgent;
use steer_core::AgentRng;

use crate::{DebugSink, SteeringBehavior, SteeringContext, SteeringOutput};

/// A [`SteeringBehavior`] that always returns [`SteeringOutput::ZERO`].
///
/// Unlike having no behavior assigned, this still counts as "steered" for
/// observers.  Useful for parked agents and as a test placeholder.
pub struct NoopBehavior;

impl SteeringBehavior for NoopBehavior {
    fn calculate_steering(
        &mut self,
        _ctx:   &SteeringContext,
        _agent: &mut dyn SteeringAgent,
        _rng:   &mut AgentRng,
        _debug: &mut dyn DebugSink,
    ) -> SteeringOutput {
        SteeringOutput::ZERO
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}
