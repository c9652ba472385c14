//! Seek: head straight for the target at unit strength.

use steer_agent::SteeringAgent;
use steer_core::geom::normalize_or_zero;
use steer_core::{AgentRng, Vec2};

use crate::debug::{FORWARD_LINE_LENGTH, draw_forward};
use crate::{DebugSink, SteeringBehavior, SteeringContext, SteeringOutput};

/// Unit vector from `from` toward `to`; zero when the points coincide.
#[inline]
pub fn seek_direction(from: Vec2, to: Vec2) -> Vec2 {
    normalize_or_zero(to - from)
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Seek;

impl SteeringBehavior for Seek {
    fn calculate_steering(
        &mut self,
        ctx:   &SteeringContext,
        agent: &mut dyn SteeringAgent,
        _rng:  &mut AgentRng,
        debug: &mut dyn DebugSink,
    ) -> SteeringOutput {
        let position = agent.position();
        draw_forward(debug, position, agent.forward(), FORWARD_LINE_LENGTH);
        SteeringOutput::linear(seek_direction(position, ctx.target.position))
    }

    fn name(&self) -> &'static str {
        "seek"
    }
}
