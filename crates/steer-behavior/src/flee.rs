//! Flee: move directly away from the target.

use steer_agent::SteeringAgent;
use steer_core::{AgentRng, Vec2};

use crate::debug::{FORWARD_LINE_LENGTH, draw_forward};
use crate::{DebugSink, SteeringBehavior, SteeringContext, SteeringOutput};

/// Vector from `threat` to `from`, left at full length.
///
/// Unlike [`seek_direction`][crate::seek_direction] this is not normalised:
/// the further the agent already is, the larger the request.
#[inline]
pub fn flee_vector(from: Vec2, threat: Vec2) -> Vec2 {
    from - threat
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Flee;

impl SteeringBehavior for Flee {
    fn calculate_steering(
        &mut self,
        ctx:   &SteeringContext,
        agent: &mut dyn SteeringAgent,
        _rng:  &mut AgentRng,
        debug: &mut dyn DebugSink,
    ) -> SteeringOutput {
        let position = agent.position();
        draw_forward(debug, position, agent.forward(), FORWARD_LINE_LENGTH);
        SteeringOutput::linear(flee_vector(position, ctx.target.position))
    }

    fn name(&self) -> &'static str {
        "flee"
    }
}
