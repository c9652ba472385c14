//! Face: turn on the spot toward the target.

use steer_agent::SteeringAgent;
use steer_core::geom::{delta_angle_degrees, heading_degrees, normalize_or_zero};
use steer_core::{AgentRng, Vec2};

use crate::debug::{FORWARD_LINE_LENGTH, draw_forward};
use crate::{DebugSink, SteeringBehavior, SteeringContext, SteeringOutput};

/// Signed shortest turn, in degrees, that points an agent at `position` with
/// heading `rotation` toward `target`.
///
/// Always in `(-180, 180]`.  Returns 0 when the target sits on the agent,
/// since there is no direction to face.
pub fn face_angle(position: Vec2, rotation: f32, target: Vec2) -> f32 {
    let to_target = normalize_or_zero(target - position);
    if to_target == Vec2::ZERO {
        return 0.0;
    }
    delta_angle_degrees(rotation, heading_degrees(to_target))
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Face;

impl SteeringBehavior for Face {
    fn calculate_steering(
        &mut self,
        ctx:   &SteeringContext,
        agent: &mut dyn SteeringAgent,
        _rng:  &mut AgentRng,
        debug: &mut dyn DebugSink,
    ) -> SteeringOutput {
        let position = agent.position();
        draw_forward(debug, position, agent.forward(), FORWARD_LINE_LENGTH);
        SteeringOutput::angular(face_angle(position, agent.rotation(), ctx.target.position))
    }

    fn name(&self) -> &'static str {
        "face"
    }
}
