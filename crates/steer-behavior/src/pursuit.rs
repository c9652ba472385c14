//! Pursuit and Evade: steer relative to where the target is heading.
//!
//! Both use the same cheap look-ahead: the current distance to the target
//! stands in for the time to intercept, and the target is projected that far
//! along its own orientation.  Closing speed is deliberately ignored, so a
//! distant target is projected far ahead even if it is barely moving.

use steer_agent::SteeringAgent;
use steer_core::{AgentRng, Vec2};

use crate::{DebugColor, DebugSink, SteeringBehavior, SteeringContext, SteeringOutput, TargetData};

/// Radius of the marker drawn at the predicted position.
const PREDICTION_MARKER_RADIUS: f32 = 30.0;

/// Where `target` is expected to be, as seen from `from`.
#[inline]
pub fn predict_target_position(from: Vec2, target: &TargetData) -> Vec2 {
    let distance = (target.position - from).length();
    target.position + target.forward() * distance
}

/// Unnormalised vector from `from` to the predicted target position.
#[inline]
pub fn pursuit_vector(from: Vec2, target: &TargetData) -> Vec2 {
    predict_target_position(from, target) - from
}

fn predict_and_draw(from: Vec2, target: &TargetData, debug: &mut dyn DebugSink) -> Vec2 {
    let predicted = predict_target_position(from, target);
    debug.circle(predicted, PREDICTION_MARKER_RADIUS, DebugColor::Black);
    predicted - from
}

/// Seek the target's predicted position.
#[derive(Copy, Clone, Debug, Default)]
pub struct Pursuit;

impl SteeringBehavior for Pursuit {
    fn calculate_steering(
        &mut self,
        ctx:   &SteeringContext,
        agent: &mut dyn SteeringAgent,
        _rng:  &mut AgentRng,
        debug: &mut dyn DebugSink,
    ) -> SteeringOutput {
        SteeringOutput::linear(predict_and_draw(agent.position(), &ctx.target, debug))
    }

    fn name(&self) -> &'static str {
        "pursuit"
    }
}

/// Flee from the target's predicted position.
#[derive(Copy, Clone, Debug, Default)]
pub struct Evade;

impl SteeringBehavior for Evade {
    fn calculate_steering(
        &mut self,
        ctx:   &SteeringContext,
        agent: &mut dyn SteeringAgent,
        _rng:  &mut AgentRng,
        debug: &mut dyn DebugSink,
    ) -> SteeringOutput {
        SteeringOutput::linear(-predict_and_draw(agent.position(), &ctx.target, debug))
    }

    fn name(&self) -> &'static str {
        "evade"
    }
}
