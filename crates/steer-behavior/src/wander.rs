//! Wander: seek a point that drifts randomly around a circle projected ahead
//! of the agent.
//!
//! Each evaluation nudges a running angle by a uniform random amount in
//! `[-max_angle_change, max_angle_change]`, places the wander circle
//! `offset` units along the agent's forward vector, and seeks the point on
//! that circle at the running angle.  The angle is measured from world `+X`,
//! not from the agent's heading.

use log::trace;

use steer_agent::SteeringAgent;
use steer_core::geom::direction_from_radians;
use steer_core::{AgentRng, Vec2};

use crate::{DebugColor, DebugSink, SteeringBehavior, SteeringContext, SteeringOutput, seek_direction};

/// Radius of the marker drawn at the wander point.
const WANDER_POINT_MARKER_RADIUS: f32 = 10.0;

#[derive(Clone, Debug)]
pub struct Wander {
    /// Distance from the agent to the wander circle's centre.
    offset: f32,

    radius: f32,

    /// Largest per-evaluation change to the wander angle, in radians.
    max_angle_change: f32,

    /// Running angle in radians.
    wander_angle: f32,

    /// The synthetic target produced by the last evaluation.
    last_target: Option<Vec2>,
}

impl Wander {
    pub fn new(offset: f32, radius: f32, max_angle_change: f32) -> Self {
        Self {
            offset,
            radius,
            max_angle_change,
            wander_angle: 0.0,
            last_target: None,
        }
    }

    /// Start from `angle` (radians) instead of 0.
    pub fn with_angle(mut self, angle: f32) -> Self {
        self.wander_angle = angle;
        self
    }

    pub fn wander_angle(&self) -> f32 {
        self.wander_angle
    }

    pub fn last_target(&self) -> Option<Vec2> {
        self.last_target
    }

    /// Advance the wander angle and return the new synthetic target for an
    /// agent at `position` facing `forward`.
    pub fn next_target(
        &mut self,
        position: Vec2,
        forward:  Vec2,
        rng:      &mut AgentRng,
        debug:    &mut dyn DebugSink,
    ) -> Vec2 {
        self.wander_angle += rng.symmetric(self.max_angle_change);

        let center = position + forward * self.offset;
        debug.circle(center, self.radius, DebugColor::Blue);

        let target = center + direction_from_radians(self.wander_angle) * self.radius;
        debug.circle(target, WANDER_POINT_MARKER_RADIUS, DebugColor::Black);

        self.last_target = Some(target);
        target
    }
}

impl SteeringBehavior for Wander {
    fn calculate_steering(
        &mut self,
        _ctx:  &SteeringContext,
        agent: &mut dyn SteeringAgent,
        rng:   &mut AgentRng,
        debug: &mut dyn DebugSink,
    ) -> SteeringOutput {
        let position = agent.position();
        let target = self.next_target(position, agent.forward(), rng, debug);
        trace!(
            "wander: {} angle {:.3} rad, target {target}",
            agent.id(),
            self.wander_angle,
        );
        SteeringOutput::linear(seek_direction(position, target))
    }

    fn name(&self) -> &'static str {
        "wander"
    }
}
