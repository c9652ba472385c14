//! The capability contract between steering behaviors and the agent they
//! steer.

use steer_core::geom::direction_from_degrees;
use steer_core::{AgentId, Vec2};

/// Read access to an agent's kinematic state plus the single mutation a
/// behavior is allowed to make: overriding the max linear speed.
///
/// Behaviors borrow an implementor only for the duration of one evaluation
/// call and must not retain references to it.  Binding state that outlives
/// the call (Arrive) is keyed by [`id`][Self::id].
pub trait SteeringAgent {
    /// Stable identity of the agent, used to detect rebinding.
    fn id(&self) -> AgentId;

    /// World position.
    fn position(&self) -> Vec2;

    /// Heading in degrees, 0 = `+X`, counter-clockwise positive.
    fn rotation(&self) -> f32;

    /// Unit vector along [`rotation`][Self::rotation].
    fn forward(&self) -> Vec2 {
        direction_from_degrees(self.rotation())
    }

    /// Current linear velocity as last integrated by the host.
    fn linear_velocity(&self) -> Vec2;

    fn max_linear_speed(&self) -> f32;

    /// Override the max linear speed.  Only Arrive uses this.
    fn set_max_linear_speed(&mut self, speed: f32);

    /// Max angular speed in degrees per second.
    fn max_angular_speed(&self) -> f32;
}

/// Host-side mutators the integration step drives each tick.
pub trait SteeringActor: SteeringAgent {
    /// Accumulate a movement request for this tick.  The host locomotion
    /// model decides how input maps to velocity.
    fn add_movement_input(&mut self, input: Vec2);

    /// Set the heading in degrees.
    fn set_rotation(&mut self, degrees: f32);
}
