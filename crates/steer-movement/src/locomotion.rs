//! Host movement models that consume accumulated movement input.

use steer_agent::AgentStore;
use steer_core::Vec2;
use steer_core::geom::{delta_angle_degrees, heading_degrees};

/// The host side of movement: turns each agent's accumulated
/// `movement_input` into velocity and position, then clears the input.
///
/// Implementations run once per tick, after every agent has been steered.
pub trait Locomotion: Send + 'static {
    fn advance(&mut self, store: &mut AgentStore, delta_secs: f32);
}

/// Direct kinematic movement with no acceleration.
///
/// Input is treated as a throttle: its length is clamped to 1, and the agent
/// moves at `input * max_linear_speed` for the whole tick.  An Arrive-
/// throttled max speed therefore slows the agent immediately.
///
/// With `orient_to_movement` (the default) a moving agent also turns toward
/// its velocity, at most `max_angular_speed * delta_secs` degrees per tick.
/// Wander's circle and Pursuit's look-ahead both depend on the heading
/// following the path.  A stationary agent keeps its heading.
#[derive(Copy, Clone, Debug)]
pub struct KinematicLocomotion {
    pub orient_to_movement: bool,
}

impl Default for KinematicLocomotion {
    fn default() -> Self {
        Self { orient_to_movement: true }
    }
}

impl KinematicLocomotion {
    /// Move without ever touching rotation; only angular steering turns.
    pub fn fixed_heading() -> Self {
        Self { orient_to_movement: false }
    }
}

impl Locomotion for KinematicLocomotion {
    fn advance(&mut self, store: &mut AgentStore, delta_secs: f32) {
        for i in 0..store.count {
            let input = store.movement_input[i].clamp_length_max(1.0);
            let velocity = input * store.max_linear_speed[i].max(0.0);
            store.velocity[i] = velocity;
            store.position[i] += velocity * delta_secs;
            store.movement_input[i] = Vec2::ZERO;

            if self.orient_to_movement && velocity != Vec2::ZERO {
                let limit = (store.max_angular_speed[i] * delta_secs).abs();
                let turn = delta_angle_degrees(store.rotation[i], heading_degrees(velocity))
                    .max(-limit)
                    .min(limit);
                store.rotation[i] = delta_angle_degrees(0.0, store.rotation[i] + turn);
            }
        }
    }
}
