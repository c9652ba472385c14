//! The integration step: apply one `SteeringOutput` to one agent.

use log::trace;

use steer_agent::SteeringActor;
use steer_behavior::SteeringOutput;
use steer_core::Vec2;

/// Requested turns no larger than this (degrees) are ignored.
pub const ANGULAR_EPSILON: f32 = 1e-4;

/// What [`integrate_steering`] actually did to the agent this tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AppliedMotion {
    /// Movement input handed to the host, exactly the behavior's linear
    /// output.
    pub movement_input: Vec2,

    /// Rotation change in degrees after clamping.  Zero when the requested
    /// turn was below [`ANGULAR_EPSILON`].
    pub rotation_delta: f32,
}

/// Apply `output` to `actor` for a tick of `delta_secs` seconds.
///
/// The linear component is passed through as movement input with its
/// magnitude untouched; the host locomotion model decides what it means.
/// The angular component is a desired turn, clamped to
/// `±max_angular_speed * delta_secs` before being added to the rotation.
pub fn integrate_steering<A>(actor: &mut A, output: &SteeringOutput, delta_secs: f32) -> AppliedMotion
where
    A: SteeringActor + ?Sized,
{
    actor.add_movement_input(output.linear);

    let mut rotation_delta = 0.0;
    if output.angular.abs() > ANGULAR_EPSILON {
        let limit = (actor.max_angular_speed() * delta_secs).abs();
        // Not `clamp`: a NaN limit must not panic.
        rotation_delta = output.angular.max(-limit).min(limit);
        actor.set_rotation(actor.rotation() + rotation_delta);
    }

    trace!(
        "{}: input {} turn {:.3} (requested {:.3})",
        actor.id(),
        output.linear,
        rotation_delta,
        output.angular,
    );

    AppliedMotion { movement_input: output.linear, rotation_delta }
}
