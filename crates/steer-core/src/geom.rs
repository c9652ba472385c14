//! 2D vector type and the angle helpers shared by every steering behavior.
//!
//! Conventions:
//!
//! - The world is a flat XY plane; `+X` is heading 0 and angles grow
//!   counter-clockwise.
//! - Agent rotations and angular outputs are in **degrees**.
//! - Target orientations and the wander angle are in **radians**.
//!
//! All helpers are total: degenerate inputs (zero-length vectors, NaN) map
//! to a defined fallback instead of propagating non-finite values.

pub use glam::Vec2;

/// Unit vector in the direction of `v`, or `Vec2::ZERO` if `v` has zero or
/// non-finite length.
#[inline]
pub fn normalize_or_zero(v: Vec2) -> Vec2 {
    let len = v.length();
    if len > 0.0 && len.is_finite() {
        v / len
    } else {
        Vec2::ZERO
    }
}

/// Unit heading vector for an angle in radians.
#[inline]
pub fn direction_from_radians(radians: f32) -> Vec2 {
    let (sin, cos) = radians.sin_cos();
    Vec2::new(cos, sin)
}

/// Unit heading vector for an angle in degrees.
#[inline]
pub fn direction_from_degrees(degrees: f32) -> Vec2 {
    direction_from_radians(degrees.to_radians())
}

/// Heading of `v` in degrees, in `(-180, 180]`.  The zero vector has heading 0.
#[inline]
pub fn heading_degrees(v: Vec2) -> f32 {
    v.y.atan2(v.x).to_degrees()
}

/// Signed shortest rotation from `from` to `to`, both in degrees.
///
/// The result lies in `(-180, 180]`: an exact half-turn is reported as
/// `+180` so callers always turn the same way on a tie.
pub fn delta_angle_degrees(from: f32, to: f32) -> f32 {
    let delta = (to - from).rem_euclid(360.0);
    if !delta.is_finite() {
        return 0.0;
    }
    // rem_euclid may round up to exactly 360.0.
    if delta > 180.0 { delta - 360.0 } else { delta }
}
