//! The result of one behavior evaluation.

use steer_core::Vec2;

/// Desired motion for a single tick.
///
/// `linear` carries both direction and magnitude; its length is whatever
/// the producing behavior decided (unit for Seek, raw distance for Flee and
/// Arrive) and is never normalised globally.  `angular` is a desired turn in
/// degrees, not a rate: the integration step clamps it to what the agent
/// can turn in one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteeringOutput {
    pub linear:  Vec2,
    pub angular: f32,
}

impl SteeringOutput {
    /// No movement, no turn.
    pub const ZERO: SteeringOutput = SteeringOutput { linear: Vec2::ZERO, angular: 0.0 };

    #[inline]
    pub fn linear(linear: Vec2) -> Self {
        Self { linear, angular: 0.0 }
    }

    #[inline]
    pub fn angular(degrees: f32) -> Self {
        Self { linear: Vec2::ZERO, angular: degrees }
    }
}
