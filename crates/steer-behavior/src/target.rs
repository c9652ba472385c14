//! Snapshot of whatever an agent is steering relative to.

use steer_core::Vec2;
use steer_core::geom::direction_from_radians;

/// Target position and orientation, captured fresh each tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetData {
    pub position: Vec2,

    /// Heading in radians, 0 = `+X`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub orientation: f32,
}

impl TargetData {
    #[inline]
    pub fn new(position: Vec2, orientation: f32) -> Self {
        Self { position, orientation }
    }

    /// A stationary point target facing `+X`.
    #[inline]
    pub fn at(position: Vec2) -> Self {
        Self { position, orientation: 0.0 }
    }

    /// Unit vector along `orientation`.
    #[inline]
    pub fn forward(&self) -> Vec2 {
        direction_from_radians(self.orientation)
    }
}
