//! Optional debug-drawing side channel.
//!
//! Behaviors describe what they would like drawn (forward lines, arrive
//! radii, wander circle, predicted intercept point) through a [`DebugSink`].
//! Nothing in the algorithmic path depends on what the sink does with the
//! shapes; [`NoopDebugSink`] discards them.

use steer_core::Vec2;

/// Colour hint for a debug shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DebugColor {
    Red,
    Blue,
    Black,
}

/// A recorded drawing request.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DebugShape {
    Line {
        from:  Vec2,
        to:    Vec2,
        color: DebugColor,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color:  DebugColor,
    },
}

/// Receiver for debug drawing requests.
pub trait DebugSink {
    fn line(&mut self, from: Vec2, to: Vec2, color: DebugColor);

    fn circle(&mut self, center: Vec2, radius: f32, color: DebugColor);
}

/// A [`DebugSink`] that ignores every request.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopDebugSink;

impl DebugSink for NoopDebugSink {
    #[inline]
    fn line(&mut self, _from: Vec2, _to: Vec2, _color: DebugColor) {}

    #[inline]
    fn circle(&mut self, _center: Vec2, _radius: f32, _color: DebugColor) {}
}

/// A [`DebugSink`] that keeps every shape until [`clear`][Self::clear]ed.
///
/// Handy for tests and for renderers that batch a frame's shapes.
#[derive(Clone, Debug, Default)]
pub struct DebugRecorder {
    pub shapes: Vec<DebugShape>,
}

impl DebugRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// All recorded circles as `(center, radius, color)`.
    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, DebugColor)> + '_ {
        self.shapes.iter().filter_map(|s| match *s {
            DebugShape::Circle { center, radius, color } => Some((center, radius, color)),
            DebugShape::Line { .. } => None,
        })
    }
}

impl DebugSink for DebugRecorder {
    fn line(&mut self, from: Vec2, to: Vec2, color: DebugColor) {
        self.shapes.push(DebugShape::Line { from, to, color });
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: DebugColor) {
        self.shapes.push(DebugShape::Circle { center, radius, color });
    }
}

/// Length of the forward-direction line drawn for an agent at full speed.
pub(crate) const FORWARD_LINE_LENGTH: f32 = 100.0;

/// Draw the agent's forward direction, scaled by `length`.
pub(crate) fn draw_forward(
    debug:    &mut dyn DebugSink,
    position: Vec2,
    forward:  Vec2,
    length:   f32,
) {
    debug.line(position, position + forward * length, DebugColor::Red);
}
