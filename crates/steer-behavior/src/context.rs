//! Read-only inputs passed to every behavior evaluation.

use steer_core::Tick;

use crate::TargetData;

/// Everything a behavior needs to know about the current tick besides the
/// agent itself.
///
/// Built fresh by the caller for every evaluation; behaviors never keep it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SteeringContext {
    /// Current simulation tick.
    pub tick: Tick,

    /// Seconds covered by this tick.
    pub delta_secs: f32,

    /// What the agent is steering relative to.  Wander ignores it and builds
    /// its own synthetic target.
    pub target: TargetData,
}

impl SteeringContext {
    #[inline]
    pub fn new(tick: Tick, delta_secs: f32, target: TargetData) -> Self {
        Self { tick, delta_secs, target }
    }
}
