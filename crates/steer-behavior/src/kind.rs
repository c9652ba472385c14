//! Data-only description of a behavior, loadable from configuration.

use crate::{
    Arrive, BehaviorError, BehaviorResult, Evade, Face, Flee, NoopBehavior, Pursuit, Seek,
    SteeringBehavior, Wander,
};

/// Which behavior to run and with what parameters.
///
/// With the `serde` feature this deserialises from an internally tagged
/// object, e.g. `{ "type": "arrive", "target_radius": 10, "slow_radius": 80 }`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum BehaviorKind {
    Idle,
    Seek,
    Flee,
    Arrive {
        target_radius: f32,
        slow_radius:   f32,
    },
    Face,
    Pursuit,
    Evade,
    Wander {
        #[cfg_attr(feature = "serde", serde(default = "default_wander_offset"))]
        offset: f32,
        #[cfg_attr(feature = "serde", serde(default = "default_wander_radius"))]
        radius: f32,
        /// Radians.
        #[cfg_attr(feature = "serde", serde(default = "default_wander_max_angle_change"))]
        max_angle_change: f32,
    },
}

fn default_wander_offset() -> f32 {
    70.0
}

fn default_wander_radius() -> f32 {
    50.0
}

fn default_wander_max_angle_change() -> f32 {
    std::f32::consts::FRAC_PI_4
}

impl BehaviorKind {
    /// Wander with the default circle (offset 70, radius 50, ±45° per tick).
    pub fn default_wander() -> Self {
        BehaviorKind::Wander {
            offset:           default_wander_offset(),
            radius:           default_wander_radius(),
            max_angle_change: default_wander_max_angle_change(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BehaviorKind::Idle         => "noop",
            BehaviorKind::Seek         => "seek",
            BehaviorKind::Flee         => "flee",
            BehaviorKind::Arrive { .. } => "arrive",
            BehaviorKind::Face         => "face",
            BehaviorKind::Pursuit      => "pursuit",
            BehaviorKind::Evade        => "evade",
            BehaviorKind::Wander { .. } => "wander",
        }
    }

    /// Check parameters without building.
    ///
    /// Radii, offsets and angle limits must be finite and non-negative.  A
    /// zero Arrive slow radius is accepted and means "no slow zone".
    pub fn validate(&self) -> BehaviorResult<()> {
        match *self {
            BehaviorKind::Arrive { target_radius, slow_radius } => {
                non_negative("arrive.target_radius", target_radius)?;
                non_negative("arrive.slow_radius", slow_radius)
            }
            BehaviorKind::Wander { offset, radius, max_angle_change } => {
                non_negative("wander.offset", offset)?;
                non_negative("wander.radius", radius)?;
                non_negative("wander.max_angle_change", max_angle_change)
            }
            _ => Ok(()),
        }
    }

    /// Validate and construct the behavior.
    pub fn build(&self) -> BehaviorResult<Box<dyn SteeringBehavior>> {
        self.validate()?;
        let behavior: Box<dyn SteeringBehavior> = match *self {
            BehaviorKind::Idle    => Box::new(NoopBehavior),
            BehaviorKind::Seek    => Box::new(Seek),
            BehaviorKind::Flee    => Box::new(Flee),
            BehaviorKind::Arrive { target_radius, slow_radius } => {
                Box::new(Arrive::new(target_radius, slow_radius))
            }
            BehaviorKind::Face    => Box::new(Face),
            BehaviorKind::Pursuit => Box::new(Pursuit),
            BehaviorKind::Evade   => Box::new(Evade),
            BehaviorKind::Wander { offset, radius, max_angle_change } => {
                Box::new(Wander::new(offset, radius, max_angle_change))
            }
        };
        Ok(behavior)
    }
}

fn non_negative(field: &str, value: f32) -> BehaviorResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(BehaviorError::Config(format!(
            "{field} must be finite and non-negative, got {value}"
        )))
    }
}
