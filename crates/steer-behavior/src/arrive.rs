//! Arrive: seek the target, throttling the agent's max speed as it closes in.
//!
//! # Binding
//!
//! Arrive slows an agent down by overwriting its max linear speed every tick,
//! so it has to remember what the speed was before it started.  That memory
//! is an [`ArriveBinding`]: one agent plus its baseline max speed.
//!
//! ```text
//!   unbound ──evaluate(A)──▶ bound(A) ──evaluate(B)──▶ bound(B)
//!                              │                         │
//!                          release(A)                stale: [A]
//!                              ▼                         │ drain_stale_bindings()
//!                           unbound                      ▼
//!                                                caller restores A
//! ```
//!
//! - First evaluation against an agent captures its current max speed as the
//!   baseline.
//! - Evaluating against a different agent parks the old binding as *stale*.
//!   The behavior cannot reach the old agent, so whoever owns the agents
//!   drains stale bindings and restores each baseline.
//! - [`release`][SteeringBehavior::release] restores the bound agent
//!   directly and returns Arrive to unbound.
//!
//! Dropping an Arrive that still holds a binding leaves that agent's max
//! speed at its last throttled value; a warning is logged.

use log::{debug, warn};

use steer_agent::SteeringAgent;
use steer_core::{AgentId, AgentRng};

use crate::debug::{FORWARD_LINE_LENGTH, draw_forward};
use crate::{DebugColor, DebugSink, SteeringBehavior, SteeringContext, SteeringOutput};

/// An agent whose max linear speed Arrive has overridden, and the value to
/// put back.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArriveBinding {
    pub agent:              AgentId,
    pub baseline_max_speed: f32,
}

impl ArriveBinding {
    /// Put the baseline back on `agent`.  The caller must pass the agent this
    /// binding names.
    pub fn restore(&self, agent: &mut dyn SteeringAgent) {
        debug_assert_eq!(agent.id(), self.agent);
        agent.set_max_linear_speed(self.baseline_max_speed);
    }
}

/// Fraction of the baseline max speed an arriving agent may use.
///
/// `distance_sq` is the squared distance to the target.  The result is
/// `(distance² - target_radius²) / slow_radius²` clamped to `[0, 1]`: zero
/// inside the target radius, one far away.  A zero, negative or non-finite
/// slow radius means there is no slow zone and the fraction is always 1.
pub fn arrive_speed_fraction(distance_sq: f32, target_radius: f32, slow_radius: f32) -> f32 {
    if !(slow_radius > 0.0 && slow_radius.is_finite()) {
        return 1.0;
    }
    let fraction = (distance_sq - target_radius * target_radius) / (slow_radius * slow_radius);
    if fraction.is_nan() {
        return 1.0;
    }
    fraction.clamp(0.0, 1.0)
}

/// Seek that throttles the bound agent's max linear speed.
///
/// Dropping cannot restore anything because Arrive holds no reference to
/// the agent.  Call [`release`][SteeringBehavior::release] for the bound
/// agent (and restore anything from
/// [`drain_stale_bindings`][SteeringBehavior::drain_stale_bindings]) before
/// dropping; `Sim` does both when a behavior is unassigned or the sim is
/// dropped.
#[derive(Debug)]
pub struct Arrive {
    /// Inner radius where the agent is considered arrived.
    target_radius: f32,

    /// Width of the band, measured from the target, over which speed ramps
    /// down.
    slow_radius: f32,

    binding: Option<ArriveBinding>,

    /// Bindings replaced by a rebind and not yet handed to the caller.
    stale: Vec<ArriveBinding>,
}

impl Arrive {
    /// An unbound Arrive.  Whoever evaluates it must
    /// [`release`][SteeringBehavior::release] it before dropping.
    pub fn new(target_radius: f32, slow_radius: f32) -> Self {
        Self {
            target_radius,
            slow_radius,
            binding: None,
            stale: Vec::new(),
        }
    }

    /// The agent currently being throttled, if any.
    pub fn binding(&self) -> Option<ArriveBinding> {
        self.binding
    }

    /// Bind to `agent`, capturing its baseline max speed.
    ///
    /// No-op if already bound to it.  A previous binding to another agent is
    /// parked for [`drain_stale_bindings`][SteeringBehavior::drain_stale_bindings].
    /// Rebinding to an agent that is still parked reuses its original
    /// baseline rather than the throttled speed it currently has.
    pub fn bind(&mut self, agent: &dyn SteeringAgent) -> ArriveBinding {
        let id = agent.id();
        if let Some(binding) = self.binding {
            if binding.agent == id {
                return binding;
            }
            debug!("arrive: rebinding from {} to {}", binding.agent, id);
            self.stale.push(binding);
        }

        let baseline_max_speed = match self.stale.iter().position(|b| b.agent == id) {
            Some(i) => self.stale.swap_remove(i).baseline_max_speed,
            None    => agent.max_linear_speed(),
        };
        let binding = ArriveBinding { agent: id, baseline_max_speed };
        debug!("arrive: bound to {id} (baseline max speed {baseline_max_speed})");
        self.binding = Some(binding);
        binding
    }
}

impl SteeringBehavior for Arrive {
    fn calculate_steering(
        &mut self,
        ctx:   &SteeringContext,
        agent: &mut dyn SteeringAgent,
        _rng:  &mut AgentRng,
        debug: &mut dyn DebugSink,
    ) -> SteeringOutput {
        let binding = self.bind(agent);

        let position  = agent.position();
        let to_target = ctx.target.position - position;
        let fraction  = arrive_speed_fraction(
            to_target.length_squared(),
            self.target_radius,
            self.slow_radius,
        );
        agent.set_max_linear_speed(binding.baseline_max_speed * fraction);

        draw_forward(debug, position, agent.forward(), FORWARD_LINE_LENGTH * fraction);
        debug.circle(ctx.target.position, self.slow_radius.max(0.0), DebugColor::Blue);
        debug.circle(ctx.target.position, self.target_radius.abs(), DebugColor::Black);

        SteeringOutput::linear(to_target)
    }

    fn name(&self) -> &'static str {
        "arrive"
    }

    fn release(&mut self, agent: &mut dyn SteeringAgent) {
        let id = agent.id();
        if let Some(i) = self.stale.iter().position(|b| b.agent == id) {
            self.stale.swap_remove(i).restore(agent);
            debug!("arrive: restored stale binding on {id}");
            return;
        }
        match self.binding {
            Some(binding) if binding.agent == id => {
                binding.restore(agent);
                self.binding = None;
                debug!("arrive: released {id}");
            }
            Some(binding) => {
                warn!("arrive: release requested for {id} but bound to {}", binding.agent);
            }
            None => {}
        }
    }

    fn drain_stale_bindings(&mut self) -> Vec<ArriveBinding> {
        std::mem::take(&mut self.stale)
    }
}

impl Drop for Arrive {
    fn drop(&mut self) {
        if let Some(binding) = self.binding {
            warn!(
                "arrive dropped while bound to {}; max speed left throttled (baseline {})",
                binding.agent, binding.baseline_max_speed,
            );
        }
        for binding in &self.stale {
            warn!("arrive dropped with unrestored stale binding on {}", binding.agent);
        }
    }
}

