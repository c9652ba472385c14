//! The `SteeringBehavior` trait — the strategy every behavior implements.

use steer_agent::SteeringAgent;
use steer_core::AgentRng;

use crate::{ArriveBinding, DebugSink, SteeringContext, SteeringOutput};

/// Pluggable steering strategy.
///
/// Implement this trait to define how an agent wants to move this tick.
/// Exactly one behavior is active on an agent at a time; the simulation owns
/// it as a `Box<dyn SteeringBehavior>` and evaluates it once per tick.
///
/// # Required methods
///
/// [`calculate_steering`][Self::calculate_steering] and
/// [`name`][Self::name].  The binding hooks default to no-ops, which is
/// correct for every behavior that does not mutate its agent.
///
/// # Example
///
/// ```rust,ignore
/// struct Orbit;
///
/// impl SteeringBehavior for Orbit {
///     fn calculate_steering(
///         &mut self,
///         ctx:    &SteeringContext,
///         agent:  &mut dyn SteeringAgent,
///         _rng:   &mut AgentRng,
///         _debug: &mut dyn DebugSink,
///     ) -> SteeringOutput {
///         let radial = ctx.target.position - agent.position();
///         SteeringOutput::linear(radial.perp())
///     }
///
///     fn name(&self) -> &'static str { "orbit" }
/// }
/// ```
pub trait SteeringBehavior: Send + 'static {
    /// Evaluate the behavior for `agent` against `ctx.target`.
    ///
    /// May only mutate `agent` through
    /// [`SteeringAgent::set_max_linear_speed`]; only Arrive does so.
    fn calculate_steering(
        &mut self,
        ctx:   &SteeringContext,
        agent: &mut dyn SteeringAgent,
        rng:   &mut AgentRng,
        debug: &mut dyn DebugSink,
    ) -> SteeringOutput;

    /// Short lowercase identifier used in logs.
    fn name(&self) -> &'static str;

    /// End any binding this behavior holds on `agent`, undoing its side
    /// effects.  Called when the behavior is unassigned or replaced.
    ///
    /// Default: nothing to release.
    fn release(&mut self, _agent: &mut dyn SteeringAgent) {}

    /// Hand over bindings to agents this behavior is no longer steering.
    ///
    /// A behavior evaluated against a different agent than the one it is
    /// bound to cannot reach the previous agent; it parks the old binding
    /// here and the caller, which owns every agent, restores it.
    ///
    /// Default: no bindings.
    fn drain_stale_bindings(&mut self) -> Vec<ArriveBinding> {
        Vec::new()
    }
}
