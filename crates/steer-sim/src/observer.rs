//! Simulation observer trait for progress reporting and data collection.

use steer_agent::AgentStore;
use steer_behavior::SteeringOutput;
use steer_core::{AgentId, Tick};
use steer_movement::AppliedMotion;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, steered: usize) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: steered {steered} agents");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before targets are captured.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per steered agent, right after its output was integrated.
    ///
    /// `output` is what the behavior asked for; `applied` is what the
    /// integration step actually did (after angular clamping).
    fn on_agent_steered(
        &mut self,
        _tick:    Tick,
        _agent:   AgentId,
        _output:  &SteeringOutput,
        _applied: &AppliedMotion,
    ) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`
    /// ticks), after locomotion has moved the agents.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore) {}

    /// Called at the end of each tick.
    ///
    /// `steered` is the number of agents that had a behavior evaluated this
    /// tick.
    fn on_tick_end(&mut self, _tick: Tick, _steered: usize) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
