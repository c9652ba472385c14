//! The `Sim` struct and its tick loop.

use log::{debug, info, warn};

use steer_agent::{AgentRngs, AgentStore};
use steer_behavior::{DebugSink, SteeringBehavior, SteeringContext};
use steer_core::{AgentId, SimClock, SimConfig, Tick};
use steer_movement::{KinematicLocomotion, Locomotion, MovementEngine};

use crate::{SimError, SimObserver, SimResult, TargetSource};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<L>` holds all simulation state and drives the three-phase tick loop:
///
/// 1. **Targets**: every agent's [`TargetSource`] is resolved against the
///    store as it was at the start of the tick.
/// 2. **Steer** (ascending `AgentId` for determinism): for every agent with a
///    behavior, evaluate it, restore any max speeds it handed back as stale
///    bindings, and integrate the output onto the agent.
/// 3. **Locomotion**: the host movement model consumes the accumulated
///    movement input and moves every agent.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
///
/// Dropping a `Sim` releases every behavior, so no agent is left with an
/// Arrive-throttled max speed.
pub struct Sim<L: Locomotion = KinematicLocomotion> {
    /// Global configuration (tick length, total ticks, seed, …).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick and maps to elapsed time.
    pub clock: SimClock,

    /// Agent state (SoA arrays).
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// Integration step plus the host locomotion model.
    pub movement: MovementEngine<L>,

    /// At most one behavior per agent, indexed by `AgentId`.
    pub(crate) behaviors: Vec<Option<Box<dyn SteeringBehavior>>>,

    /// One target source per agent, indexed by `AgentId`.
    pub(crate) targets: Vec<TargetSource>,

    pub(crate) debug: Box<dyn DebugSink>,
}

impl<L: Locomotion> Sim<L> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            "running {} agents from {} to {}",
            self.agents.count,
            self.clock.current_tick,
            self.config.end_tick(),
        );
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        info!("finished at {}", self.clock);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Run one tick and advance the clock.  Returns the number of agents
    /// steered.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<usize> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let steered = self.process_tick(now, observer)?;
        if self.config.snapshot_interval_ticks > 0
            && now.0.is_multiple_of(self.config.snapshot_interval_ticks)
        {
            observer.on_snapshot(now, &self.agents);
        }
        observer.on_tick_end(now, steered);
        self.clock.advance();
        Ok(steered)
    }

    /// Name of the behavior assigned to `agent`, if any.
    pub fn behavior_name(&self, agent: AgentId) -> Option<&'static str> {
        self.behaviors.get(agent.index())?.as_ref().map(|b| b.name())
    }

    /// Replace `agent`'s behavior, returning the previous one.
    ///
    /// The previous behavior is released first, so an Arrive that was
    /// throttling this agent puts its max speed back.  `None` leaves the
    /// agent without a behavior; it stops receiving movement input.
    pub fn set_behavior(
        &mut self,
        agent:    AgentId,
        behavior: Option<Box<dyn SteeringBehavior>>,
    ) -> SimResult<Option<Box<dyn SteeringBehavior>>> {
        if !self.agents.contains(agent) {
            return Err(SimError::AgentNotFound(agent));
        }
        let mut previous = std::mem::replace(&mut self.behaviors[agent.index()], behavior);
        if let Some(old) = previous.as_mut() {
            release_behavior(&mut self.agents, agent, old.as_mut());
            debug!("{agent}: released {}", old.name());
        }
        Ok(previous)
    }

    /// Change what `agent` steers relative to.  Takes effect next tick.
    pub fn set_target(&mut self, agent: AgentId, target: TargetSource) -> SimResult<()> {
        if !self.agents.contains(agent) {
            return Err(SimError::AgentNotFound(agent));
        }
        if let TargetSource::Agent(other) = target {
            if !self.agents.contains(other) {
                return Err(SimError::AgentNotFound(other));
            }
        }
        self.targets[agent.index()] = target;
        Ok(())
    }

    /// Release every behavior's hold on its agent.
    ///
    /// Behaviors stay assigned; the next evaluation binds again from the
    /// restored values.
    pub fn release_all(&mut self) {
        let agents = &mut self.agents;
        for (i, slot) in self.behaviors.iter_mut().enumerate() {
            if let Some(behavior) = slot.as_mut() {
                release_behavior(agents, AgentId(i as u32), behavior.as_mut());
            }
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<usize> {
        let delta_secs = self.clock.delta_secs;

        // ── Phase 1: snapshot targets ─────────────────────────────────────
        //
        // Taken before anyone moves so evaluation order cannot leak into
        // what an agent sees of another.
        let mut snapshots = Vec::with_capacity(self.agents.count);
        for (i, source) in self.targets.iter().enumerate() {
            let agent = AgentId(i as u32);
            let target = source
                .resolve(agent, &self.agents)
                .ok_or(SimError::AgentNotFound(agent))?;
            snapshots.push(target);
        }

        // ── Phase 2: steer and integrate ──────────────────────────────────
        let mut steered = 0;
        for (i, slot) in self.behaviors.iter_mut().enumerate() {
            let Some(behavior) = slot.as_mut() else {
                continue;
            };
            let agent = AgentId(i as u32);
            let ctx = SteeringContext::new(now, delta_secs, snapshots[i]);

            let output = {
                let rng = self.rngs.get_mut(agent);
                let mut handle = self
                    .agents
                    .agent_mut(agent)
                    .ok_or(SimError::AgentNotFound(agent))?;
                behavior.calculate_steering(&ctx, &mut handle, rng, self.debug.as_mut())
            };
            restore_stale(&mut self.agents, behavior.as_mut());

            let applied = self.movement.apply(&mut self.agents, agent, &output, delta_secs)?;
            observer.on_agent_steered(now, agent, &output, &applied);
            steered += 1;
        }

        // ── Phase 3: host locomotion ──────────────────────────────────────
        self.movement.advance(&mut self.agents, delta_secs)?;

        Ok(steered)
    }
}

impl<L: Locomotion> Drop for Sim<L> {
    fn drop(&mut self) {
        self.release_all();
    }
}

// ── Binding helpers ───────────────────────────────────────────────────────────

/// Restore every binding `behavior` has parked since the last call.
fn restore_stale(agents: &mut AgentStore, behavior: &mut dyn SteeringBehavior) {
    for binding in behavior.drain_stale_bindings() {
        match agents.agent_mut(binding.agent) {
            Some(mut handle) => binding.restore(&mut handle),
            None => warn!("stale binding names unknown agent {}", binding.agent),
        }
    }
}

fn release_behavior(agents: &mut AgentStore, agent: AgentId, behavior: &mut dyn SteeringBehavior) {
    if let Some(mut handle) = agents.agent_mut(agent) {
        behavior.release(&mut handle);
    }
    restore_stale(agents, behavior);
}
