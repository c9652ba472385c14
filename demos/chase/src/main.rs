//! chase — a handful of steering agents chasing, fleeing and wandering.
//!
//! Runs the embedded five-agent scenario (or one loaded with `--scenario`)
//! through the fixed-step simulation and prints where everyone ended up.

mod logging;
mod scenario;

#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use log::info;

use steer_agent::AgentStore;
use steer_behavior::SteeringOutput;
use steer_core::{AgentId, Tick};
use steer_movement::AppliedMotion;
use steer_sim::SimObserver;

use scenario::{DEFAULT_SCENARIO, Scenario};

/// Run a steering-behavior scenario
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario JSON file; the built-in chase scenario is used if omitted
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Override the scenario's tick count
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs agent positions at snapshot ticks and tallies the turning done.
struct ChaseObserver {
    names:           Vec<String>,
    steered_total:   usize,
    clamped_turns:   usize,
    total_turn_degs: Vec<f32>,
}

impl ChaseObserver {
    fn new(names: Vec<String>) -> Self {
        let count = names.len();
        Self {
            names,
            steered_total:   0,
            clamped_turns:   0,
            total_turn_degs: vec![0.0; count],
        }
    }
}

impl SimObserver for ChaseObserver {
    fn on_agent_steered(
        &mut self,
        _tick:   Tick,
        agent:   AgentId,
        output:  &SteeringOutput,
        applied: &AppliedMotion,
    ) {
        self.steered_total += 1;
        if applied.rotation_delta != output.angular && applied.rotation_delta != 0.0 {
            self.clamped_turns += 1;
        }
        self.total_turn_degs[agent.index()] += applied.rotation_delta.abs();
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        for id in agents.agent_ids() {
            let p = agents.position[id.index()];
            info!(
                "{tick} {:<10} ({:>8.1}, {:>8.1})",
                self.names[id.index()],
                p.x,
                p.y,
            );
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        info!(
            "{final_tick}: {} evaluations, {} turns clamped",
            self.steered_total, self.clamped_turns,
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut scenario = match &args.scenario {
        Some(path) => Scenario::load(path)?,
        None       => Scenario::parse(DEFAULT_SCENARIO)?,
    };
    if let Some(ticks) = args.ticks {
        scenario.config.total_ticks = ticks;
    }

    println!("=== chase — steering behaviors ===");
    println!(
        "Agents: {}  |  Ticks: {} × {:.4} s  |  Seed: {}",
        scenario.agents.len(),
        scenario.config.total_ticks,
        scenario.config.delta_secs,
        scenario.config.seed,
    );
    println!();

    let names: Vec<String> = scenario.names().into_iter().map(str::to_owned).collect();
    let mut sim = scenario.build()?;
    let mut obs = ChaseObserver::new(names.clone());

    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    println!("Simulation complete in {:.3} s ({})", elapsed.as_secs_f64(), sim.clock);
    println!();

    println!(
        "{:<10} {:<8} {:>18} {:>9} {:>9} {:>10}",
        "Agent", "Behavior", "Position", "Heading", "MaxSpeed", "Turned",
    );
    println!("{}", "-".repeat(69));
    for id in sim.agents.agent_ids() {
        let i = id.index();
        let p = sim.agents.position[i];
        println!(
            "{:<10} {:<8} {:>18} {:>9.1} {:>9.1} {:>10.1}",
            names[i],
            sim.behavior_name(id).unwrap_or("-"),
            format!("({:.1}, {:.1})", p.x, p.y),
            sim.agents.rotation[i],
            sim.agents.max_linear_speed[i],
            obs.total_turn_degs[i],
        );
    }

    Ok(())
}
