//! Scenario loading tests.

use steer_behavior::BehaviorKind;
use steer_core::{AgentId, Vec2};
use steer_sim::NoopObserver;

use crate::scenario::{DEFAULT_SCENARIO, Scenario, ScenarioTarget};

#[test]
fn default_scenario_parses() {
    let scenario = Scenario::parse(DEFAULT_SCENARIO).unwrap();
    assert_eq!(
        scenario.names(),
        vec!["wanderer", "pursuer", "evader", "arriver", "facer"],
    );
    assert_eq!(scenario.config.seed, 42);
    assert_eq!(scenario.agents[0].behavior, BehaviorKind::default_wander());
    assert_eq!(scenario.agents[1].spawn.position, Vec2::new(-300.0, -200.0));
    // Omitted spawn fields fall back to defaults.
    assert_eq!(scenario.agents[1].spawn.max_angular_speed, 180.0);
    assert!(matches!(scenario.agents[0].target, ScenarioTarget::None));
}

#[test]
fn default_scenario_runs() {
    let mut scenario = Scenario::parse(DEFAULT_SCENARIO).unwrap();
    scenario.config.total_ticks = 30;
    let mut sim = scenario.build().unwrap();
    sim.run(&mut NoopObserver).unwrap();
    assert_eq!(sim.behavior_name(AgentId(3)), Some("arrive"));
    assert!(sim.agents.position.iter().all(|p| p.is_finite()));
}

#[test]
fn pursuer_turns_toward_its_path() {
    let mut scenario = Scenario::parse(DEFAULT_SCENARIO).unwrap();
    assert!(scenario.orient_to_movement);
    scenario.config.total_ticks = 30;
    let mut sim = scenario.build().unwrap();
    sim.run(&mut NoopObserver).unwrap();
    // Spawned at 45°; the wanderer lies at roughly 34° from the pursuer.
    assert!(sim.agents.rotation[1] < 44.0, "heading {}", sim.agents.rotation[1]);
}

#[test]
fn orientation_can_be_disabled() {
    let mut scenario = Scenario::parse(DEFAULT_SCENARIO).unwrap();
    scenario.orient_to_movement = false;
    scenario.config.total_ticks = 30;
    let mut sim = scenario.build().unwrap();
    sim.run(&mut NoopObserver).unwrap();
    assert!((sim.agents.rotation[1] - 45.0).abs() < 1e-4);
    assert!(sim.agents.rotation[0].abs() < 1e-4);
}

#[test]
fn unknown_target_name_rejected() {
    let json = r#"{
        "config": { "delta_secs": 0.1, "total_ticks": 1, "seed": 0 },
        "agents": [
            { "name": "a", "behavior": { "type": "seek" },
              "target": { "type": "agent", "name": "ghost" } }
        ]
    }"#;
    let err = Scenario::parse(json).unwrap().build().err().unwrap();
    assert!(err.to_string().contains("ghost"));
}

#[test]
fn duplicate_names_rejected() {
    let json = r#"{
        "config": { "delta_secs": 0.1, "total_ticks": 1, "seed": 0 },
        "agents": [ { "name": "a" }, { "name": "a" } ]
    }"#;
    assert!(Scenario::parse(json).unwrap().build().is_err());
}

#[test]
fn invalid_behavior_parameters_rejected() {
    let json = r#"{
        "config": { "delta_secs": 0.1, "total_ticks": 1, "seed": 0 },
        "agents": [
            { "name": "a", "behavior": { "type": "arrive", "target_radius": 5.0, "slow_radius": -1.0 } }
        ]
    }"#;
    assert!(Scenario::parse(json).unwrap().build().is_err());
}
