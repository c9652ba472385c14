//! Unit tests for steer-behavior.

use steer_agent::{AgentSpawn, AgentStore, AgentStoreBuilder, SteeringAgent};
use steer_core::{AgentId, AgentRng, Tick, Vec2};

use crate::{
    DebugRecorder, NoopDebugSink, SteeringBehavior, SteeringContext, SteeringOutput, TargetData,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const EPS: f32 = 1e-4;

fn store_with(spawns: Vec<AgentSpawn>) -> AgentStore {
    let (store, _rngs) = AgentStoreBuilder::new(0).spawn_all(spawns).build();
    store
}

/// One agent at `position` facing `rotation` degrees, max speed 100.
fn single(position: Vec2, rotation: f32) -> AgentStore {
    store_with(vec![AgentSpawn::at(position).facing(rotation)])
}

fn ctx(target: TargetData) -> SteeringContext {
    SteeringContext::new(Tick(0), 0.1, target)
}

fn rng() -> AgentRng {
    AgentRng::new(0, AgentId(0))
}

/// Evaluate `behavior` once for agent 0 of `store` against `target`.
fn eval<B: SteeringBehavior>(
    behavior: &mut B,
    store:    &mut AgentStore,
    target:   TargetData,
) -> SteeringOutput {
    eval_agent(behavior, store, AgentId(0), target)
}

fn eval_agent<B: SteeringBehavior>(
    behavior: &mut B,
    store:    &mut AgentStore,
    agent:    AgentId,
    target:   TargetData,
) -> SteeringOutput {
    let mut handle = store.agent_mut(agent).unwrap();
    behavior.calculate_steering(&ctx(target), &mut handle, &mut rng(), &mut NoopDebugSink)
}

fn close(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < EPS
}

/// A spread of agent/target position pairs with distinct positions.
fn position_pairs() -> Vec<(Vec2, Vec2)> {
    let points = [
        Vec2::new(0.0, 0.0),
        Vec2::new(100.0, 0.0),
        Vec2::new(-37.5, 12.0),
        Vec2::new(3.0, -4.0),
        Vec2::new(250.0, 250.0),
        Vec2::new(-0.5, 0.25),
    ];
    let mut pairs = Vec::new();
    for &a in &points {
        for &b in &points {
            if a != b {
                pairs.push((a, b));
            }
        }
    }
    pairs
}

// ── Seek ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod seek_tests {
    use super::*;
    use crate::{Seek, seek_direction};

    #[test]
    fn unit_vector_toward_target() {
        for (agent, target) in position_pairs() {
            let mut store = single(agent, 0.0);
            let out = eval(&mut Seek, &mut store, TargetData::at(target));
            assert!((out.linear.length() - 1.0).abs() < EPS);
            assert!(close(out.linear, (target - agent).normalize()));
            assert_eq!(out.angular, 0.0);
        }
    }

    #[test]
    fn along_x_axis() {
        let mut store = single(Vec2::ZERO, 0.0);
        let out = eval(&mut Seek, &mut store, TargetData::at(Vec2::new(100.0, 0.0)));
        assert!(close(out.linear, Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn coincident_target_is_zero() {
        let p = Vec2::new(5.0, 5.0);
        assert_eq!(seek_direction(p, p), Vec2::ZERO);
        let mut store = single(p, 0.0);
        let out = eval(&mut Seek, &mut store, TargetData::at(p));
        assert_eq!(out, SteeringOutput::ZERO);
    }

    #[test]
    fn does_not_touch_max_speed() {
        let mut store = single(Vec2::ZERO, 0.0);
        eval(&mut Seek, &mut store, TargetData::at(Vec2::new(1.0, 1.0)));
        assert_eq!(store.max_linear_speed[0], 100.0);
    }
}

// ── Flee ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod flee_tests {
    use super::*;
    use crate::{Flee, Seek};

    #[test]
    fn opposite_of_seek_at_full_distance() {
        for (agent, target) in position_pairs() {
            let mut store = single(agent, 0.0);
            let seek = eval(&mut Seek, &mut store, TargetData::at(target));
            let flee = eval(&mut Flee, &mut store, TargetData::at(target));

            let distance = agent.distance(target);
            assert!((flee.linear.length() - distance).abs() < EPS * distance.max(1.0));
            assert!(close(flee.linear.normalize(), -seek.linear));
        }
    }

    #[test]
    fn not_normalised() {
        let mut store = single(Vec2::ZERO, 0.0);
        let out = eval(&mut Flee, &mut store, TargetData::at(Vec2::new(30.0, 40.0)));
        assert!(close(out.linear, Vec2::new(-30.0, -40.0)));
        assert_eq!(out.angular, 0.0);
    }
}

// ── Arrive ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod arrive_tests {
    use super::*;
    use crate::{Arrive, ArriveBinding, arrive_speed_fraction};

    const TARGET_RADIUS: f32 = 10.0;
    const SLOW_RADIUS:   f32 = 50.0;

    fn fraction_at(distance: f32) -> f32 {
        arrive_speed_fraction(distance * distance, TARGET_RADIUS, SLOW_RADIUS)
    }

    #[test]
    fn fraction_one_beyond_slow_zone() {
        assert_eq!(fraction_at(TARGET_RADIUS + SLOW_RADIUS), 1.0);
        assert_eq!(fraction_at(1_000.0), 1.0);
    }

    #[test]
    fn fraction_zero_at_target_radius() {
        assert_eq!(fraction_at(TARGET_RADIUS), 0.0);
        assert_eq!(fraction_at(TARGET_RADIUS * 0.5), 0.0);
        assert_eq!(fraction_at(0.0), 0.0);
    }

    #[test]
    fn fraction_monotonic_and_continuous() {
        let mut prev = fraction_at(TARGET_RADIUS);
        let mut d = TARGET_RADIUS;
        while d <= TARGET_RADIUS + SLOW_RADIUS {
            let f = fraction_at(d);
            assert!((0.0..=1.0).contains(&f));
            assert!(f >= prev, "fraction decreased at distance {d}");
            assert!(f - prev < 0.05, "jump at distance {d}: {prev} -> {f}");
            prev = f;
            d += 0.25;
        }
    }

    #[test]
    fn degenerate_slow_radius_means_no_slow_zone() {
        assert_eq!(arrive_speed_fraction(4.0, 10.0, 0.0), 1.0);
        assert_eq!(arrive_speed_fraction(4.0, 10.0, -5.0), 1.0);
        assert_eq!(arrive_speed_fraction(4.0, 10.0, f32::NAN), 1.0);
        assert_eq!(arrive_speed_fraction(4.0, 10.0, f32::INFINITY), 1.0);
    }

    #[test]
    fn linear_output_is_unnormalised_offset() {
        let mut store = single(Vec2::ZERO, 0.0);
        let mut arrive = Arrive::new(TARGET_RADIUS, SLOW_RADIUS);
        let out = eval(&mut arrive, &mut store, TargetData::at(Vec2::new(300.0, 400.0)));
        assert!(close(out.linear, Vec2::new(300.0, 400.0)));
        assert_eq!(out.angular, 0.0);
        arrive.release(&mut store.agent_mut(AgentId(0)).unwrap());
    }

    #[test]
    fn throttles_from_baseline_not_current_speed() {
        let mut store = single(Vec2::ZERO, 0.0);
        let mut arrive = Arrive::new(TARGET_RADIUS, SLOW_RADIUS);
        // distance 30: (900 - 100) / 2500 = 0.32
        let target = TargetData::at(Vec2::new(30.0, 0.0));

        eval(&mut arrive, &mut store, target);
        assert!((store.max_linear_speed[0] - 32.0).abs() < EPS);

        // A second evaluation must not compound the reduction.
        eval(&mut arrive, &mut store, target);
        assert!((store.max_linear_speed[0] - 32.0).abs() < EPS);

        assert_eq!(
            arrive.binding(),
            Some(ArriveBinding { agent: AgentId(0), baseline_max_speed: 100.0 }),
        );
        arrive.release(&mut store.agent_mut(AgentId(0)).unwrap());
    }

    #[test]
    fn stops_inside_target_radius() {
        let mut store = single(Vec2::ZERO, 0.0);
        let mut arrive = Arrive::new(TARGET_RADIUS, SLOW_RADIUS);
        eval(&mut arrive, &mut store, TargetData::at(Vec2::new(5.0, 0.0)));
        assert_eq!(store.max_linear_speed[0], 0.0);
        arrive.release(&mut store.agent_mut(AgentId(0)).unwrap());
    }

    #[test]
    fn release_restores_baseline() {
        let mut store = single(Vec2::ZERO, 0.0);
        let mut arrive = Arrive::new(TARGET_RADIUS, SLOW_RADIUS);
        eval(&mut arrive, &mut store, TargetData::at(Vec2::new(20.0, 0.0)));
        assert!(store.max_linear_speed[0] < 100.0);

        arrive.release(&mut store.agent_mut(AgentId(0)).unwrap());
        assert_eq!(store.max_linear_speed[0], 100.0);
        assert!(arrive.binding().is_none());

        // Releasing twice is harmless.
        store.max_linear_speed[0] = 77.0;
        arrive.release(&mut store.agent_mut(AgentId(0)).unwrap());
        assert_eq!(store.max_linear_speed[0], 77.0);
    }

    #[test]
    fn drop_without_release_leaves_speed_throttled() {
        let mut store = single(Vec2::ZERO, 0.0);
        {
            let mut arrive = Arrive::new(TARGET_RADIUS, SLOW_RADIUS);
            eval(&mut arrive, &mut store, TargetData::at(Vec2::new(5.0, 0.0)));
        }
        assert_eq!(store.max_linear_speed[0], 0.0);

        // The documented contract: release first, then drop.
        {
            let mut arrive = Arrive::new(TARGET_RADIUS, SLOW_RADIUS);
            store.max_linear_speed[0] = 100.0;
            eval(&mut arrive, &mut store, TargetData::at(Vec2::new(5.0, 0.0)));
            arrive.release(&mut store.agent_mut(AgentId(0)).unwrap());
        }
        assert_eq!(store.max_linear_speed[0], 100.0);
    }

    #[test]
    fn rebind_parks_previous_agent() {
        let mut store = store_with(vec![
            AgentSpawn::at(Vec2::ZERO).max_linear_speed(100.0),
            AgentSpawn::at(Vec2::ZERO).max_linear_speed(200.0),
        ]);
        let mut arrive = Arrive::new(TARGET_RADIUS, SLOW_RADIUS);
        let target = TargetData::at(Vec2::new(20.0, 0.0));

        eval_agent(&mut arrive, &mut store, AgentId(0), target);
        eval_agent(&mut arrive, &mut store, AgentId(1), target);

        // New agent captured with its own baseline.
        assert_eq!(arrive.binding().unwrap().agent, AgentId(1));
        assert_eq!(arrive.binding().unwrap().baseline_max_speed, 200.0);

        // Old agent handed back for restoration with its original baseline.
        let stale = arrive.drain_stale_bindings();
        assert_eq!(stale, vec![ArriveBinding { agent: AgentId(0), baseline_max_speed: 100.0 }]);
        stale[0].restore(&mut store.agent_mut(AgentId(0)).unwrap());
        assert_eq!(store.max_linear_speed[0], 100.0);
        assert!(arrive.drain_stale_bindings().is_empty());

        arrive.release(&mut store.agent_mut(AgentId(1)).unwrap());
        assert_eq!(store.max_linear_speed[1], 200.0);
    }

    #[test]
    fn rebind_back_before_drain_keeps_original_baseline() {
        let mut store = store_with(vec![AgentSpawn::default(), AgentSpawn::default()]);
        let mut arrive = Arrive::new(TARGET_RADIUS, SLOW_RADIUS);
        let target = TargetData::at(Vec2::new(20.0, 0.0));

        eval_agent(&mut arrive, &mut store, AgentId(0), target);
        eval_agent(&mut arrive, &mut store, AgentId(1), target);
        eval_agent(&mut arrive, &mut store, AgentId(0), target);

        assert_eq!(arrive.binding().unwrap().baseline_max_speed, 100.0);
        let stale = arrive.drain_stale_bindings();
        assert_eq!(stale.len(), 1);
        assert_eq!(stale[0].agent, AgentId(1));

        stale[0].restore(&mut store.agent_mut(AgentId(1)).unwrap());
        arrive.release(&mut store.agent_mut(AgentId(0)).unwrap());
        assert_eq!(store.max_linear_speed[0], 100.0);
        assert_eq!(store.max_linear_speed[1], 100.0);
    }

    #[test]
    fn release_of_stale_agent_restores_it() {
        let mut store = store_with(vec![AgentSpawn::default(), AgentSpawn::default()]);
        let mut arrive = Arrive::new(TARGET_RADIUS, SLOW_RADIUS);
        let target = TargetData::at(Vec2::new(20.0, 0.0));

        eval_agent(&mut arrive, &mut store, AgentId(0), target);
        eval_agent(&mut arrive, &mut store, AgentId(1), target);
        arrive.release(&mut store.agent_mut(AgentId(0)).unwrap());

        assert_eq!(store.max_linear_speed[0], 100.0);
        assert!(arrive.drain_stale_bindings().is_empty());
        assert_eq!(arrive.binding().unwrap().agent, AgentId(1));
        arrive.release(&mut store.agent_mut(AgentId(1)).unwrap());
    }

    #[test]
    fn draws_both_radii() {
        let mut store = single(Vec2::ZERO, 0.0);
        let mut arrive = Arrive::new(TARGET_RADIUS, SLOW_RADIUS);
        let mut debug = DebugRecorder::new();
        let target = TargetData::at(Vec2::new(100.0, 0.0));
        {
            let mut handle = store.agent_mut(AgentId(0)).unwrap();
            arrive.calculate_steering(&ctx(target), &mut handle, &mut rng(), &mut debug);
            arrive.release(&mut handle);
        }
        let radii: Vec<f32> = debug.circles().map(|(_, r, _)| r).collect();
        assert!(radii.contains(&SLOW_RADIUS));
        assert!(radii.contains(&TARGET_RADIUS));
    }
}

// ── Face ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod face_tests {
    use super::*;
    use crate::{Face, face_angle};

    #[test]
    fn zero_when_already_facing() {
        let mut store = single(Vec2::ZERO, 0.0);
        let out = eval(&mut Face, &mut store, TargetData::at(Vec2::new(100.0, 0.0)));
        assert!(out.angular.abs() < EPS);
        assert_eq!(out.linear, Vec2::ZERO);

        assert!(face_angle(Vec2::ZERO, 45.0, Vec2::new(10.0, 10.0)).abs() < EPS);
    }

    #[test]
    fn shortest_turn() {
        assert!((face_angle(Vec2::ZERO, 0.0, Vec2::new(0.0, 10.0)) - 90.0).abs() < EPS);
        assert!((face_angle(Vec2::ZERO, 0.0, Vec2::new(0.0, -10.0)) + 90.0).abs() < EPS);
        assert!((face_angle(Vec2::ZERO, 170.0, Vec2::new(-10.0, -1.0)) - 15.71).abs() < 0.01);
        assert!((face_angle(Vec2::ZERO, 0.0, Vec2::new(-10.0, 0.0)) - 180.0).abs() < EPS);
    }

    #[test]
    fn always_in_half_open_range() {
        for rotation in [-179.0, -90.0, 0.0, 45.0, 135.0, 180.0] {
            for (agent, target) in position_pairs() {
                let mut store = single(agent, rotation);
                let out = eval(&mut Face, &mut store, TargetData::at(target));
                assert!(
                    out.angular > -180.0 && out.angular <= 180.0,
                    "rotation {rotation}, {agent} -> {target}: {}",
                    out.angular,
                );
            }
        }
    }

    #[test]
    fn coincident_target_no_turn() {
        assert_eq!(face_angle(Vec2::ONE, 123.0, Vec2::ONE), 0.0);
    }
}

// ── Pursuit / Evade ───────────────────────────────────────────────────────────

#[cfg(test)]
mod pursuit_tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;
    use crate::{Evade, Pursuit, predict_target_position, pursuit_vector};

    #[test]
    fn predicts_along_target_heading_by_distance() {
        let target = TargetData::new(Vec2::new(100.0, 0.0), FRAC_PI_2);
        let predicted = predict_target_position(Vec2::ZERO, &target);
        assert!(close(predicted, Vec2::new(100.0, 100.0)));

        let mut store = single(Vec2::ZERO, 0.0);
        let out = eval(&mut Pursuit, &mut store, target);
        assert!(close(out.linear, Vec2::new(100.0, 100.0)));
        assert_eq!(out.angular, 0.0);
    }

    #[test]
    fn target_heading_away_doubles_distance() {
        let target = TargetData::new(Vec2::new(50.0, 0.0), 0.0);
        assert!(close(pursuit_vector(Vec2::ZERO, &target), Vec2::new(100.0, 0.0)));
    }

    #[test]
    fn evade_is_exact_negation() {
        for orientation in [0.0, 0.7, FRAC_PI_2, 3.0, -2.2] {
            for (agent, position) in position_pairs() {
                let target = TargetData::new(position, orientation);
                let mut store = single(agent, 0.0);
                let pursuit = eval(&mut Pursuit, &mut store, target);
                let evade = eval(&mut Evade, &mut store, target);
                assert_eq!(evade.linear, -pursuit.linear);
            }
        }
    }

    #[test]
    fn draws_prediction_marker() {
        let target = TargetData::new(Vec2::new(100.0, 0.0), FRAC_PI_2);
        let mut store = single(Vec2::ZERO, 0.0);
        let mut debug = DebugRecorder::new();
        let mut handle = store.agent_mut(AgentId(0)).unwrap();
        Pursuit.calculate_steering(&ctx(target), &mut handle, &mut rng(), &mut debug);
        let (center, _, _) = debug.circles().next().unwrap();
        assert!(close(center, Vec2::new(100.0, 100.0)));
    }
}

// ── Wander ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod wander_tests {
    use super::*;
    use crate::Wander;

    const OFFSET: f32 = 70.0;
    const RADIUS: f32 = 50.0;
    const MAX_CHANGE: f32 = 0.3;

    #[test]
    fn angle_drift_bounded_per_step_and_cumulatively() {
        let mut store = single(Vec2::ZERO, 0.0);
        let mut wander = Wander::new(OFFSET, RADIUS, MAX_CHANGE);
        let mut rng = AgentRng::new(99, AgentId(0));
        let mut handle = store.agent_mut(AgentId(0)).unwrap();

        let mut prev = wander.wander_angle();
        for n in 1..=500 {
            wander.calculate_steering(
                &ctx(TargetData::default()),
                &mut handle,
                &mut rng,
                &mut NoopDebugSink,
            );
            let angle = wander.wander_angle();
            assert!((angle - prev).abs() <= MAX_CHANGE + EPS);
            assert!(angle.abs() <= n as f32 * MAX_CHANGE + EPS);
            prev = angle;
        }
    }

    #[test]
    fn synthetic_target_within_reach() {
        let mut store = store_with(vec![
            AgentSpawn::at(Vec2::new(10.0, -20.0)).facing(33.0),
            AgentSpawn::at(Vec2::new(-400.0, 5.0)).facing(-150.0),
        ]);
        let mut wander = Wander::new(OFFSET, RADIUS, MAX_CHANGE);
        let mut rng = AgentRng::new(3, AgentId(0));

        for step in 0..200 {
            let id = AgentId(step % 2);
            let mut handle = store.agent_mut(id).unwrap();
            let position = handle.position();
            let out = wander.calculate_steering(
                &ctx(TargetData::default()),
                &mut handle,
                &mut rng,
                &mut NoopDebugSink,
            );
            let target = wander.last_target().unwrap();
            assert!(position.distance(target) <= OFFSET + RADIUS + EPS);
            assert!((out.linear.length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn zero_change_is_deterministic_seek() {
        let mut store = single(Vec2::ZERO, 90.0);
        let mut wander = Wander::new(OFFSET, RADIUS, 0.0);
        let out = eval(&mut wander, &mut store, TargetData::default());

        // Circle centre straight ahead (+Y), point at angle 0 on it (+X).
        let expected_target = Vec2::new(RADIUS, OFFSET);
        assert!(close(wander.last_target().unwrap(), expected_target));
        assert!(close(out.linear, expected_target.normalize()));
        assert_eq!(wander.wander_angle(), 0.0);
    }

    #[test]
    fn same_seed_same_walk() {
        let run = || {
            let mut store = single(Vec2::ZERO, 0.0);
            let mut wander = Wander::new(OFFSET, RADIUS, MAX_CHANGE).with_angle(1.0);
            let mut rng = AgentRng::new(7, AgentId(0));
            let mut handle = store.agent_mut(AgentId(0)).unwrap();
            (0..50)
                .map(|_| {
                    wander
                        .calculate_steering(
                            &ctx(TargetData::default()),
                            &mut handle,
                            &mut rng,
                            &mut NoopDebugSink,
                        )
                        .linear
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn ignores_supplied_target() {
        let mut store = single(Vec2::ZERO, 0.0);
        let mut a = Wander::new(OFFSET, RADIUS, 0.0);
        let mut b = Wander::new(OFFSET, RADIUS, 0.0);
        let out_a = eval(&mut a, &mut store, TargetData::at(Vec2::new(-1_000.0, 0.0)));
        let out_b = eval(&mut b, &mut store, TargetData::at(Vec2::new(0.0, 1_000.0)));
        assert_eq!(out_a, out_b);
    }
}

// ── NoopBehavior / BehaviorKind ───────────────────────────────────────────────

#[cfg(test)]
mod kind_tests {
    use super::*;
    use crate::{BehaviorKind, NoopBehavior};

    #[test]
    fn noop_returns_zero() {
        let mut store = single(Vec2::ZERO, 0.0);
        let out = eval(&mut NoopBehavior, &mut store, TargetData::at(Vec2::new(5.0, 5.0)));
        assert_eq!(out, SteeringOutput::ZERO);
    }

    #[test]
    fn builds_every_kind() {
        let kinds = [
            BehaviorKind::Idle,
            BehaviorKind::Seek,
            BehaviorKind::Flee,
            BehaviorKind::Arrive { target_radius: 5.0, slow_radius: 0.0 },
            BehaviorKind::Face,
            BehaviorKind::Pursuit,
            BehaviorKind::Evade,
            BehaviorKind::default_wander(),
        ];
        for kind in kinds {
            let behavior = kind.build().unwrap();
            assert_eq!(behavior.name(), kind.name());
        }
    }

    #[test]
    fn rejects_bad_parameters() {
        let bad = [
            BehaviorKind::Arrive { target_radius: -1.0, slow_radius: 10.0 },
            BehaviorKind::Arrive { target_radius: 1.0, slow_radius: f32::NAN },
            BehaviorKind::Wander { offset: 1.0, radius: -2.0, max_angle_change: 0.1 },
            BehaviorKind::Wander { offset: f32::INFINITY, radius: 2.0, max_angle_change: 0.1 },
        ];
        for kind in bad {
            assert!(kind.build().is_err(), "{kind:?} should be rejected");
        }
    }

    #[test]
    fn boxed_behaviors_are_interchangeable() {
        let mut store = single(Vec2::ZERO, 0.0);
        let target = TargetData::at(Vec2::new(0.0, 10.0));
        let mut behaviors = vec![
            BehaviorKind::Seek.build().unwrap(),
            BehaviorKind::Face.build().unwrap(),
        ];
        let outputs: Vec<SteeringOutput> = behaviors
            .iter_mut()
            .map(|b| {
                let mut handle = store.agent_mut(AgentId(0)).unwrap();
                b.calculate_steering(&ctx(target), &mut handle, &mut rng(), &mut NoopDebugSink)
            })
            .collect();
        assert!(close(outputs[0].linear, Vec2::Y));
        assert!((outputs[1].angular - 90.0).abs() < EPS);
    }
}
