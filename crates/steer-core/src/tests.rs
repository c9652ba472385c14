//! Unit tests for steer-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(AgentId::default(), AgentId::INVALID);
        assert_eq!(AgentId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod geom {
    use crate::Vec2;
    use crate::geom::{
        delta_angle_degrees, direction_from_degrees, direction_from_radians, heading_degrees,
        normalize_or_zero,
    };

    const EPS: f32 = 1e-5;

    #[test]
    fn normalize_unit_length() {
        let v = normalize_or_zero(Vec2::new(3.0, 4.0));
        assert!((v.length() - 1.0).abs() < EPS);
        assert!((v - Vec2::new(0.6, 0.8)).length() < EPS);
    }

    #[test]
    fn normalize_zero_is_zero() {
        assert_eq!(normalize_or_zero(Vec2::ZERO), Vec2::ZERO);
        assert_eq!(normalize_or_zero(Vec2::new(f32::NAN, 1.0)), Vec2::ZERO);
    }

    #[test]
    fn directions() {
        assert!((direction_from_degrees(0.0) - Vec2::X).length() < EPS);
        assert!((direction_from_degrees(90.0) - Vec2::Y).length() < EPS);
        assert!((direction_from_radians(std::f32::consts::PI) + Vec2::X).length() < EPS);
    }

    #[test]
    fn heading_of_axes() {
        assert!(heading_degrees(Vec2::X).abs() < EPS);
        assert!((heading_degrees(Vec2::Y) - 90.0).abs() < EPS);
        assert!((heading_degrees(-Vec2::Y) + 90.0).abs() < EPS);
        assert_eq!(heading_degrees(Vec2::ZERO), 0.0);
    }

    #[test]
    fn delta_angle_takes_short_way() {
        assert!((delta_angle_degrees(0.0, 90.0) - 90.0).abs() < EPS);
        assert!((delta_angle_degrees(0.0, 270.0) + 90.0).abs() < EPS);
        assert!((delta_angle_degrees(170.0, -170.0) - 20.0).abs() < EPS);
        assert!((delta_angle_degrees(-170.0, 170.0) + 20.0).abs() < EPS);
        assert!((delta_angle_degrees(720.0, 10.0) - 10.0).abs() < EPS);
    }

    #[test]
    fn delta_angle_half_turn_is_positive() {
        assert_eq!(delta_angle_degrees(0.0, 180.0), 180.0);
        assert_eq!(delta_angle_degrees(180.0, 0.0), 180.0);
        assert_eq!(delta_angle_degrees(90.0, -90.0), 180.0);
    }

    #[test]
    fn delta_angle_range() {
        let mut from = -1000.0_f32;
        while from < 1000.0 {
            let mut to = -1000.0_f32;
            while to < 1000.0 {
                let d = delta_angle_degrees(from, to);
                assert!(d > -180.0 && d <= 180.0, "{from} -> {to} gave {d}");
                to += 37.3;
            }
            from += 41.7;
        }
    }

    #[test]
    fn delta_angle_non_finite_is_zero() {
        assert_eq!(delta_angle_degrees(f32::NAN, 10.0), 0.0);
        assert_eq!(delta_angle_degrees(0.0, f32::INFINITY), 0.0);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(3).to_string(), "T3");
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(0.5);
        assert_eq!(clock.elapsed_secs(), 0.0);
        clock.advance();
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(3));
        assert!((clock.elapsed_secs() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn config_end_tick_and_clock() {
        let cfg = SimConfig {
            delta_secs:              0.25,
            total_ticks:             40,
            seed:                    42,
            snapshot_interval_ticks: 10,
        };
        assert_eq!(cfg.end_tick(), Tick(40));
        assert_eq!(cfg.make_clock().delta_secs, 0.25);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_rejects_bad_delta() {
        for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let cfg = SimConfig { delta_secs: bad, ..SimConfig::default() };
            assert!(cfg.validate().is_err(), "{bad} should be rejected");
        }
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            assert_eq!(r1.symmetric(1.0), r2.symmetric(1.0));
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: Vec<f32> = (0..8).map(|_| r0.symmetric(1.0)).collect();
        let b: Vec<f32> = (0..8).map(|_| r1.symmetric(1.0)).collect();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn symmetric_in_bounds() {
        let mut rng = AgentRng::new(0, AgentId(0));
        let mut saw_negative = false;
        let mut saw_positive = false;
        for _ in 0..1000 {
            let v = rng.symmetric(0.3);
            assert!((-0.3..=0.3).contains(&v));
            saw_negative |= v < 0.0;
            saw_positive |= v > 0.0;
        }
        assert!(saw_negative && saw_positive);
    }

    #[test]
    fn symmetric_degenerate_widths() {
        let mut rng = AgentRng::new(0, AgentId(0));
        assert_eq!(rng.symmetric(0.0), 0.0);
        assert_eq!(rng.symmetric(f32::NAN), 0.0);
        let v = rng.symmetric(-2.0);
        assert!((-2.0..=2.0).contains(&v));
    }
}
