use std::time::Duration;

use spinwheel_lib::{FixedDraw, OffsetEngine, RngSource, WheelConfig, WheelError};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

// =============================================================================
// Idle Drift Tests
// =============================================================================

#[test]
fn test_idle_drift_advances_at_rate() {
    let mut engine = OffsetEngine::new(0.0, 0.003);
    engine.start_idle(ms(1000));

    let offset = engine.idle_drift(ms(2000));
    assert!((offset - 3.0).abs() < 1e-9);
}

#[test]
fn test_idle_drift_strictly_increases() {
    let mut engine = OffsetEngine::new(10.0, 0.003);
    engine.start_idle(ms(0));

    let mut prev = engine.offset();
    for t in (16..2000).step_by(16) {
        let next = engine.idle_drift(ms(t));
        assert!(next > prev, "offset did not increase at t={}", t);
        prev = next;
    }
}

#[test]
fn test_idle_drift_restart_does_not_jump() {
    let mut engine = OffsetEngine::new(0.0, 0.003);
    engine.start_idle(ms(0));
    engine.idle_drift(ms(500));

    engine.pin(1234.5);
    engine.start_idle(ms(9000));

    assert_eq!(engine.idle_drift(ms(9000)), 1234.5);
    assert!(engine.idle_drift(ms(9016)) > 1234.5);
}

#[test]
fn test_idle_drift_ignores_backward_clock() {
    let mut engine = OffsetEngine::new(0.0, 0.003);
    engine.start_idle(ms(1000));
    let ahead = engine.idle_drift(ms(3000));

    assert_eq!(engine.idle_drift(ms(2000)), ahead);
}

#[test]
fn test_idle_drift_noop_when_stopped() {
    let mut engine = OffsetEngine::new(42.0, 0.003);
    engine.start_idle(ms(0));
    engine.stop_idle();

    assert!(!engine.is_idling());
    assert_eq!(engine.idle_drift(ms(10_000)), 42.0);
}

// =============================================================================
// Spin Planning Tests
// =============================================================================

#[test]
fn test_plan_spin_empty_list_fails() {
    let engine = OffsetEngine::new(0.0, 0.003);
    let result = engine.plan_spin(&WheelConfig::default(), 0, &mut FixedDraw::index(0), ms(0));
    assert!(matches!(result, Err(WheelError::EmptyItemList)));
}

#[test]
fn test_plan_spin_literal_values() {
    let engine = OffsetEngine::new(0.0, 0.003);
    let mut draw = FixedDraw::index(2).with_extra_spins(5).with_duration(ms(10_000));

    let plan = engine
        .plan_spin(&WheelConfig::default(), 5, &mut draw, ms(40))
        .unwrap();

    assert_eq!(plan.random_index, 2);
    assert_eq!(plan.start_offset, 0.0);
    // 5 loops of 300 plus 2*60+32
    assert_eq!(plan.total_distance, 1652.0);
    assert_eq!(plan.duration, ms(10_000));
    assert_eq!(plan.start, ms(40));
    assert_eq!(plan.end(), ms(10_040));
}

#[test]
fn test_plan_spin_lands_on_chosen_item_from_any_offset() {
    let config = WheelConfig::default();
    let mut random = RngSource::seeded(7);

    for n in 1..=12usize {
        let loop_length = n as f64 * config.item_height;
        for start in [0.0, 17.3, 59.999, 299.99, 1234.5678, 1_000_000.5] {
            let engine = OffsetEngine::new(start, config.idle_rate);
            let plan = engine.plan_spin(&config, n, &mut random, ms(0)).unwrap();

            assert!(plan.random_index < n);
            let target = plan.random_index as f64 * config.item_height + config.centering_offset;
            let landed = plan.final_offset().rem_euclid(loop_length);
            assert!(
                (landed - target).abs() < 1e-6,
                "n={} start={} landed={} target={}",
                n,
                start,
                landed,
                target
            );
        }
    }
}

#[test]
fn test_plan_spin_always_moves_forward_several_loops() {
    let config = WheelConfig::default();
    let mut random = RngSource::seeded(99);

    for n in 1..=10usize {
        let loop_length = n as f64 * config.item_height;
        for step in 0..50 {
            let start = step as f64 * 13.7;
            let engine = OffsetEngine::new(start, config.idle_rate);
            let plan = engine.plan_spin(&config, n, &mut random, ms(0)).unwrap();

            assert!(plan.total_distance > 0.0);
            assert!(config.extra_spins.contains(&plan.extra_spins));
            assert!(plan.total_distance > (plan.extra_spins - 1) as f64 * loop_length);
            assert!(config.spin_duration.contains(&plan.duration));
        }
    }
}

// =============================================================================
// Spin Trajectory Tests
// =============================================================================

#[test]
fn test_trajectory_exact_at_completion() {
    let config = WheelConfig::default();
    let mut random = RngSource::seeded(3);

    for start in [0.0, 0.1, 77.77, 4321.123] {
        let mut engine = OffsetEngine::new(start, config.idle_rate);
        let plan = engine.plan_spin(&config, 9, &mut random, ms(500)).unwrap();

        let step = engine.spin_trajectory(&plan, plan.end());
        assert!(step.is_complete());
        assert_eq!(step.offset, plan.start_offset + plan.total_distance);
        assert_eq!(engine.offset(), plan.final_offset());

        // Late frames pin to the same value
        let late = engine.spin_trajectory(&plan, plan.end() + ms(250));
        assert_eq!(late.offset, plan.final_offset());
    }
}

#[test]
fn test_trajectory_eases_out() {
    let mut engine = OffsetEngine::new(0.0, 0.003);
    let mut draw = FixedDraw::index(2).with_duration(ms(10_000));
    let plan = engine
        .plan_spin(&WheelConfig::default(), 5, &mut draw, ms(0))
        .unwrap();

    let half = engine.spin_trajectory(&plan, ms(5000));
    assert!(!half.is_complete());
    assert!((half.offset - 1652.0 * 0.875).abs() < 1e-9);
}

#[test]
fn test_trajectory_never_decreases() {
    let config = WheelConfig::default();
    let mut engine = OffsetEngine::new(123.4, config.idle_rate);
    let plan = engine
        .plan_spin(&config, 6, &mut RngSource::seeded(11), ms(1000))
        .unwrap();

    let mut prev = engine.offset();
    let mut t = ms(1000);
    while t <= plan.end() {
        let step = engine.spin_trajectory(&plan, t);
        assert!(step.offset >= prev, "offset went backwards at {:?}", t);
        prev = step.offset;
        t += ms(16);
    }
}

#[test]
fn test_trajectory_before_start_stays_at_start() {
    let mut engine = OffsetEngine::new(50.0, 0.003);
    let plan = engine
        .plan_spin(&WheelConfig::default(), 4, &mut FixedDraw::index(1), ms(2000))
        .unwrap();

    let step = engine.spin_trajectory(&plan, ms(1000));
    assert_eq!(step.progress, 0.0);
    assert_eq!(step.offset, 50.0);
}
