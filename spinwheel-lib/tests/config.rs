use std::time::Duration;

use spinwheel_lib::config::{CENTERING_OFFSET, ITEM_HEIGHT, PAUSE};
use spinwheel_lib::{WheelConfig, WheelError};

#[test]
fn test_default_config_is_valid() {
    let config = WheelConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.item_height, ITEM_HEIGHT);
    assert_eq!(config.centering_offset, CENTERING_OFFSET);
    assert_eq!(config.pause, PAUSE);
    assert_eq!(config.extra_spins, 5..=7);
}

#[test]
fn test_builder_overrides() {
    let config = WheelConfig::new()
        .item_height(40.0, 20.0)
        .idle_rate(0.01)
        .extra_spins(6..=6)
        .spin_duration(Duration::from_secs(2)..=Duration::from_secs(3))
        .pause(Duration::from_millis(500))
        .contract_delay(Duration::ZERO);

    assert!(config.validate().is_ok());
    assert_eq!(config.item_height, 40.0);
    assert_eq!(config.centering_offset, 20.0);
    assert_eq!(config.extra_spins, 6..=6);
    assert_eq!(config.contract_delay, Duration::ZERO);
}

fn assert_invalid(config: WheelConfig) {
    assert!(matches!(
        config.validate(),
        Err(WheelError::InvalidConfig { .. })
    ));
}

#[test]
fn test_validate_rejects_bad_geometry() {
    assert_invalid(WheelConfig::new().item_height(0.0, 0.0));
    assert_invalid(WheelConfig::new().item_height(f64::NAN, 0.0));
    assert_invalid(WheelConfig::new().item_height(60.0, 60.0));
    assert_invalid(WheelConfig::new().item_height(60.0, -1.0));
}

#[test]
fn test_validate_rejects_bad_spin_ranges() {
    let (low, high) = (5, 4);
    assert_invalid(WheelConfig::new().extra_spins(0..=3));
    assert_invalid(WheelConfig::new().extra_spins(low..=high));

    let (short, long) = (Duration::from_secs(1), Duration::from_secs(5));
    assert_invalid(WheelConfig::new().spin_duration(Duration::ZERO..=short));
    assert_invalid(WheelConfig::new().spin_duration(long..=short));
}

#[test]
fn test_validate_rejects_negative_rate() {
    assert_invalid(WheelConfig::new().idle_rate(-0.1));
}

#[test]
fn test_validate_rejects_bad_floors() {
    assert_invalid(WheelConfig {
        min_opacity: 1.5,
        ..WheelConfig::default()
    });
    assert_invalid(WheelConfig {
        fade_distance: 0.0,
        ..WheelConfig::default()
    });
}
