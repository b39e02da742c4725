//! Wheel configuration.

use std::ops::RangeInclusive;
use std::time::Duration;

use crate::easing::{Easing, TransitionConfig};
use crate::error::WheelError;

/// Height of one row, in offset units.
pub const ITEM_HEIGHT: f64 = 60.0;

/// Shift aligning an item's visual center with the pointer. Tuned by eye.
pub const CENTERING_OFFSET: f64 = 32.0;

/// Idle drift speed in offset units per millisecond.
pub const IDLE_RATE: f64 = 0.003;

/// Grace window between landing and showing the winner. Tuned by eye.
pub const PAUSE: Duration = Duration::from_millis(10);

/// Delay between dismissing the winner and contracting the surface.
pub const CONTRACT_DELAY: Duration = Duration::from_millis(200);

/// Tunables for the offset engine, the layout projection and the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelConfig {
    /// Height of one row.
    pub item_height: f64,

    /// Added to an item's top edge to reach its visual center.
    pub centering_offset: f64,

    /// Idle drift speed (units per millisecond).
    pub idle_rate: f64,

    /// Full loops added to every spin, chosen uniformly.
    pub extra_spins: RangeInclusive<u32>,

    /// Spin duration, chosen uniformly.
    pub spin_duration: RangeInclusive<Duration>,

    /// Time spent in Landed before the winner is shown.
    pub pause: Duration,

    /// Delay before the surface contracts after a dismissal.
    pub contract_delay: Duration,

    /// Distance from center at which opacity reaches its floor.
    pub fade_distance: f64,

    /// Opacity floor.
    pub min_opacity: f64,

    /// Distance from center at which scale reaches its floor.
    pub shrink_distance: f64,

    /// Scale floor.
    pub min_scale: f64,

    /// Transition applied to item attributes outside of a spin.
    pub settle_transition: TransitionConfig,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            item_height: ITEM_HEIGHT,
            centering_offset: CENTERING_OFFSET,
            idle_rate: IDLE_RATE,
            extra_spins: 5..=7,
            spin_duration: Duration::from_secs(10)..=Duration::from_secs(15),
            pause: PAUSE,
            contract_delay: CONTRACT_DELAY,
            fade_distance: 150.0,
            min_opacity: 0.2,
            shrink_distance: 300.0,
            min_scale: 0.7,
            settle_transition: TransitionConfig::new(Duration::from_millis(100), Easing::EaseOut),
        }
    }
}

impl WheelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the row height and the centering shift together.
    pub fn item_height(mut self, height: f64, centering_offset: f64) -> Self {
        self.item_height = height;
        self.centering_offset = centering_offset;
        self
    }

    pub fn idle_rate(mut self, rate: f64) -> Self {
        self.idle_rate = rate;
        self
    }

    pub fn extra_spins(mut self, spins: RangeInclusive<u32>) -> Self {
        self.extra_spins = spins;
        self
    }

    pub fn spin_duration(mut self, duration: RangeInclusive<Duration>) -> Self {
        self.spin_duration = duration;
        self
    }

    pub fn pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    pub fn contract_delay(mut self, delay: Duration) -> Self {
        self.contract_delay = delay;
        self
    }

    /// Check the configuration for values that break the landing math.
    pub fn validate(&self) -> Result<(), WheelError> {
        if !self.item_height.is_finite() || self.item_height <= 0.0 {
            return Err(WheelError::invalid_config("item_height must be positive"));
        }
        if !(0.0..self.item_height).contains(&self.centering_offset) {
            return Err(WheelError::invalid_config(
                "centering_offset must lie in [0, item_height)",
            ));
        }
        if !self.idle_rate.is_finite() || self.idle_rate < 0.0 {
            return Err(WheelError::invalid_config("idle_rate must be non-negative"));
        }
        if self.extra_spins.is_empty() || *self.extra_spins.start() == 0 {
            return Err(WheelError::invalid_config(
                "extra_spins must be a non-empty range starting above zero",
            ));
        }
        if self.spin_duration.is_empty() || self.spin_duration.start().is_zero() {
            return Err(WheelError::invalid_config(
                "spin_duration must be a non-empty range of positive durations",
            ));
        }
        if self.fade_distance <= 0.0 || self.shrink_distance <= 0.0 {
            return Err(WheelError::invalid_config(
                "fade_distance and shrink_distance must be positive",
            ));
        }
        if !(0.0..=1.0).contains(&self.min_opacity) || !(0.0..=1.0).contains(&self.min_scale) {
            return Err(WheelError::invalid_config(
                "min_opacity and min_scale must lie in [0, 1]",
            ));
        }
        Ok(())
    }
}
