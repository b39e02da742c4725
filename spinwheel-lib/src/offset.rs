//! Continuous scroll offset: idle drift and spin trajectories.
//!
//! The offset is a single unbounded scalar measured in the same unit as the
//! item height. It only ever moves forward.

use std::time::Duration;

use log::trace;

use crate::config::WheelConfig;
use crate::easing::{Easing, progress};
use crate::error::WheelError;
use crate::random::RandomSource;

/// Everything needed to replay one spin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    /// Item the spin lands on.
    pub random_index: usize,
    /// Offset when the spin started.
    pub start_offset: f64,
    /// Forward distance to travel. Always positive.
    pub total_distance: f64,
    /// Full loops included in `total_distance`.
    pub extra_spins: u32,
    pub duration: Duration,
    /// Session timestamp of the first frame.
    pub start: Duration,
}

impl SpinPlan {
    /// Offset at which the spin comes to rest.
    pub fn final_offset(&self) -> f64 {
        self.start_offset + self.total_distance
    }

    /// Linear progress through the spin at `now`.
    pub fn progress(&self, now: Duration) -> f64 {
        progress(now.saturating_sub(self.start), self.duration)
    }

    /// Session timestamp at which the spin completes.
    pub fn end(&self) -> Duration {
        self.start + self.duration
    }
}

/// Result of sampling a spin trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinStep {
    pub offset: f64,
    pub progress: f64,
}

impl SpinStep {
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Drift anchor: the offset and time at which idling (re)started.
#[derive(Debug, Clone, Copy)]
struct IdleAnchor {
    offset: f64,
    since: Duration,
}

/// Owner of the offset.
#[derive(Debug, Clone)]
pub struct OffsetEngine {
    offset: f64,
    idle_rate: f64,
    idle: Option<IdleAnchor>,
}

impl OffsetEngine {
    pub fn new(initial: f64, idle_rate: f64) -> Self {
        Self {
            offset: initial,
            idle_rate,
            idle: None,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_idling(&self) -> bool {
        self.idle.is_some()
    }

    /// Anchor idle drift at the current offset and `now`.
    pub fn start_idle(&mut self, now: Duration) {
        self.idle = Some(IdleAnchor {
            offset: self.offset,
            since: now,
        });
    }

    pub fn stop_idle(&mut self) {
        self.idle = None;
    }

    /// Advance idle drift to `now`. Does nothing unless idling.
    pub fn idle_drift(&mut self, now: Duration) -> f64 {
        if let Some(anchor) = self.idle {
            let elapsed_ms = now.saturating_sub(anchor.since).as_secs_f64() * 1000.0;
            let next = anchor.offset + elapsed_ms * self.idle_rate;
            // A clock step backwards must not pull the offset back.
            self.offset = self.offset.max(next);
        }
        self.offset
    }

    /// Move the offset along `plan` at `now`.
    ///
    /// On the final frame the offset is set to `plan.final_offset()` exactly,
    /// not to the eased approximation.
    pub fn spin_trajectory(&mut self, plan: &SpinPlan, now: Duration) -> SpinStep {
        let progress = plan.progress(now);
        self.offset = if progress >= 1.0 {
            plan.final_offset()
        } else {
            plan.start_offset + plan.total_distance * Easing::EaseOutCubic.apply(progress)
        };
        trace!("spin frame: progress={:.4} offset={:.3}", progress, self.offset);
        SpinStep {
            offset: self.offset,
            progress,
        }
    }

    /// Force the offset to an exact value.
    pub fn pin(&mut self, offset: f64) {
        self.offset = offset;
    }

    /// Plan a spin from the current offset onto a uniformly chosen item.
    ///
    /// The plan travels forward by `extra_spins` full loops plus whatever
    /// reaches the chosen item's center, so the final offset is congruent to
    /// `index * item_height + centering_offset` modulo the loop length.
    pub fn plan_spin(
        &self,
        config: &WheelConfig,
        n: usize,
        random: &mut impl RandomSource,
        now: Duration,
    ) -> Result<SpinPlan, WheelError> {
        if n == 0 {
            return Err(WheelError::EmptyItemList);
        }

        let item_height = config.item_height;
        let loop_length = n as f64 * item_height;

        let random_index = random.pick_index(n).min(n - 1);
        let current_normalized = self.offset.rem_euclid(loop_length);
        let target = random_index as f64 * item_height + config.centering_offset;
        let extra_spins = random.pick_extra_spins(config.extra_spins.clone());
        let total_distance = extra_spins as f64 * loop_length + (target - current_normalized);
        let duration = random.pick_duration(config.spin_duration.clone());

        Ok(SpinPlan {
            random_index,
            start_offset: self.offset,
            total_distance,
            extra_spins,
            duration,
            start: now,
        })
    }
}
