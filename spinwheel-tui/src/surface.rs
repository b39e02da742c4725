//! The card that widens while a draw is running.
//!
//! Expanding reports completion once the width transition settles; that
//! report is what releases a pending spin in the controller.

use std::time::Duration;

use spinwheel_lib::easing::progress;
use spinwheel_lib::{Easing, TransitionConfig};

/// Card width at rest.
pub const NARROW_WIDTH: u16 = 44;
/// Card width during a draw.
pub const WIDE_WIDTH: u16 = 72;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Narrow,
    Wide,
}

#[derive(Debug, Clone, Copy)]
struct WidthTransition {
    from: f64,
    to: f64,
    start: Duration,
    config: TransitionConfig,
}

impl WidthTransition {
    fn sample(&self, now: Duration) -> f64 {
        let t = progress(now.saturating_sub(self.start), self.config.duration);
        self.from + (self.to - self.from) * self.config.easing.apply(t)
    }

    fn is_done(&self, now: Duration) -> bool {
        now.saturating_sub(self.start) >= self.config.duration
    }
}

/// Animated card width.
#[derive(Debug)]
pub struct Surface {
    target: Target,
    width: f64,
    transition: Option<WidthTransition>,
    config: TransitionConfig,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(TransitionConfig::new(
            Duration::from_millis(500),
            Easing::EaseInOut,
        ))
    }
}

impl Surface {
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            target: Target::Narrow,
            width: f64::from(NARROW_WIDTH),
            transition: None,
            config,
        }
    }

    /// Current width in columns.
    pub fn width(&self, now: Duration) -> u16 {
        let width = match &self.transition {
            Some(transition) => transition.sample(now),
            None => self.width,
        };
        width.round() as u16
    }

    /// Start widening. Returns true if the card is already fully wide, in
    /// which case no completion will be reported by [`update`](Self::update).
    pub fn expand(&mut self, now: Duration) -> bool {
        if self.target == Target::Wide && self.transition.is_none() {
            return true;
        }
        self.retarget(Target::Wide, f64::from(WIDE_WIDTH), now);
        false
    }

    /// Start narrowing back to the resting width.
    pub fn contract(&mut self, now: Duration) {
        if self.target == Target::Narrow {
            return;
        }
        self.retarget(Target::Narrow, f64::from(NARROW_WIDTH), now);
    }

    fn retarget(&mut self, target: Target, to: f64, now: Duration) {
        let from = match &self.transition {
            Some(transition) => transition.sample(now),
            None => self.width,
        };
        self.target = target;
        self.transition = Some(WidthTransition {
            from,
            to,
            start: now,
            config: self.config,
        });
    }

    /// Settle a finished transition. Returns true exactly once per finished
    /// expansion.
    pub fn update(&mut self, now: Duration) -> bool {
        let Some(transition) = self.transition else {
            return false;
        };
        if !transition.is_done(now) {
            return false;
        }
        self.width = transition.to;
        self.transition = None;
        self.target == Target::Wide
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_expand_reports_completion_once() {
        let mut surface = Surface::default();
        assert!(!surface.expand(ms(0)));

        assert!(!surface.update(ms(250)));
        let mid = surface.width(ms(250));
        assert!(mid > NARROW_WIDTH && mid < WIDE_WIDTH);

        assert!(surface.update(ms(500)));
        assert!(!surface.update(ms(516)));
        assert_eq!(surface.width(ms(516)), WIDE_WIDTH);
    }

    #[test]
    fn test_expand_when_already_wide_completes_immediately() {
        let mut surface = Surface::default();
        surface.expand(ms(0));
        surface.update(ms(500));

        assert!(surface.expand(ms(600)));
        assert!(!surface.update(ms(1200)));
        assert_eq!(surface.width(ms(600)), WIDE_WIDTH);
    }

    #[test]
    fn test_contraction_does_not_report_expansion() {
        let mut surface = Surface::default();
        surface.expand(ms(0));
        surface.update(ms(500));

        surface.contract(ms(1000));
        assert!(!surface.update(ms(1500)));
        assert_eq!(surface.width(ms(1500)), NARROW_WIDTH);
    }

    #[test]
    fn test_expand_during_contraction_starts_from_current_width() {
        let mut surface = Surface::default();
        surface.expand(ms(0));
        surface.update(ms(500));
        surface.contract(ms(1000));

        let width = surface.width(ms(1250));
        assert!(!surface.expand(ms(1250)));
        assert_eq!(surface.width(ms(1250)), width);
        assert!(surface.update(ms(1750)));
    }
}
