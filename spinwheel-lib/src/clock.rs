//! Session timeline.
//!
//! The engine measures time as a `Duration` since the start of the session.
//! Tests hand in explicit timestamps; the terminal surface reads them from
//! a [`SessionClock`].

use std::time::{Duration, Instant};

/// Maps wall-clock instants onto the session timeline.
#[derive(Debug, Clone, Copy)]
pub struct SessionClock {
    origin: Instant,
}

impl SessionClock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Time elapsed since the session started.
    pub fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::start()
    }
}
