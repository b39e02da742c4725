//! Substitutable randomness for spin planning.

use std::ops::RangeInclusive;
use std::time::Duration;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of the random choices a spin plan needs.
pub trait RandomSource {
    /// Uniform index in `[0, n)`. Callers guarantee `n >= 1`.
    fn pick_index(&mut self, n: usize) -> usize;

    /// Uniform number of extra loops from `range`.
    fn pick_extra_spins(&mut self, range: RangeInclusive<u32>) -> u32;

    /// Uniform spin duration from `range`.
    fn pick_duration(&mut self, range: RangeInclusive<Duration>) -> Duration;
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn pick_index(&mut self, n: usize) -> usize {
        (**self).pick_index(n)
    }

    fn pick_extra_spins(&mut self, range: RangeInclusive<u32>) -> u32 {
        (**self).pick_extra_spins(range)
    }

    fn pick_duration(&mut self, range: RangeInclusive<Duration>) -> Duration {
        (**self).pick_duration(range)
    }
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl RngSource<ThreadRng> {
    /// Thread-local generator, seeded from the OS.
    pub fn thread() -> Self {
        Self { rng: rand::rng() }
    }
}

impl RngSource<StdRng> {
    /// Deterministic generator for reproducible draws.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick_index(&mut self, n: usize) -> usize {
        self.rng.random_range(0..n)
    }

    fn pick_extra_spins(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.rng.random_range(range)
    }

    fn pick_duration(&mut self, range: RangeInclusive<Duration>) -> Duration {
        let (start, end) = range.into_inner();
        let secs = self
            .rng
            .random_range(start.as_secs_f64()..=end.as_secs_f64());
        Duration::from_secs_f64(secs)
    }
}

/// Scripted [`RandomSource`] that replays fixed choices.
///
/// Indices cycle through the given sequence (reduced modulo `n`). Extra
/// spins and duration default to the start of their ranges and are clamped
/// into the range when set explicitly.
#[derive(Debug, Clone)]
pub struct FixedDraw {
    indices: Vec<usize>,
    cursor: usize,
    extra_spins: Option<u32>,
    duration: Option<Duration>,
}

impl FixedDraw {
    /// Always pick `index`.
    pub fn index(index: usize) -> Self {
        Self::sequence([index])
    }

    /// Pick the given indices in order, then start over.
    pub fn sequence(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut indices: Vec<usize> = indices.into_iter().collect();
        if indices.is_empty() {
            indices.push(0);
        }
        Self {
            indices,
            cursor: 0,
            extra_spins: None,
            duration: None,
        }
    }

    pub fn with_extra_spins(mut self, spins: u32) -> Self {
        self.extra_spins = Some(spins);
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

impl RandomSource for FixedDraw {
    fn pick_index(&mut self, n: usize) -> usize {
        let index = self.indices[self.cursor % self.indices.len()];
        self.cursor += 1;
        index % n.max(1)
    }

    fn pick_extra_spins(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.extra_spins
            .unwrap_or(*range.start())
            .clamp(*range.start(), *range.end())
    }

    fn pick_duration(&mut self, range: RangeInclusive<Duration>) -> Duration {
        self.duration
            .unwrap_or(*range.start())
            .clamp(*range.start(), *range.end())
    }
}
