//! Injected randomness.
//!
//! The scheduler never touches ambient process-wide randomness. Every draw
//! goes through a `RandomSource` handed in at construction, so a fixed
//! source and a fixed sequence of tick times replay identically.

use std::f64::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use meteor_core::types::{EventId, FloatRange, IntRange};

/// Source of every random draw the scheduler and planner make.
pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in the inclusive range. Returns `min` for a
    /// degenerate range.
    fn range_i32(&mut self, range: IntRange) -> i32;

    /// Uniform index below `len`, or `None` for an empty collection.
    fn pick_index(&mut self, len: usize) -> Option<usize>;

    /// Uniform angle in `[0, TAU)` radians.
    fn next_angle(&mut self) -> f64 {
        self.next_f64() * TAU
    }

    /// Uniform float in the inclusive range.
    fn range_f64(&mut self, range: FloatRange) -> f64 {
        range.min + (range.max - range.min) * self.next_f64()
    }

    /// True with probability `p`.
    fn prob(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// Pick one element uniformly.
pub fn pick<'a, T, R>(rng: &mut R, items: &'a [T]) -> Option<&'a T>
where
    R: RandomSource + ?Sized,
{
    rng.pick_index(items.len()).and_then(|i| items.get(i))
}

/// Seeded ChaCha stream. Same seed = same draws.
#[derive(Debug, Clone)]
pub struct ChaChaSource {
    rng: ChaCha8Rng,
}

impl ChaChaSource {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for ChaChaSource {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn range_i32(&mut self, range: IntRange) -> i32 {
        if range.min >= range.max {
            return range.min;
        }
        self.rng.gen_range(range.min..=range.max)
    }

    fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.gen_range(0..len))
    }
}

/// Replays a fixed list of unit floats, cycling when exhausted. Integer and
/// index draws are derived from the same stream, so one list scripts every
/// decision.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Values are clamped into `[0, 1)`. An empty list always yields 0.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { values, cursor: 0 }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }

    fn range_i32(&mut self, range: IntRange) -> i32 {
        let f = self.next_f64();
        if range.min >= range.max {
            return range.min;
        }
        let span = (range.max - range.min) as f64 + 1.0;
        (range.min + (f * span).floor() as i32).min(range.max)
    }

    fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let f = self.next_f64();
        Some(((f * len as f64).floor() as usize).min(len - 1))
    }
}

/// Bearing shared by every meteor of a directional event. A pure function
/// of the event id, so the same event always aims the same way.
pub fn directional_bearing(event: EventId) -> f64 {
    ChaCha8Rng::seed_from_u64(event.0).gen_range(0.0..TAU)
}
