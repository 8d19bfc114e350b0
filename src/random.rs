//! Injectable random decisions
//!
//! Surge pricing, replenishment, synthetic validation failures and the
//! demo latencies all draw from a [`RandomSource`], so tests can force
//! either branch of every probabilistic rule.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource: Send + Sync {
    /// Returns true with the given probability (clamped to `[0, 1]`).
    fn chance(&self, probability: f64) -> bool;

    /// Uniform integer in `[low, high]`, both ends inclusive.
    fn between(&self, low: i64, high: i64) -> i64;
}

/// Thread-local OS-seeded generator
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn chance(&self, probability: f64) -> bool {
        rand::thread_rng().gen_bool(probability.clamp(0.0, 1.0))
    }

    fn between(&self, low: i64, high: i64) -> i64 {
        if high <= low {
            return low;
        }
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Reproducible generator for replaying a demo run
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut rng)
    }
}

impl RandomSource for SeededRandom {
    fn chance(&self, probability: f64) -> bool {
        self.with_rng(|rng| rng.gen_bool(probability.clamp(0.0, 1.0)))
    }

    fn between(&self, low: i64, high: i64) -> i64 {
        if high <= low {
            return low;
        }
        self.with_rng(|rng| rng.gen_range(low..=high))
    }
}

/// Forces every draw: `chance` always answers `hit`, `between` returns
/// `value` clamped into the requested range (or `low` when unset).
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedRandom {
    pub hit: bool,
    pub value: Option<i64>,
}

impl FixedRandom {
    /// Every probabilistic rule fires
    pub fn always() -> Self {
        Self {
            hit: true,
            value: None,
        }
    }

    /// No probabilistic rule fires
    pub fn never() -> Self {
        Self {
            hit: false,
            value: None,
        }
    }

    pub fn with_value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }
}

impl RandomSource for FixedRandom {
    fn chance(&self, _probability: f64) -> bool {
        self.hit
    }

    fn between(&self, low: i64, high: i64) -> i64 {
        match self.value {
            Some(v) if high >= low => v.clamp(low, high),
            _ => low,
        }
    }
}
