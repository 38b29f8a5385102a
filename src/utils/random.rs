#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::prelude::*;
use rand_distr::Normal;
use std::sync::Mutex;

/// Provides the way to use randomized values in generic way.
pub trait Random: Send + Sync {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max].
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the interval [min, max).
    fn uniform_real(&self, min: Float, max: Float) -> Float;

    /// Tests probability value in (0., 1.) range.
    fn is_hit(&self, probability: Float) -> bool;

    /// Returns an index from collection with probability weight.
    /// Uses exponential distribution where the weights are the rate of the distribution (lambda)
    /// and selects the smallest sampled value.
    fn weighted(&self, weights: &[usize]) -> usize;

    /// Samples a value from normal distribution with given mean and standard deviation.
    fn gaussian(&self, mean: Float, std_dev: Float) -> Float;
}

/// A default random implementation which can be optionally seeded to produce
/// reproducible sequences.
pub struct DefaultRandom {
    rng: Mutex<SmallRng>,
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` with non-deterministic seed.
    pub fn new() -> Self {
        Self { rng: Mutex::new(SmallRng::from_rng(thread_rng()).expect("cannot get RNG")) }
    }

    /// Creates a new instance of `DefaultRandom` seeded with given value.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { rng: Mutex::new(SmallRng::seed_from_u64(seed)) }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SmallRng> {
        self.rng.lock().expect("cannot lock RNG")
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.lock().gen_range(min..=max)
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.lock().gen_range(min..max)
    }

    fn is_hit(&self, probability: Float) -> bool {
        self.lock().gen_bool(probability.clamp(0., 1.))
    }

    fn weighted(&self, weights: &[usize]) -> usize {
        weights
            .iter()
            .zip(0_usize..)
            .map(|(&weight, index)| (-self.uniform_real(0., 1.).ln() / weight as Float, index))
            .min_by(|a, b| a.0.partial_cmp(&b.0).expect("unexpected NaN weight"))
            .expect("empty weights")
            .1
    }

    fn gaussian(&self, mean: Float, std_dev: Float) -> Float {
        let distribution = Normal::new(mean, std_dev).expect("invalid normal distribution parameters");
        distribution.sample(&mut *self.lock())
    }
}
