//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single random stream a run draws
//! from. Initialization and every genetic operator take it by `&mut`, so a run
//! seeded with [`RandomNumberGenerator::from_seed`] is fully reproducible.
//!
//! ## Example
//!
//! ```rust
//! use blxga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let x = rng.uniform(-1.0, 1.0).unwrap();
//! assert!((-1.0..=1.0).contains(&x));
//!
//! let picks = rng.sample_indices(10, 3).unwrap();
//! assert_eq!(picks.len(), 3);
//! ```

use rand::{rngs::StdRng, seq::index, Rng, SeedableRng};
use rand_distr::Distribution;

use crate::error::{GeneticError, Result};

/// A wrapper around the `rand` crate's `StdRng` that provides the draws the
/// optimizer needs.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// Two generators built from the same seed yield the same sequence of draws.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a number uniformly from the closed interval `[low, high]`.
    ///
    /// A degenerate interval (`low == high`) returns `low` and still consumes
    /// one draw. Any finite interval can be sampled, including ones whose
    /// width `high - low` overflows `f64`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::RandomGeneration` if either end is not finite or
    /// the interval is reversed.
    pub fn uniform(&mut self, low: f64, high: f64) -> Result<f64> {
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(GeneticError::RandomGeneration(format!(
                "Cannot sample uniformly from [{}, {}]",
                low, high
            )));
        }
        // Interpolating between the ends never forms `high - low`, so it cannot
        // overflow. Rounding may step just past an end, hence the clamp.
        let t = self.rng.gen::<f64>();
        Ok((low * (1.0 - t) + high * t).clamp(low, high))
    }

    /// Returns `true` with probability `probability`.
    ///
    /// Always consumes exactly one draw, so gating decisions do not shift the
    /// stream depending on the configured rate.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen::<f64>() < probability
    }

    /// Draws `amount` distinct indices from `0..length`, in random order.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `amount > length`.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Result<Vec<usize>> {
        if amount > length {
            return Err(GeneticError::Configuration(format!(
                "Cannot sample {} distinct indices from {} candidates",
                amount, length
            )));
        }
        Ok(index::sample(&mut self.rng, length, amount).into_vec())
    }

    /// Draws one value from the given distribution.
    pub fn sample<D>(&mut self, distribution: &D) -> f64
    where
        D: Distribution<f64>,
    {
        distribution.sample(&mut self.rng)
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
