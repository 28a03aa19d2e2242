use rand_distr::Normal;

use crate::bounds::Bounds;
use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Gaussian mutation with a per-individual gate.
///
/// With probability `rate` the individual is mutated: every gene receives its
/// own zero-mean normal perturbation of standard deviation `sigma`, and the
/// result is clamped to the bounds. Otherwise the individual is left as is.
#[derive(Debug, Clone, Copy)]
pub struct GaussianMutation {
    rate: f64,
    sigma: f64,
    noise: Normal<f64>,
}

impl GaussianMutation {
    /// # Errors
    ///
    /// Returns an error if `rate` is outside `[0, 1]` or `sigma` is negative
    /// or not finite.
    pub fn new(rate: f64, sigma: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(GeneticError::Configuration(format!(
                "Mutation rate must lie in [0, 1], got {}",
                rate
            )));
        }
        if !sigma.is_finite() || sigma < 0.0 {
            return Err(GeneticError::Configuration(format!(
                "Mutation sigma must be a finite non-negative number, got {}",
                sigma
            )));
        }
        let noise = Normal::new(0.0, sigma)
            .map_err(|e| GeneticError::Configuration(format!("Invalid mutation sigma: {}", e)))?;

        Ok(Self { rate, sigma, noise })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Mutates the individual in place. Returns whether it was mutated.
    ///
    /// Draw order: one gate draw, then one normal draw per gene if the gate opened.
    pub fn mutate(
        &self,
        individual: &mut Individual,
        bounds: &Bounds,
        rng: &mut RandomNumberGenerator,
    ) -> bool {
        if !rng.chance(self.rate) {
            return false;
        }

        for gene in individual.genes_mut() {
            *gene += rng.sample(&self.noise);
        }
        bounds.clamp(individual);
        true
    }
}

impl PartialEq for GaussianMutation {
    fn eq(&self, other: &Self) -> bool {
        self.rate == other.rate && self.sigma == other.sigma
    }
}
