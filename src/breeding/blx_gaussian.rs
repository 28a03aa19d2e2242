//! # BlxGaussianStrategy
//!
//! The breeding step of the real-valued GA: with probability `crossover_rate`
//! the parents are blended with BLX-α, otherwise they are copied verbatim.
//! Each child then goes through Gaussian mutation on its own.
use super::{BlxAlphaCrossover, BreedStrategy, GaussianMutation};
use crate::{
    bounds::Bounds,
    error::{GeneticError, Result},
    evolution::options::EvolutionOptions,
    individual::Individual,
    rng::RandomNumberGenerator,
};

#[derive(Debug, Clone, PartialEq)]
pub struct BlxGaussianStrategy {
    crossover_rate: f64,
    crossover: BlxAlphaCrossover,
    mutation: GaussianMutation,
}

impl BlxGaussianStrategy {
    /// # Errors
    ///
    /// Returns an error if `crossover_rate` is outside `[0, 1]`.
    pub fn new(
        crossover_rate: f64,
        crossover: BlxAlphaCrossover,
        mutation: GaussianMutation,
    ) -> Result<Self> {
        if !(0.0..=1.0).contains(&crossover_rate) {
            return Err(GeneticError::Configuration(format!(
                "Crossover rate must lie in [0, 1], got {}",
                crossover_rate
            )));
        }
        Ok(Self {
            crossover_rate,
            crossover,
            mutation,
        })
    }

    /// Builds the strategy from the breeding parameters of `options`.
    pub fn from_options(options: &EvolutionOptions) -> Result<Self> {
        Self::new(
            options.get_crossover_rate(),
            BlxAlphaCrossover::new(options.get_blx_alpha())?,
            GaussianMutation::new(options.get_mutation_rate(), options.get_mutation_sigma())?,
        )
    }

    pub fn crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn crossover(&self) -> &BlxAlphaCrossover {
        &self.crossover
    }

    pub fn mutation(&self) -> &GaussianMutation {
        &self.mutation
    }
}

impl BreedStrategy for BlxGaussianStrategy {
    /// Draw order: crossover gate, crossover genes if the gate opened, then
    /// child one's mutation, then child two's.
    fn breed(
        &self,
        parent1: &Individual,
        parent2: &Individual,
        bounds: &Bounds,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Individual, Individual)> {
        let (mut child1, mut child2) = if rng.chance(self.crossover_rate) {
            self.crossover.crossover(parent1, parent2, bounds, rng)?
        } else {
            (parent1.clone(), parent2.clone())
        };

        self.mutation.mutate(&mut child1, bounds, rng);
        self.mutation.mutate(&mut child2, bounds, rng);

        Ok((child1, child2))
    }
}
