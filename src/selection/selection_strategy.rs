use std::fmt::Debug;

use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Trait for selection strategies.
///
/// Selection strategies choose individuals from a population based on their
/// fitness scores, where higher fitness is better. Selected individuals are
/// returned as independent copies, never as references into the population.
///
/// # Examples
///
/// ```
/// use blxga::individual::Individual;
/// use blxga::rng::RandomNumberGenerator;
/// use blxga::selection::{ElitistSelection, SelectionStrategy};
///
/// let population = vec![
///     Individual::from_genes(vec![1.0]),
///     Individual::from_genes(vec![2.0]),
///     Individual::from_genes(vec![3.0]),
/// ];
/// let fitness = vec![0.5, 0.8, 0.3];
/// let mut rng = RandomNumberGenerator::from_seed(0);
///
/// let selected = ElitistSelection.select(&population, &fitness, 2, &mut rng).unwrap();
/// assert_eq!(selected[0].genes(), &[2.0]);
/// assert_eq!(selected[1].genes(), &[1.0]);
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects `num_to_select` individuals from the population.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The fitness vector length doesn't match the population length
    /// - The strategy's own preconditions are violated
    fn select(
        &self,
        population: &[Individual],
        fitness: &[f64],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>>;
}

pub(crate) fn check_population(population: &[Individual], fitness: &[f64]) -> Result<()> {
    if population.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }

    if fitness.len() != population.len() {
        return Err(GeneticError::Configuration(format!(
            "Fitness vector length ({}) doesn't match population length ({})",
            fitness.len(),
            population.len()
        )));
    }

    Ok(())
}
