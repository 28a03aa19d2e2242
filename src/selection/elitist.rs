use std::cmp::Ordering;

use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{check_population, SelectionStrategy};

/// A selection strategy that carries the best individuals over unchanged.
///
/// Individuals are ranked by descending fitness, equal scores keeping their
/// population order, and the top `num_to_select` are copied out. No randomness
/// is consumed.
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
/// let fitness = vec![0.5, 0.8, 0.8];
/// let mut rng = RandomNumberGenerator::from_seed(0);
///
/// let elites = ElitistSelection.select(&population, &fitness, 2, &mut rng).unwrap();
/// assert_eq!(elites[0].genes(), &[2.0]); // first of the tied pair
/// assert_eq!(elites[1].genes(), &[3.0]);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ElitistSelection;

impl SelectionStrategy for ElitistSelection {
    fn select(
        &self,
        population: &[Individual],
        fitness: &[f64],
        num_to_select: usize,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        if num_to_select == 0 {
            return Ok(Vec::new());
        }

        check_population(population, fitness)?;

        if num_to_select > population.len() {
            return Err(GeneticError::Configuration(format!(
                "Cannot select {} elites from a population of {}",
                num_to_select,
                population.len()
            )));
        }

        Ok(rank_descending(fitness)
            .into_iter()
            .take(num_to_select)
            .map(|idx| population[idx].clone())
            .collect())
    }
}

/// Population indices ordered by descending fitness.
///
/// The sort is stable, so equal scores stay in ascending index order.
pub fn rank_descending(fitness: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..fitness.len()).collect();
    indices.sort_by(|&a, &b| {
        fitness[b]
            .partial_cmp(&fitness[a])
            .unwrap_or(Ordering::Equal)
    });
    indices
}

/// Index of the highest fitness, the first one on ties.
pub fn best_index(fitness: &[f64]) -> Option<usize> {
    let mut iter = fitness.iter().enumerate();
    let (mut best_idx, mut best) = iter.next().map(|(i, &f)| (i, f))?;
    for (idx, &score) in iter {
        if score > best {
            best_idx = idx;
            best = score;
        }
    }
    Some(best_idx)
}
