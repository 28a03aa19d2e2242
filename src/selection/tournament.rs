use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{check_population, SelectionStrategy};

/// A selection strategy that selects individuals through tournament selection.
///
/// Each tournament draws `tournament_size` distinct individuals uniformly at
/// random and keeps the one with the strictly greatest fitness. Ties go to the
/// participant drawn first, so the outcome depends only on the draw order.
///
/// Tournaments are independent: selecting several individuals may return the
/// same one more than once.
///
/// - Smaller tournament sizes lead to more exploration (more random selection)
/// - Larger tournament sizes lead to more exploitation (more focus on the best individuals)
///
/// # Examples
///
/// ```
/// use blxga::individual::Individual;
/// use blxga::rng::RandomNumberGenerator;
/// use blxga::selection::{SelectionStrategy, TournamentSelection};
///
/// let population: Vec<Individual> = (0..5)
///     .map(|i| Individual::from_genes(vec![i as f64]))
///     .collect();
/// let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
/// let mut rng = RandomNumberGenerator::from_seed(42);
///
/// // A tournament over the whole population always returns the best individual.
/// let selection = TournamentSelection::new(5).unwrap();
/// let selected = selection.select(&population, &fitness, 3, &mut rng).unwrap();
/// assert!(selected.iter().all(|ind| ind.genes() == &[3.0]));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament and returns the index of the winner.
    ///
    /// # Errors
    ///
    /// Returns an error if the tournament is larger than the population.
    pub fn run_tournament(&self, fitness: &[f64], rng: &mut RandomNumberGenerator) -> Result<usize> {
        if self.tournament_size > fitness.len() {
            return Err(GeneticError::Configuration(format!(
                "Tournament size ({}) exceeds population size ({})",
                self.tournament_size,
                fitness.len()
            )));
        }

        let participants = rng.sample_indices(fitness.len(), self.tournament_size)?;

        let mut best_idx = participants[0];
        for &idx in &participants[1..] {
            if fitness[idx] > fitness[best_idx] {
                best_idx = idx;
            }
        }

        Ok(best_idx)
    }

    /// Runs one tournament and returns a copy of the winner.
    pub fn select_one(
        &self,
        population: &[Individual],
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Individual> {
        check_population(population, fitness)?;
        let winner = self.run_tournament(fitness, rng)?;
        Ok(population[winner].clone())
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self { tournament_size: 3 }
    }
}

impl SelectionStrategy for TournamentSelection {
    fn select(
        &self,
        population: &[Individual],
        fitness: &[f64],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        check_population(population, fitness)?;

        (0..num_to_select)
            .map(|_| {
                self.run_tournament(fitness, rng)
                    .map(|winner| population[winner].clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn population(n: usize) -> Vec<Individual> {
        (0..n).map(|i| Individual::from_genes(vec![i as f64])).collect()
    }

    #[test]
    fn test_tournament_selection() {
        let population = population(5);
        let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
        let mut rng = RandomNumberGenerator::from_seed(1);

        let selection = TournamentSelection::default();
        let selected = selection.select(&population, &fitness, 3, &mut rng).unwrap();

        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn test_full_tournament_returns_global_best() {
        let population = population(6);
        let fitness = vec![0.5, 0.8, 0.3, 0.95, 0.1, -2.0];
        let mut rng = RandomNumberGenerator::from_seed(17);

        let selection = TournamentSelection::new(6).unwrap();
        for _ in 0..50 {
            let winner = selection.select_one(&population, &fitness, &mut rng).unwrap();
            assert_eq!(winner.genes(), &[3.0]);
        }
    }

    #[test]
    fn test_size_one_is_uniform_random() {
        let population = population(4);
        let fitness = vec![1.0, 2.0, 3.0, 4.0];
        let mut rng = RandomNumberGenerator::from_seed(23);

        let selection = TournamentSelection::new(1).unwrap();
        let mut seen = [false; 4];
        for _ in 0..200 {
            let winner = selection.run_tournament(&fitness, &mut rng).unwrap();
            seen[winner] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_ties_go_to_first_drawn() {
        let fitness = vec![1.0, 1.0, 1.0];
        let selection = TournamentSelection::new(3).unwrap();

        for seed in 0..20 {
            let mut rng = RandomNumberGenerator::from_seed(seed);
            let mut replay = rng.clone();

            let winner = selection.run_tournament(&fitness, &mut rng).unwrap();
            let order = replay.sample_indices(3, 3).unwrap();
            assert_eq!(winner, order[0]);
        }
    }

    #[test]
    fn test_selection_returns_copies() {
        let population = population(3);
        let fitness = vec![0.1, 0.2, 0.3];
        let mut rng = RandomNumberGenerator::from_seed(2);

        let selection = TournamentSelection::new(3).unwrap();
        let mut winner = selection.select_one(&population, &fitness, &mut rng).unwrap();
        winner[0] = -100.0;

        assert_eq!(population[2].genes(), &[2.0]);
    }

    #[test]
    fn test_tournament_larger_than_population() {
        let population = population(3);
        let fitness = vec![0.1, 0.2, 0.3];
        let mut rng = RandomNumberGenerator::from_seed(2);

        let selection = TournamentSelection::new(4).unwrap();
        let result = selection.select(&population, &fitness, 1, &mut rng);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_tournament_selection_empty_population() {
        let population: Vec<Individual> = Vec::new();
        let fitness: Vec<f64> = Vec::new();
        let mut rng = RandomNumberGenerator::from_seed(2);

        let result = TournamentSelection::default().select(&population, &fitness, 3, &mut rng);
        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }

    #[test]
    fn test_tournament_selection_mismatched_lengths() {
        let population = population(2);
        let fitness = vec![0.5];
        let mut rng = RandomNumberGenerator::from_seed(2);

        let result = TournamentSelection::default().select(&population, &fitness, 1, &mut rng);
        assert!(result.is_err());
    }

    #[test]
    fn test_tournament_selection_invalid_size() {
        assert!(TournamentSelection::new(0).is_err());
    }
}
