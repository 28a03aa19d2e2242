//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct is the configuration bundle of a run: the GA
//! hyperparameters plus two run-control settings (logging verbosity and the
//! population size from which fitness evaluation goes parallel).
//!
//! Options are plain immutable values. Build them with
//! [`EvolutionOptions::builder`] or start from [`EvolutionOptions::default`],
//! which carries the reference hyperparameters:
//!
//! | option            | default |
//! |-------------------|---------|
//! | population_size   | 60      |
//! | num_generations   | 200     |
//! | tournament_size   | 3       |
//! | crossover_rate    | 0.9     |
//! | mutation_rate     | 0.2     |
//! | mutation_sigma    | 0.1     |
//! | elitism           | 1       |
//! | blx_alpha         | 0.5     |
//!
//! ## Example
//!
//! ```rust
//! use blxga::bounds::Bounds;
//! use blxga::evolution::options::{EvolutionOptions, LogLevel};
//!
//! let options = EvolutionOptions::builder()
//!     .population_size(20)
//!     .num_generations(50)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//!
//! let bounds = Bounds::uniform(-5.0, 5.0, 2).unwrap();
//! assert!(options.validate(&bounds).is_ok());
//!
//! let broken = EvolutionOptions::builder().elitism(100).build();
//! assert!(broken.validate(&bounds).is_err());
//! ```

use crate::{
    bounds::Bounds,
    breeding::BlxGaussianStrategy,
    error::{GeneticError, Result},
    selection::TournamentSelection,
};

/// How much the launcher reports through `tracing` while it runs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Every generation, plus one `debug` event per scored individual.
    Verbose,
    /// Roughly ten progress lines per run, plus the last generation.
    Minimal,
    #[default]
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    num_generations: usize,
    log_level: LogLevel,
    population_size: usize,
    tournament_size: usize,
    crossover_rate: f64,
    mutation_rate: f64,
    mutation_sigma: f64,
    elitism: usize,
    blx_alpha: f64,
    /// Minimum population size for which fitness is evaluated in parallel
    parallel_threshold: usize,
}

impl EvolutionOptions {
    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn get_crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_mutation_sigma(&self) -> f64 {
        self.mutation_sigma
    }

    pub fn get_elitism(&self) -> usize {
        self.elitism
    }

    pub fn get_blx_alpha(&self) -> f64 {
        self.blx_alpha
    }

    /// Returns the minimum population size for parallel fitness evaluation.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Checks the options against each other and against the search domain.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` naming the first offending option:
    /// a zero population, a tournament or elite count larger than the
    /// population, a rate outside `[0, 1]`, or a negative or non-finite sigma
    /// or alpha. `bounds` is valid by construction; it is taken here so that
    /// every check of a run happens in one place.
    pub fn validate(&self, bounds: &Bounds) -> Result<()> {
        if bounds.dimension() == 0 {
            return Err(GeneticError::Configuration(
                "Bounds must define at least one dimension".to_string(),
            ));
        }

        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        TournamentSelection::new(self.tournament_size)?;
        if self.tournament_size > self.population_size {
            return Err(GeneticError::Configuration(format!(
                "Tournament size ({}) exceeds population size ({})",
                self.tournament_size, self.population_size
            )));
        }

        if self.elitism > self.population_size {
            return Err(GeneticError::Configuration(format!(
                "Elitism ({}) exceeds population size ({})",
                self.elitism, self.population_size
            )));
        }

        BlxGaussianStrategy::from_options(self)?;

        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            num_generations: 200,
            log_level: LogLevel::None,
            population_size: 60,
            tournament_size: 3,
            crossover_rate: 0.9,
            mutation_rate: 0.2,
            mutation_sigma: 0.1,
            elitism: 1,
            blx_alpha: 0.5,
            parallel_threshold: 1000,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset values fall back to [`EvolutionOptions::default`]. The builder does
/// not validate; [`EvolutionOptions::validate`] does, and the launcher calls
/// it before a run starts.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_generations: Option<usize>,
    log_level: Option<LogLevel>,
    population_size: Option<usize>,
    tournament_size: Option<usize>,
    crossover_rate: Option<f64>,
    mutation_rate: Option<f64>,
    mutation_sigma: Option<f64>,
    elitism: Option<usize>,
    blx_alpha: Option<f64>,
    parallel_threshold: Option<usize>,
}

impl EvolutionOptionsBuilder {
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn tournament_size(mut self, value: usize) -> Self {
        self.tournament_size = Some(value);
        self
    }

    pub fn crossover_rate(mut self, value: f64) -> Self {
        self.crossover_rate = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn mutation_sigma(mut self, value: f64) -> Self {
        self.mutation_sigma = Some(value);
        self
    }

    pub fn elitism(mut self, value: usize) -> Self {
        self.elitism = Some(value);
        self
    }

    pub fn blx_alpha(mut self, value: f64) -> Self {
        self.blx_alpha = Some(value);
        self
    }

    /// Sets the parallel threshold. `0` always evaluates in parallel,
    /// `usize::MAX` never does.
    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            num_generations: self.num_generations.unwrap_or(defaults.num_generations),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            population_size: self.population_size.unwrap_or(defaults.population_size),
            tournament_size: self.tournament_size.unwrap_or(defaults.tournament_size),
            crossover_rate: self.crossover_rate.unwrap_or(defaults.crossover_rate),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            mutation_sigma: self.mutation_sigma.unwrap_or(defaults.mutation_sigma),
            elitism: self.elitism.unwrap_or(defaults.elitism),
            blx_alpha: self.blx_alpha.unwrap_or(defaults.blx_alpha),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds::uniform(-1.0, 1.0, 3).unwrap()
    }

    fn expect_config_error(options: EvolutionOptions, needle: &str) {
        match options.validate(&bounds()) {
            Err(GeneticError::Configuration(msg)) => {
                assert!(msg.contains(needle), "'{}' does not mention '{}'", msg, needle)
            }
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let options = EvolutionOptions::default();
        assert!(options.validate(&bounds()).is_ok());
        assert_eq!(options.get_population_size(), 60);
        assert_eq!(options.get_num_generations(), 200);
        assert_eq!(options.get_tournament_size(), 3);
        assert_eq!(options.get_elitism(), 1);
    }

    #[test]
    fn test_builder_overrides_only_what_is_set() {
        let options = EvolutionOptions::builder()
            .population_size(10)
            .mutation_sigma(0.3)
            .build();
        assert_eq!(options.get_population_size(), 10);
        assert_eq!(options.get_mutation_sigma(), 0.3);
        assert_eq!(options.get_crossover_rate(), 0.9);
        assert_eq!(options.get_log_level(), LogLevel::None);
    }

    #[test]
    fn test_zero_population() {
        expect_config_error(
            EvolutionOptions::builder().population_size(0).build(),
            "Population size cannot be zero",
        );
    }

    #[test]
    fn test_tournament_too_large() {
        expect_config_error(
            EvolutionOptions::builder()
                .population_size(4)
                .tournament_size(5)
                .build(),
            "Tournament size (5) exceeds population size (4)",
        );
    }

    #[test]
    fn test_zero_tournament() {
        expect_config_error(
            EvolutionOptions::builder().tournament_size(0).build(),
            "Tournament size must be at least 1",
        );
    }

    #[test]
    fn test_elitism_too_large() {
        expect_config_error(
            EvolutionOptions::builder()
                .population_size(4)
                .tournament_size(2)
                .elitism(5)
                .build(),
            "Elitism (5) exceeds population size (4)",
        );
    }

    #[test]
    fn test_elitism_equal_to_population_is_allowed() {
        let options = EvolutionOptions::builder()
            .population_size(4)
            .tournament_size(2)
            .elitism(4)
            .build();
        assert!(options.validate(&bounds()).is_ok());
    }

    #[test]
    fn test_rates_out_of_range() {
        expect_config_error(
            EvolutionOptions::builder().crossover_rate(1.5).build(),
            "Crossover rate",
        );
        expect_config_error(
            EvolutionOptions::builder().mutation_rate(-0.1).build(),
            "Mutation rate",
        );
        expect_config_error(
            EvolutionOptions::builder().mutation_rate(f64::NAN).build(),
            "Mutation rate",
        );
    }

    #[test]
    fn test_negative_sigma_and_alpha() {
        expect_config_error(
            EvolutionOptions::builder().mutation_sigma(-1.0).build(),
            "Mutation sigma",
        );
        expect_config_error(
            EvolutionOptions::builder().blx_alpha(-0.5).build(),
            "BLX alpha",
        );
    }
}
