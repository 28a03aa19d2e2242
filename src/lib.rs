//! A real-valued genetic algorithm.
//!
//! Given box constraints per dimension and a fitness function to maximize,
//! [`EvolutionLauncher`] evolves a population of real vectors with tournament
//! selection, BLX-α crossover, Gaussian mutation and elitism, and returns the
//! best individual of every generation.
//!
//! ```rust
//! use blxga::{Bounds, EvolutionLauncher, EvolutionOptions, RandomNumberGenerator};
//!
//! let bounds = Bounds::uniform(-5.0, 5.0, 2).unwrap();
//! let launcher = EvolutionLauncher::new(bounds, |x: &[f64]| -(x[0] * x[0] + x[1] * x[1]));
//!
//! let history = launcher
//!     .evolve(&EvolutionOptions::default(), &mut RandomNumberGenerator::from_seed(42))
//!     .unwrap();
//! let best = history.last().unwrap();
//! assert!(best.best_fitness > -1e-2);
//! ```
pub mod bounds;
pub mod breeding;
pub mod error;
pub mod evolution;
pub mod individual;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use bounds::{Bounds, Interval};
pub use error::{EvaluationStage, FitnessError, GeneticError, OptionExt, Result};
pub use evolution::{
    Challenge, Evolution, EvolutionLauncher, EvolutionOptions, GenerationRecord, History, LogLevel,
};
pub use individual::Individual;
pub use rng::RandomNumberGenerator;
