//! # Error Types
//!
//! This module defines the error types of the optimizer. Every fallible
//! operation in the crate returns [`Result`], whose error side is
//! [`GeneticError`].
//!
//! Two families of failures matter to callers:
//!
//! - configuration errors, raised before any generation runs;
//! - fitness errors, raised when the caller-supplied fitness function fails
//!   (or returns a non-finite score) for some individual. These carry the
//!   stage of the run and the offending individual so the failure can be
//!   reproduced.
//!
//! ## Examples
//!
//! ```rust
//! use blxga::error::{GeneticError, Result};
//! use blxga::evolution::EvolutionOptions;
//!
//! fn check(options: &EvolutionOptions) -> Result<()> {
//!     if options.get_population_size() == 0 {
//!         return Err(GeneticError::Configuration(
//!             "Population size cannot be zero".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(&EvolutionOptions::default()).is_ok());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use blxga::error::{GeneticError, OptionExt};
//!
//! fn best_score(scores: &[f64]) -> blxga::error::Result<f64> {
//!     scores
//!         .iter()
//!         .cloned()
//!         .fold(None, |best: Option<f64>, s| Some(best.map_or(s, |b| b.max(s))))
//!         .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert_eq!(best_score(&[1.0, 3.0, 2.0]).unwrap(), 3.0);
//! assert!(best_score(&[]).is_err());
//! ```

use std::fmt;

use thiserror::Error;

use crate::evolution::GenerationRecord;

/// The point of a run at which a fitness evaluation took place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationStage {
    /// Evaluation of the freshly initialized population.
    Initial,
    /// Evaluation of the population produced by the given generation.
    Generation(usize),
}

impl fmt::Display for EvaluationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationStage::Initial => write!(f, "initial evaluation"),
            EvaluationStage::Generation(generation) => write!(f, "generation {}", generation),
        }
    }
}

/// Error returned by a fitness function that cannot score an individual.
///
/// Fitness functions implementing [`Challenge`](crate::evolution::Challenge)
/// directly return this type; the launcher wraps it into
/// [`GeneticError::FitnessEvaluation`] together with the failing individual.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct FitnessError {
    message: String,
}

impl FitnessError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Represents errors that can occur while configuring or running the optimizer.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when the fitness function fails for an individual.
    #[error("Fitness evaluation failed during {stage} for individual {index} {individual:?}: {source}")]
    FitnessEvaluation {
        stage: EvaluationStage,
        index: usize,
        individual: Vec<f64>,
        #[source]
        source: FitnessError,
    },

    /// Error that occurs when the fitness function returns NaN or infinity.
    #[error("Non-finite fitness score {score} during {stage} for individual {index} {individual:?}")]
    NonFiniteFitness {
        stage: EvaluationStage,
        index: usize,
        individual: Vec<f64>,
        score: f64,
    },

    /// Error that occurs when an evolution process is driven past its end.
    #[error("Evolution error: {0}")]
    Evolution(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a random number generation fails.
    #[error("Random generation error: {0}")]
    RandomGeneration(String),

    /// The run was cancelled at a generation boundary.
    ///
    /// `history` holds the records of every generation completed before the
    /// cancellation was observed.
    #[error("Evolution cancelled before generation {generation}")]
    Cancelled {
        generation: usize,
        history: Vec<GenerationRecord>,
    },
}

/// A specialized Result type for genetic algorithm operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
