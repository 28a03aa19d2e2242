//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies that turn a
//! pair of selected parents into a pair of children. The operators it composes
//! live next to it: [`BlxAlphaCrossover`] and [`GaussianMutation`].
pub mod blx_gaussian;
pub mod crossover;
pub mod mutation;

use std::fmt::Debug;

use crate::{bounds::Bounds, error::Result, individual::Individual, rng::RandomNumberGenerator};

/// # BreedStrategy
///
/// Breeds two children from two parents. Implementations never modify the
/// parents, and every returned child must lie within `bounds`.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// ## Errors
    ///
    /// This method can fail if:
    /// - The parents do not match the dimension of the bounds
    /// - A random draw cannot be made
    fn breed(
        &self,
        parent1: &Individual,
        parent2: &Individual,
        bounds: &Bounds,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Individual, Individual)>;
}

pub use blx_gaussian::BlxGaussianStrategy;
pub use crossover::BlxAlphaCrossover;
pub use mutation::GaussianMutation;
