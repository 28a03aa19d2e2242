//! # Bounds
//!
//! The search domain: one closed interval per dimension. Bounds are fixed for
//! a whole run. They define where initial individuals are drawn from, and the
//! box every individual is clamped back into after crossover and mutation.
//!
//! ## Example
//!
//! ```rust
//! use blxga::bounds::Bounds;
//! use blxga::individual::Individual;
//! use blxga::rng::RandomNumberGenerator;
//!
//! let bounds = Bounds::new(vec![(-5.0, 5.0), (0.0, 1.0)]).unwrap();
//! let mut rng = RandomNumberGenerator::from_seed(1);
//!
//! let ind = bounds.random_individual(&mut rng).unwrap();
//! assert!(bounds.contains(&ind));
//!
//! let mut wild = Individual::from_genes(vec![12.0, -3.0]);
//! bounds.clamp(&mut wild);
//! assert_eq!(wild.genes(), &[5.0, 0.0]);
//! ```

use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// The admissible interval `[min, max]` of a single dimension.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(f64, f64)", into = "(f64, f64)"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    min: f64,
    max: f64,
}

impl Interval {
    /// Creates an interval.
    ///
    /// `min == max` is legal and pins the dimension to a single value.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if either end is not finite or
    /// `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(GeneticError::Configuration(format!(
                "Interval ends must be finite, got [{}, {}]",
                min, max
            )));
        }
        if min > max {
            return Err(GeneticError::Configuration(format!(
                "Interval minimum {} exceeds maximum {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

/// Per-dimension box constraints of the search domain.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    intervals: Vec<Interval>,
}

impl Bounds {
    /// Builds bounds from `(min, max)` pairs, one per dimension.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if no dimension is given or any
    /// pair is not a valid [`Interval`].
    pub fn new(pairs: Vec<(f64, f64)>) -> Result<Self> {
        if pairs.is_empty() {
            return Err(GeneticError::Configuration(
                "Bounds must define at least one dimension".to_string(),
            ));
        }

        let intervals = pairs
            .into_iter()
            .enumerate()
            .map(|(dim, (min, max))| {
                Interval::new(min, max).map_err(|e| match e {
                    GeneticError::Configuration(msg) => {
                        GeneticError::Configuration(format!("Dimension {}: {}", dim, msg))
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { intervals })
    }

    /// The same interval repeated over `dimension` dimensions.
    pub fn uniform(min: f64, max: f64, dimension: usize) -> Result<Self> {
        Self::new(vec![(min, max); dimension])
    }

    pub fn dimension(&self) -> usize {
        self.intervals.len()
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Draws a new individual, each gene uniform over its own interval.
    pub fn random_individual(&self, rng: &mut RandomNumberGenerator) -> Result<Individual> {
        let genes = self
            .intervals
            .iter()
            .map(|interval| rng.uniform(interval.min, interval.max))
            .collect::<Result<Vec<_>>>()?;
        Ok(Individual::from_genes(genes))
    }

    /// Pulls every out-of-range gene back onto the nearest interval end.
    pub fn clamp(&self, individual: &mut Individual) {
        individual
            .genes_mut()
            .iter_mut()
            .zip(&self.intervals)
            .for_each(|(gene, interval)| *gene = interval.clamp(*gene));
    }

    /// Whether the individual has the right length and every gene lies in range.
    pub fn contains(&self, individual: &Individual) -> bool {
        individual.dimension() == self.dimension()
            && individual
                .genes()
                .iter()
                .zip(&self.intervals)
                .all(|(&gene, interval)| interval.contains(gene))
    }
}

impl TryFrom<(f64, f64)> for Interval {
    type Error = GeneticError;

    fn try_from((min, max): (f64, f64)) -> Result<Self> {
        Self::new(min, max)
    }
}

impl From<Interval> for (f64, f64) {
    fn from(interval: Interval) -> Self {
        (interval.min, interval.max)
    }
}

impl TryFrom<Vec<(f64, f64)>> for Bounds {
    type Error = GeneticError;

    fn try_from(pairs: Vec<(f64, f64)>) -> Result<Self> {
        Self::new(pairs)
    }
}

impl From<Bounds> for Vec<(f64, f64)> {
    fn from(bounds: Bounds) -> Self {
        bounds
            .intervals
            .iter()
            .map(|interval| (interval.min, interval.max))
            .collect()
    }
}
