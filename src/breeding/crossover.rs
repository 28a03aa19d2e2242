use crate::bounds::Bounds;
use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Blend crossover (BLX-α).
///
/// For every dimension the parents span an interval `[cmin, cmax]` of width
/// `I`. Each child gene is drawn uniformly from `[cmin - α·I, cmax + α·I]`,
/// independently for the two children. `α = 0` only interpolates between the
/// parents, larger values let children land beyond them. Both children are
/// clamped to the bounds afterwards.
///
/// # Examples
///
/// ```
/// use blxga::bounds::Bounds;
/// use blxga::breeding::BlxAlphaCrossover;
/// use blxga::individual::Individual;
/// use blxga::rng::RandomNumberGenerator;
///
/// let bounds = Bounds::uniform(-10.0, 10.0, 2).unwrap();
/// let p1 = Individual::from_genes(vec![0.0, 1.0]);
/// let p2 = Individual::from_genes(vec![1.0, 1.0]);
/// let mut rng = RandomNumberGenerator::from_seed(3);
///
/// let blx = BlxAlphaCrossover::new(0.0).unwrap();
/// let (c1, c2) = blx.crossover(&p1, &p2, &bounds, &mut rng).unwrap();
/// assert!((0.0..=1.0).contains(&c1[0]) && (0.0..=1.0).contains(&c2[0]));
/// assert_eq!(c1[1], 1.0); // parents agree, so the child does too
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlxAlphaCrossover {
    alpha: f64,
}

impl BlxAlphaCrossover {
    /// # Errors
    ///
    /// Returns an error if `alpha` is negative or not finite.
    pub fn new(alpha: f64) -> Result<Self> {
        if !alpha.is_finite() || alpha < 0.0 {
            return Err(GeneticError::Configuration(format!(
                "BLX alpha must be a finite non-negative number, got {}",
                alpha
            )));
        }
        Ok(Self { alpha })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Produces two children from two parents. The parents are left untouched.
    ///
    /// Draw order: for each dimension, child one's gene then child two's.
    ///
    /// # Errors
    ///
    /// Returns an error if the parents and bounds disagree on the dimension.
    pub fn crossover(
        &self,
        parent1: &Individual,
        parent2: &Individual,
        bounds: &Bounds,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Individual, Individual)> {
        if parent1.dimension() != parent2.dimension() || parent1.dimension() != bounds.dimension() {
            return Err(GeneticError::Configuration(format!(
                "Crossover dimension mismatch: parents have {} and {} genes, bounds have {}",
                parent1.dimension(),
                parent2.dimension(),
                bounds.dimension()
            )));
        }

        let mut genes1 = Vec::with_capacity(parent1.dimension());
        let mut genes2 = Vec::with_capacity(parent2.dimension());

        for (&x1, &x2) in parent1.genes().iter().zip(parent2.genes()) {
            let cmin = x1.min(x2);
            let cmax = x1.max(x2);
            // Zero alpha must not turn an overflowing width into NaN.
            let spread = if self.alpha > 0.0 {
                self.alpha * (cmax - cmin)
            } else {
                0.0
            };

            // Anything past the f64 range is clamped into the bounds anyway.
            let low = (cmin - spread).max(-f64::MAX);
            let high = (cmax + spread).min(f64::MAX);

            genes1.push(rng.uniform(low, high)?);
            genes2.push(rng.uniform(low, high)?);
        }

        let mut child1 = Individual::from_genes(genes1);
        let mut child2 = Individual::from_genes(genes2);
        bounds.clamp(&mut child1);
        bounds.clamp(&mut child2);

        Ok((child1, child2))
    }
}

impl Default for BlxAlphaCrossover {
    fn default() -> Self {
        Self { alpha: 0.5 }
    }
}
