use crate::{error::FitnessError, individual::Individual};

/// A fitness function. Higher scores are better.
///
/// Any `Fn(&[f64]) -> f64` is a challenge. Fitness functions that can fail
/// implement the trait directly and return a [`FitnessError`]; the launcher
/// then aborts the run and reports the failing individual.
///
/// ```rust
/// use blxga::error::FitnessError;
/// use blxga::evolution::Challenge;
/// use blxga::individual::Individual;
///
/// struct LogBarrier;
///
/// impl Challenge for LogBarrier {
///     fn score(&self, individual: &Individual) -> Result<f64, FitnessError> {
///         let x = individual[0];
///         if x <= 0.0 {
///             return Err(FitnessError::new(format!("log undefined at {}", x)));
///         }
///         Ok(x.ln())
///     }
/// }
///
/// let sphere = |x: &[f64]| -x.iter().map(|v| v * v).sum::<f64>();
/// let ind = Individual::from_genes(vec![1.0, 2.0]);
/// assert_eq!(sphere.score(&ind).unwrap(), -5.0);
/// assert!(LogBarrier.score(&Individual::from_genes(vec![-1.0])).is_err());
/// ```
pub trait Challenge {
    fn score(&self, individual: &Individual) -> Result<f64, FitnessError>;
}

impl<F> Challenge for F
where
    F: Fn(&[f64]) -> f64,
{
    fn score(&self, individual: &Individual) -> Result<f64, FitnessError> {
        Ok(self(individual.genes()))
    }
}
