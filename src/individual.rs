//! # Individual
//!
//! An `Individual` is one candidate solution: a fixed-length vector of real
//! genes, one per dimension of the search domain.
//!
//! Individuals are plain values. Operators clone them rather than share them,
//! so mutating a child never reaches back into the population it was bred from.
//!
//! ## Example
//!
//! ```rust
//! use blxga::individual::Individual;
//!
//! let mut ind = Individual::from_genes(vec![1.0, 2.0]);
//! ind[0] += 0.5;
//! assert_eq!(ind.genes(), &[1.5, 2.0]);
//! assert_eq!(ind.dimension(), 2);
//! ```

use std::ops::{Index, IndexMut};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    genes: Vec<f64>,
}

impl Individual {
    pub fn from_genes(genes: Vec<f64>) -> Self {
        Self { genes }
    }

    pub fn genes(&self) -> &[f64] {
        &self.genes
    }

    pub fn genes_mut(&mut self) -> &mut [f64] {
        &mut self.genes
    }

    pub fn dimension(&self) -> usize {
        self.genes.len()
    }

    pub fn into_genes(self) -> Vec<f64> {
        self.genes
    }
}

impl From<Vec<f64>> for Individual {
    fn from(genes: Vec<f64>) -> Self {
        Self::from_genes(genes)
    }
}

impl AsRef<[f64]> for Individual {
    fn as_ref(&self) -> &[f64] {
        &self.genes
    }
}

impl Index<usize> for Individual {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.genes[index]
    }
}

impl IndexMut<usize> for Individual {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.genes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_is_independent() {
        let parent = Individual::from_genes(vec![1.0, 2.0, 3.0]);
        let mut child = parent.clone();
        child[1] = 42.0;

        assert_eq!(parent.genes(), &[1.0, 2.0, 3.0]);
        assert_eq!(child.genes(), &[1.0, 42.0, 3.0]);
    }

    #[test]
    fn test_conversions() {
        let ind: Individual = vec![0.5, -0.5].into();
        let genes: &[f64] = ind.as_ref();
        assert_eq!(genes, &[0.5, -0.5]);
        assert_eq!(ind.into_genes(), vec![0.5, -0.5]);
    }
}
