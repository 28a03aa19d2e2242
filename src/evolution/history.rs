use crate::individual::Individual;

/// The best individual of one generation.
///
/// Records are created once, after the generation's population has been
/// scored, and never change afterwards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRecord {
    pub generation: usize,
    pub best_fitness: f64,
    pub best_individual: Individual,
}

/// Best-per-generation records of a run, in generation order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct History {
    records: Vec<GenerationRecord>,
}

impl History {
    pub fn new(records: Vec<GenerationRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[GenerationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GenerationRecord> {
        self.records.iter()
    }

    /// The record of the final generation.
    pub fn last(&self) -> Option<&GenerationRecord> {
        self.records.last()
    }

    /// The record with the highest fitness over the whole run, the earliest on ties.
    pub fn best(&self) -> Option<&GenerationRecord> {
        self.records.iter().fold(None, |best, record| match best {
            Some(b) if b.best_fitness >= record.best_fitness => Some(b),
            _ => Some(record),
        })
    }

    pub fn into_records(self) -> Vec<GenerationRecord> {
        self.records
    }
}

impl IntoIterator for History {
    type Item = GenerationRecord;
    type IntoIter = std::vec::IntoIter<GenerationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a GenerationRecord;
    type IntoIter = std::slice::Iter<'a, GenerationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(generation: usize, best_fitness: f64) -> GenerationRecord {
        GenerationRecord {
            generation,
            best_fitness,
            best_individual: Individual::from_genes(vec![generation as f64]),
        }
    }

    #[test]
    fn test_best_prefers_earliest_on_ties() {
        let history = History::new(vec![record(0, -3.0), record(1, -1.0), record(2, -1.0), record(3, -2.0)]);
        assert_eq!(history.best().map(|r| r.generation), Some(1));
        assert_eq!(history.last().map(|r| r.generation), Some(3));
        assert_eq!(history.len(), 4);
    }

    #[test]
    fn test_empty_history() {
        let history = History::default();
        assert!(history.is_empty());
        assert!(history.best().is_none());
        assert!(history.last().is_none());
    }
}
