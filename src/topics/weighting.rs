// Term weighting: tf × smoothed idf, scaled to unit Euclidean length.

use std::collections::BTreeMap;

use rayon::prelude::*;

use super::vocabulary::Vocabulary;

/// Sparse, non-negative weights keyed by vocabulary index.
///
/// Entries are sorted by index and never contain zero weights. Its
/// dimension is the vocabulary size it was built against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedVector {
    entries: Vec<(usize, f64)>,
}

impl WeightedVector {
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> f64 {
        self.entries
            .binary_search_by_key(&index, |&(i, _)| i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }
}

/// Maps token sequences onto a fitted vocabulary.
pub struct TermWeighter<'a> {
    vocabulary: &'a Vocabulary,
}

impl<'a> TermWeighter<'a> {
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Weight one document. Tokens outside the vocabulary are ignored; a
    /// document with no retained terms yields an empty vector.
    pub fn transform(&self, tokens: &[String]) -> WeightedVector {
        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
        for token in tokens {
            if let Some(index) = self.vocabulary.index_of(token) {
                *counts.entry(index).or_insert(0) += 1;
            }
        }

        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .filter_map(|(index, tf)| {
                self.vocabulary
                    .idf(index)
                    .map(|idf| (index, tf as f64 * idf))
            })
            .collect();

        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, weight) in &mut entries {
                *weight /= norm;
            }
        }

        WeightedVector { entries }
    }

    /// Weight every document in parallel; output order matches input order.
    pub fn transform_all<T>(&self, documents: &[T]) -> Vec<WeightedVector>
    where
        T: AsRef<[String]> + Sync,
    {
        documents
            .par_iter()
            .map(|tokens| self.transform(tokens.as_ref()))
            .collect()
    }
}
