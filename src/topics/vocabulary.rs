// Corpus vocabulary: document frequencies, frequency bounds, stable indices.
//
// Each non-empty token sequence counts as one document. Documents with no
// usable tokens are excluded from both the frequency counts and the corpus
// size. Terms are ordered alphabetically before indices are assigned, so the
// same corpus and bounds always produce the same term-to-index mapping.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::debug;

use crate::config::AnalysisConfig;

/// Retained terms, their indices, document frequencies and smoothed IDF.
///
/// Immutable once built. An empty vocabulary is a legal value that signals
/// "no topics derivable" to the topic model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
    document_frequency: Vec<usize>,
    idf: Vec<f64>,
    corpus_size: usize,
}

impl Vocabulary {
    /// Terms in index order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn document_frequency(&self, index: usize) -> Option<usize> {
        self.document_frequency.get(index).copied()
    }

    pub fn idf(&self, index: usize) -> Option<f64> {
        self.idf.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of non-empty documents the vocabulary was fitted on.
    pub fn corpus_size(&self) -> usize {
        self.corpus_size
    }
}

/// Fits a [`Vocabulary`] under document-frequency bounds.
#[derive(Debug, Clone)]
pub struct VocabularyBuilder {
    max_document_frequency_ratio: f64,
    min_document_frequency_count: usize,
    stopwords: HashSet<String>,
}

impl VocabularyBuilder {
    pub fn new(max_document_frequency_ratio: f64, min_document_frequency_count: usize) -> Self {
        Self {
            max_document_frequency_ratio,
            min_document_frequency_count,
            stopwords: HashSet::new(),
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(
            config.max_document_frequency_ratio,
            config.min_document_frequency_count,
        )
    }

    /// Additionally exclude these terms regardless of frequency.
    pub fn with_stopwords<I, S>(mut self, stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(stopwords.into_iter().map(Into::into));
        self
    }

    /// Count document frequencies over `documents` and keep the terms that
    /// fall inside the bounds.
    ///
    /// Never fails: an empty corpus, or bounds that eliminate every term,
    /// produce an empty vocabulary.
    pub fn fit<T: AsRef<[String]>>(&self, documents: &[T]) -> Vocabulary {
        let mut frequencies: BTreeMap<&str, usize> = BTreeMap::new();
        let mut corpus_size = 0usize;

        for document in documents {
            let tokens: &[String] = document.as_ref();
            if tokens.is_empty() {
                continue;
            }
            corpus_size += 1;
            let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in distinct {
                *frequencies.entry(term).or_insert(0) += 1;
            }
        }

        let max_count = self.max_document_frequency_ratio * corpus_size as f64;
        let candidates = frequencies.len();

        let mut vocabulary = Vocabulary {
            corpus_size,
            ..Default::default()
        };

        // BTreeMap iteration is sorted, which fixes the index order.
        for (term, df) in frequencies {
            if df as f64 > max_count
                || df < self.min_document_frequency_count
                || self.stopwords.contains(term)
            {
                continue;
            }
            vocabulary.index.insert(term.to_string(), vocabulary.terms.len());
            vocabulary.terms.push(term.to_string());
            vocabulary.document_frequency.push(df);
            vocabulary.idf.push(smoothed_idf(corpus_size, df));
        }

        debug!(
            documents = corpus_size,
            candidates,
            retained = vocabulary.len(),
            "Fitted vocabulary"
        );

        vocabulary
    }
}

/// ln((1 + n) / (1 + df)) + 1: finite and at least 1 even when a term
/// appears in every document.
pub fn smoothed_idf(corpus_size: usize, document_frequency: usize) -> f64 {
    ((1.0 + corpus_size as f64) / (1.0 + document_frequency as f64)).ln() + 1.0
}
