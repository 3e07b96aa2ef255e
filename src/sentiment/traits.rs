// Sentiment scorer trait: the swap-ready abstraction.
//
// The default implementation is a rule-based lexicon scorer. Anything that
// maps raw text to a bounded polarity (a model-backed classifier, a
// different lexicon) can stand in without touching the pipeline.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// The result of scoring a single piece of raw text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Aggregate polarity from -1.0 (most negative) to 1.0 (most positive)
    pub compound: f64,
    /// Share of sentiment-bearing mass that is positive (0.0 to 1.0)
    pub positive: f64,
    /// Share of tokens carrying no sentiment (0.0 to 1.0)
    pub neutral: f64,
    /// Share of sentiment-bearing mass that is negative (0.0 to 1.0)
    pub negative: f64,
}

/// Trait for scoring the polarity of raw, unnormalized text.
///
/// Implementations must be pure: the same text always yields the same
/// result, and scoring never mutates shared state.
pub trait SentimentScorer: Send + Sync {
    /// Full breakdown for one text.
    fn polarity_scores(&self, text: &str) -> SentimentResult;

    /// Compound score in [-1.0, 1.0]; exactly 0.0 when nothing in the text
    /// carries sentiment.
    fn score(&self, text: &str) -> f64 {
        self.polarity_scores(text).compound
    }

    /// Score many texts in parallel, returning results in the same order.
    fn score_batch(&self, texts: &[&str]) -> Vec<f64> {
        texts.par_iter().map(|text| self.score(text)).collect()
    }
}
