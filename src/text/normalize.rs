// Normalizer: raw speech text to a clean, lemmatized token sequence.
//
// lowercase -> tokenize -> drop stopwords / punctuation / non-alphabetic
// tokens -> lemmatize -> drop lemmas that collapsed into stopwords.
// Output order follows the input. Used only to prepare text for term
// weighting and topic modeling, never for sentiment.

use std::sync::Arc;

use rayon::prelude::*;

use super::tokenize::word_tokens;
use crate::lexicon::traits::LexiconProvider;

/// Turns raw document text into content tokens using a shared lexicon.
#[derive(Clone)]
pub struct Normalizer {
    lexicon: Arc<dyn LexiconProvider>,
}

impl Normalizer {
    pub fn new(lexicon: Arc<dyn LexiconProvider>) -> Self {
        Self { lexicon }
    }

    /// Normalize one document. Empty or whitespace-only input yields an
    /// empty sequence.
    pub fn normalize(&self, raw_text: &str) -> Vec<String> {
        let lowered = raw_text.to_lowercase();
        word_tokens(&lowered)
            .into_iter()
            .filter(|token| is_content_token(token) && !self.lexicon.is_stopword(token))
            .map(|token| self.lexicon.lemma(&token))
            .filter(|lemma| is_content_token(lemma) && !self.lexicon.is_stopword(lemma))
            .collect()
    }

    /// Normalize many documents in parallel; output order matches input order.
    pub fn normalize_batch(&self, texts: &[&str]) -> Vec<Vec<String>> {
        texts.par_iter().map(|text| self.normalize(text)).collect()
    }
}

/// A token survives only if it is non-empty and purely alphabetic, which
/// also rules out punctuation-only tokens.
fn is_content_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}
