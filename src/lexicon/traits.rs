// Lexicon provider trait: the swap-ready linguistic resource.
//
// Normalization and sentiment scoring never reach for a global word list.
// They ask a provider, so the resources can be replaced or version-pinned
// without touching pipeline logic.

/// Read-only access to the fixed linguistic resources.
///
/// Implementations must be immutable after construction: one provider is
/// shared across every worker thread of a run.
pub trait LexiconProvider: Send + Sync {
    /// Dictionary base form of an already-lowercased term.
    fn lemma(&self, term: &str) -> String;

    /// Whether a lowercased term is a function word excluded from content analysis.
    fn is_stopword(&self, term: &str) -> bool;

    /// Valence of a lowercased term on the -4..=4 scale; 0.0 when the term
    /// carries no sentiment.
    fn polarity(&self, term: &str) -> f64;

    /// Scalar added to a neighbouring term's magnitude by a degree adverb
    /// ("very", "barely"); 0.0 when the term is not an intensifier.
    fn booster(&self, term: &str) -> f64;

    /// Whether a lowercased term flips the polarity of what follows.
    fn is_negation(&self, term: &str) -> bool;

    /// Terms kept out of the topic vocabulary. Broader than the
    /// normalization stopwords: it also names content-free words that
    /// survive normalization ("also", "would").
    fn vocabulary_stopwords(&self) -> Vec<String>;
}
