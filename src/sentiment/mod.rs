// Sentiment scoring: trait-based abstraction for swappable scorers.
//
// The SentimentScorer trait defines the interface. LexiconSentimentScorer
// implements it with a rule-based valence lexicon. Scoring always runs on
// raw text: case, punctuation and intensifiers carry signal.

pub mod lexical;
pub mod traits;
