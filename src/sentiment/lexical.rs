// Rule-based lexicon sentiment scoring, VADER style.
//
// Each word's valence comes from the lexicon provider and is adjusted by
// its neighbourhood:
//   - degree adverbs up to three words back scale it (with distance decay)
//   - negators up to three words back flip and dampen it
//   - ALL-CAPS words of two or more letters gain emphasis
//   - "but" shifts weight from the clause before it to the clause after it
// The adjusted valences are summed, exclamation/question-mark emphasis is
// added in the direction of the sum, and the total is squashed into
// [-1, 1] with x / sqrt(x^2 + alpha). The squash grows sub-linearly, so
// long texts do not saturate at a rate proportional to their length.

use std::sync::Arc;

use super::traits::{SentimentResult, SentimentScorer};
use crate::lexicon::traits::LexiconProvider;

/// Emphasis added to a shouted (ALL-CAPS) sentiment word.
const CAPS_INCREMENT: f64 = 0.733;
/// Multiplier applied to a valence preceded by a negator.
const NEGATION_SCALAR: f64 = -0.74;
/// Approximates the maximum expected raw sum in the squash function.
const NORMALIZATION_ALPHA: f64 = 15.0;
/// How far back modifiers (boosters, negators) reach.
const MODIFIER_WINDOW: usize = 3;
/// Booster strength decay by distance (1, 2, 3 words back).
const DISTANCE_DECAY: [f64; MODIFIER_WINDOW] = [1.0, 0.95, 0.9];
/// Emphasis per exclamation mark, counted up to `MAX_EXCLAMATIONS`.
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
/// Emphasis per question mark when there are two or three of them.
const QUESTION_INCREMENT: f64 = 0.18;
/// Emphasis cap for four or more question marks.
const QUESTION_CAP: f64 = 0.96;
/// Weight shift around the contrastive conjunction "but".
const BEFORE_BUT: f64 = 0.5;
const AFTER_BUT: f64 = 1.5;

/// Lexicon-driven scorer. Cheap to clone; the lexicon is shared.
#[derive(Clone)]
pub struct LexiconSentimentScorer {
    lexicon: Arc<dyn LexiconProvider>,
}

impl LexiconSentimentScorer {
    pub fn new(lexicon: Arc<dyn LexiconProvider>) -> Self {
        Self { lexicon }
    }

    /// Adjusted valence of the word at `i`, or 0.0 if it carries none.
    fn word_valence(&self, i: usize, words: &[&str], lowered: &[String]) -> f64 {
        let lower = lowered[i].as_str();

        // Degree adverbs modify their neighbours; they carry no valence themselves.
        if self.lexicon.booster(lower) != 0.0 {
            return 0.0;
        }

        let mut valence = self.lexicon.polarity(lower);
        if valence == 0.0 {
            return 0.0;
        }

        if is_shouted(words[i]) {
            valence += CAPS_INCREMENT.copysign(valence);
        }

        for distance in 1..=MODIFIER_WINDOW.min(i) {
            let j = i - distance;
            let previous = lowered[j].as_str();
            if self.lexicon.polarity(previous) == 0.0 {
                let scalar = self.booster_scalar(words[j], previous, valence);
                valence += scalar * DISTANCE_DECAY[distance - 1];
            }
            if self.lexicon.is_negation(previous) {
                valence *= NEGATION_SCALAR;
            }
        }

        valence
    }

    /// Push a valence away from (or toward) zero if `word` is a degree adverb.
    fn booster_scalar(&self, word: &str, lower: &str, valence: f64) -> f64 {
        let booster = self.lexicon.booster(lower);
        if booster == 0.0 {
            return 0.0;
        }
        let mut scalar = if valence < 0.0 { -booster } else { booster };
        if is_shouted(word) {
            scalar += CAPS_INCREMENT.copysign(valence);
        }
        scalar
    }
}

impl SentimentScorer for LexiconSentimentScorer {
    fn polarity_scores(&self, text: &str) -> SentimentResult {
        let words = sentiment_words(text);
        if words.is_empty() {
            return SentimentResult::default();
        }

        let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();

        let mut sentiments: Vec<f64> = (0..words.len())
            .map(|i| self.word_valence(i, &words, &lowered))
            .collect();

        apply_but_rule(&lowered, &mut sentiments);

        summarize(&sentiments, punctuation_emphasis(text))
    }
}

/// Whitespace-separated words with edge punctuation stripped. Case is kept
/// because capitalization carries signal.
fn sentiment_words(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|chunk| chunk.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
        .map(|word| word.trim_matches('\''))
        .filter(|word| !word.is_empty())
        .collect()
}

/// Two or more letters, none lowercase. Decided per word, so adding text
/// elsewhere never changes which words are emphasized. Single letters
/// ("I", "A") are never shouting.
fn is_shouted(word: &str) -> bool {
    let mut letters = 0usize;
    for c in word.chars().filter(|c| c.is_alphabetic()) {
        if c.is_lowercase() {
            return false;
        }
        letters += 1;
    }
    letters >= 2
}

fn apply_but_rule(lowered: &[String], sentiments: &mut [f64]) {
    if let Some(pivot) = lowered.iter().position(|w| w == "but") {
        for (k, sentiment) in sentiments.iter_mut().enumerate() {
            if k < pivot {
                *sentiment *= BEFORE_BUT;
            } else if k > pivot {
                *sentiment *= AFTER_BUT;
            }
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.chars().filter(|&c| c == '!').count().min(MAX_EXCLAMATIONS);
    let questions = text.chars().filter(|&c| c == '?').count();

    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2..=3 => questions as f64 * QUESTION_INCREMENT,
        _ => QUESTION_CAP,
    };

    exclamations as f64 * EXCLAMATION_INCREMENT + question_emphasis
}

/// Map an unbounded valence sum into [-1, 1].
pub fn squash(sum: f64) -> f64 {
    (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn summarize(sentiments: &[f64], emphasis: f64) -> SentimentResult {
    let sum: f64 = sentiments.iter().sum();
    let compound = if sum == 0.0 {
        0.0
    } else {
        squash(sum + emphasis.copysign(sum))
    };

    let mut positive_sum = 0.0;
    let mut negative_sum = 0.0;
    let mut neutral_count = 0usize;
    for &s in sentiments {
        if s > 0.0 {
            positive_sum += s + 1.0;
        } else if s < 0.0 {
            negative_sum += s - 1.0;
        } else {
            neutral_count += 1;
        }
    }

    if positive_sum > negative_sum.abs() {
        positive_sum += emphasis;
    } else if positive_sum < negative_sum.abs() {
        negative_sum -= emphasis;
    }

    let total = positive_sum + negative_sum.abs() + neutral_count as f64;
    if total <= 0.0 {
        return SentimentResult {
            compound,
            ..Default::default()
        };
    }

    SentimentResult {
        compound,
        positive: positive_sum / total,
        neutral: neutral_count as f64 / total,
        negative: negative_sum.abs() / total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::english::EnglishLexicon;

    fn scorer() -> LexiconSentimentScorer {
        LexiconSentimentScorer::new(Arc::new(EnglishLexicon::new()))
    }

    #[test]
    fn no_lexicon_matches_is_exactly_zero() {
        let result = scorer().polarity_scores("The committee met on Tuesday.");
        assert_eq!(result.compound, 0.0);
        assert_eq!(result.neutral, 1.0);
    }

    #[test]
    fn empty_text_is_zero() {
        assert_eq!(scorer().polarity_scores(""), SentimentResult::default());
        assert_eq!(scorer().score("   "), 0.0);
    }

    #[test]
    fn negation_flips_polarity() {
        let s = scorer();
        assert!(s.score("This is good") > 0.0);
        assert!(s.score("This is not good") < 0.0);
    }

    #[test]
    fn booster_increases_magnitude() {
        let s = scorer();
        assert!(s.score("a very good plan") > s.score("a good plan"));
        assert!(s.score("a barely good plan") < s.score("a good plan"));
    }

    #[test]
    fn caps_emphasis_in_mixed_case() {
        let s = scorer();
        assert!(s.score("This plan is GREAT") > s.score("This plan is great"));
    }

    #[test]
    fn shouting_does_not_depend_on_surrounding_case() {
        let s = scorer();
        let shouted = "TERRIBLE AWFUL HORRIBLE DISASTER";
        assert!(s.score(&format!("{shouted} fair")) > s.score(shouted));
        assert!(!is_shouted("I"));
        assert!(is_shouted("USA!"));
    }

    #[test]
    fn but_shifts_weight_to_second_clause() {
        let s = scorer();
        assert!(s.score("The plan was good but the result was terrible") < 0.0);
    }

    #[test]
    fn repeated_questions_add_emphasis() {
        let s = scorer();
        assert!(s.score("Is this a disaster??") < s.score("Is this a disaster"));
    }

    #[test]
    fn proportions_sum_to_one() {
        let r = scorer().polarity_scores("Peace and prosperity, not war and poverty!");
        let total = r.positive + r.neutral + r.negative;
        assert!((total - 1.0).abs() < 1e-9, "proportions sum to {total}");
    }

    #[test]
    fn squash_is_bounded_and_monotonic() {
        let mut last = -1.0;
        for step in -100..=100 {
            let value = squash(step as f64 * 0.5);
            assert!((-1.0..=1.0).contains(&value));
            assert!(value >= last);
            last = value;
        }
    }
}
