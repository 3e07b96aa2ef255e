// Unit tests for lexicon sentiment scoring.
//
// Tests the scorer's contract: bounded output, exact zero without lexicon
// matches, monotonicity in net valence, punctuation emphasis, and swapping
// the lexicon through the provider trait.

use std::sync::Arc;

use rhetoric::lexicon::english::EnglishLexicon;
use rhetoric::sentiment::lexical::LexiconSentimentScorer;
use rhetoric::sentiment::traits::SentimentScorer;

fn scorer() -> LexiconSentimentScorer {
    LexiconSentimentScorer::new(Arc::new(EnglishLexicon::new()))
}

// ============================================================
// Contract
// ============================================================

#[test]
fn empty_text_scores_zero() {
    assert_eq!(scorer().score(""), 0.0);
}

#[test]
fn text_without_lexicon_terms_scores_exactly_zero() {
    let s = scorer();
    for text in [
        "The Congress shall convene on the first Monday.",
        "Section 4, paragraph 2.",
        "!!!",
    ] {
        assert_eq!(s.score(text), 0.0, "{text:?} should score 0");
    }
}

#[test]
fn scores_stay_in_bounds() {
    let s = scorer();
    let loud = "GREAT wonderful tremendous excellent love peace hope!!!! ".repeat(50);
    let grim = "terrible disaster war crisis fear hate death!!!! ".repeat(50);
    for text in [loud.as_str(), grim.as_str(), "good", "bad"] {
        let score = s.score(text);
        assert!((-1.0..=1.0).contains(&score), "{score} out of bounds");
    }
    assert!(s.score(&loud) > 0.9);
    assert!(s.score(&grim) < -0.9);
}

#[test]
fn positive_terms_beat_negative_terms() {
    let s = scorer();
    assert!(s.score("wonderful excellent great") > s.score("terrible awful horrible"));
}

#[test]
fn adding_positive_content_never_lowers_score() {
    let s = scorer();
    for base in [
        "The budget passed.",
        "TERRIBLE AWFUL HORRIBLE DISASTER",
        "We face a CRISIS and a terrible war.",
    ] {
        let mut text = String::from(base);
        let mut last = s.score(&text);
        for addition in [" fair", " It is good.", " A great day.", " Wonderful news.", " Real hope."] {
            text.push_str(addition);
            let score = s.score(&text);
            assert!(
                score >= last,
                "score fell from {last} to {score} after {addition:?} on {base:?}"
            );
            last = score;
        }
    }
}

#[test]
fn scoring_is_stable_across_calls() {
    let s = scorer();
    let text = "We will not fail, but we must be strong!";
    let first = s.polarity_scores(text);
    for _ in 0..10 {
        assert_eq!(s.polarity_scores(text), first);
    }
}

// ============================================================
// Heuristic modifiers
// ============================================================

#[test]
fn exclamations_amplify_magnitude() {
    let s = scorer();
    let excited = s.score("This is a tremendous, wonderful achievement!!!");
    let calm = s.score("This is a tremendous, wonderful achievement.");
    assert!(calm > 0.0);
    assert!(excited > calm, "{excited} should exceed {calm}");
}

#[test]
fn exclamation_emphasis_is_capped() {
    let s = scorer();
    assert_eq!(s.score("good!!!!"), s.score("good!!!!!!!!"));
}

#[test]
fn negated_positive_is_negative() {
    assert!(scorer().score("This plan is not good") < 0.0);
    assert!(scorer().score("We never wanted war") > scorer().score("We wanted war"));
}

#[test]
fn batch_matches_individual_scores() {
    let s = scorer();
    let texts = ["great", "", "awful", "the end"];
    let batch = s.score_batch(&texts);
    let single: Vec<f64> = texts.iter().map(|t| s.score(t)).collect();
    assert_eq!(batch, single);
}

// ============================================================
// Lexicon overlay
// ============================================================

#[test]
fn overlay_lexicon_changes_scores() {
    let lexicon = EnglishLexicon::new()
        .with_valence_text("filibuster\t-2.5\t0.8\t[-2, -3]\n")
        .unwrap();
    let s = LexiconSentimentScorer::new(Arc::new(lexicon));
    assert!(s.score("Another filibuster") < 0.0);
    assert_eq!(scorer().score("Another filibuster"), 0.0);
}

#[test]
fn overlay_file_loads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vader_lexicon.txt");
    std::fs::write(&path, "gridlock\t-1.8\t0.6\t[-2, -2]\n").unwrap();
    let lexicon = EnglishLexicon::new().with_valence_file(&path).unwrap();
    let s = LexiconSentimentScorer::new(Arc::new(lexicon));
    assert!(s.score("gridlock again") < 0.0);
}
