// Unit tests for tokenization, lemmatization and normalization.
//
// Tests isolated pure functions: word_tokens edge cases, lemmatize_noun
// fixed points, and the Normalizer's invariants (idempotence, no stopwords,
// alphabetic-only output).

use std::sync::Arc;

use rhetoric::lexicon::english::EnglishLexicon;
use rhetoric::lexicon::lemma::lemmatize_noun;
use rhetoric::lexicon::traits::LexiconProvider;
use rhetoric::text::normalize::Normalizer;
use rhetoric::text::tokenize::word_tokens;

const SAMPLES: &[&str] = &[
    "Mr. Speaker, the state of our Union is strong!",
    "We don't negotiate with terrorists; we've never done so.",
    "In 1941, the nations of the world faced crises, wars and famines.",
    "Our schools, our teachers, and our children's futures depend on it.",
    "The U.S. economy grew 3.2% — the best year since the 1990s.",
    "Glasses, buses, analyses, babies and boxes.",
    "Womens rights, childrens hospitals and mens clubs.",
    "The datas and medias of the peoples.",
    "   ",
    "",
];

fn normalizer() -> Normalizer {
    Normalizer::new(Arc::new(EnglishLexicon::new()))
}

// ============================================================
// word_tokens
// ============================================================

#[test]
fn tokens_split_edge_punctuation() {
    assert_eq!(word_tokens("(Hello, world!)"), vec!["(", "Hello", ",", "world", "!", ")"]);
}

#[test]
fn tokens_detach_contractions() {
    assert_eq!(word_tokens("don't we'll"), vec!["do", "n't", "we", "'ll"]);
}

#[test]
fn tokens_of_blank_text_are_empty() {
    assert!(word_tokens(" \t\n ").is_empty());
}

// ============================================================
// lemmatize_noun
// ============================================================

#[test]
fn lemmas_are_fixed_points() {
    for word in [
        "nations", "economies", "wars", "taxes", "churches", "glasses", "bias", "analysis",
        "children", "women", "ideas", "days", "womens", "childrens", "mens", "datas",
        "medias",
    ] {
        let lemma = lemmatize_noun(word);
        assert_eq!(lemmatize_noun(&lemma), lemma, "lemma of {word} is not stable");
    }
}

#[test]
fn common_plurals_reduce() {
    assert_eq!(lemmatize_noun("nations"), "nation");
    assert_eq!(lemmatize_noun("economies"), "economy");
    assert_eq!(lemmatize_noun("taxes"), "tax");
    assert_eq!(lemmatize_noun("children"), "child");
}

#[test]
fn plurals_of_irregular_plurals_reach_the_base_form() {
    assert_eq!(lemmatize_noun("womens"), "woman");
    assert_eq!(lemmatize_noun("childrens"), "child");
    assert_eq!(lemmatize_noun("mens"), "man");
    assert_eq!(lemmatize_noun("datas"), "datum");
    assert_eq!(lemmatize_noun("medias"), "medium");
}

// ============================================================
// Normalizer invariants
// ============================================================

#[test]
fn normalization_is_idempotent() {
    let n = normalizer();
    for text in SAMPLES {
        let once = n.normalize(text);
        let twice = n.normalize(&once.join(" "));
        assert_eq!(once, twice, "not idempotent for {text:?}");
    }
}

#[test]
fn normalization_of_doubled_plurals_is_stable() {
    let n = normalizer();
    let once = n.normalize("womens rights and childrens hospital datas");
    assert_eq!(once, vec!["woman", "right", "child", "hospital", "datum"]);
    assert_eq!(n.normalize(&once.join(" ")), once);
}

#[test]
fn normalization_emits_only_alphabetic_non_stopwords() {
    let lexicon = EnglishLexicon::new();
    let n = normalizer();
    for text in SAMPLES {
        for token in n.normalize(text) {
            assert!(!token.is_empty());
            assert!(
                token.chars().all(char::is_alphabetic),
                "{token:?} from {text:?} has non-alphabetic characters"
            );
            assert!(!lexicon.is_stopword(&token), "{token:?} is a stopword");
        }
    }
}

#[test]
fn normalization_preserves_order() {
    let tokens = normalizer().normalize("Farmers plant wheat before winter storms");
    assert_eq!(tokens, vec!["farmer", "plant", "wheat", "winter", "storm"]);
}

#[test]
fn normalization_is_deterministic_across_instances() {
    let a = normalizer();
    let b = normalizer();
    for text in SAMPLES {
        assert_eq!(a.normalize(text), b.normalize(text));
    }
}
