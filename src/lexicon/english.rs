// English lexicon provider: the default resource set.
//
// Stopwords come from the NLTK English list shipped by the `stop-words`
// crate; the vocabulary stoplist is the broader built-in list. Lemmas come from the rule-based noun lemmatizer. Valences,
// boosters and negators come from the built-in tables, optionally overlaid
// with a VADER-format lexicon file.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use stop_words::{get, LANGUAGE};
use tracing::debug;

use super::lemma::lemmatize_noun;
use super::stoplist::VOCABULARY_STOPWORDS;
use super::traits::LexiconProvider;
use super::valence::{BOOSTERS, NEGATIONS, VALENCES};
use crate::error::{PipelineError, Result, Stage};

/// Immutable English resources. Construct once per process and share it
/// behind an `Arc<dyn LexiconProvider>`.
#[derive(Debug, Clone)]
pub struct EnglishLexicon {
    stopwords: HashSet<String>,
    valences: HashMap<String, f64>,
    boosters: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Default for EnglishLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl EnglishLexicon {
    pub fn new() -> Self {
        let stopwords = get(LANGUAGE::English)
            .iter()
            .map(|w| w.to_string())
            .collect();
        let valences = VALENCES
            .iter()
            .map(|(word, v)| (word.to_string(), *v))
            .collect();
        let boosters = BOOSTERS
            .iter()
            .map(|(word, b)| (word.to_string(), *b))
            .collect();
        let negations = NEGATIONS.iter().map(|w| w.to_string()).collect();

        Self {
            stopwords,
            valences,
            boosters,
            negations,
        }
    }

    /// Overlay valences from a VADER-format lexicon file.
    ///
    /// Each non-empty line is `token<TAB>mean[<TAB>...]`; extra columns
    /// (standard deviation, raw ratings) are ignored. File entries replace
    /// built-in ones.
    pub fn with_valence_file(self, path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).map_err(|e| PipelineError::io(Stage::Configuration, e))?;
        let lexicon = self.with_valence_text(&contents)?;
        debug!(
            path = %path.display(),
            entries = lexicon.valences.len(),
            "Loaded valence lexicon overlay"
        );
        Ok(lexicon)
    }

    /// Overlay valences from VADER-format text already in memory.
    pub fn with_valence_text(mut self, contents: &str) -> Result<Self> {
        for (line_no, line) in contents.lines().enumerate() {
            let line = line.trim_end();
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split('\t');
            let token = fields.next().unwrap_or_default().trim();
            let valence = fields
                .next()
                .and_then(|raw| raw.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    PipelineError::Lexicon(format!(
                        "line {}: expected `token<TAB>valence`, got {line:?}",
                        line_no + 1
                    ))
                })?;
            if token.is_empty() {
                return Err(PipelineError::Lexicon(format!(
                    "line {}: empty token",
                    line_no + 1
                )));
            }
            self.valences.insert(token.to_lowercase(), valence);
        }
        Ok(self)
    }

    /// Number of terms carrying a valence.
    pub fn valence_count(&self) -> usize {
        self.valences.len()
    }
}

impl LexiconProvider for EnglishLexicon {
    fn lemma(&self, term: &str) -> String {
        lemmatize_noun(term)
    }

    fn is_stopword(&self, term: &str) -> bool {
        self.stopwords.contains(term)
    }

    fn polarity(&self, term: &str) -> f64 {
        self.valences.get(term).copied().unwrap_or(0.0)
    }

    fn booster(&self, term: &str) -> f64 {
        self.boosters.get(term).copied().unwrap_or(0.0)
    }

    fn is_negation(&self, term: &str) -> bool {
        self.negations.contains(term) || term.ends_with("n't")
    }

    fn vocabulary_stopwords(&self) -> Vec<String> {
        VOCABULARY_STOPWORDS.iter().map(|w| w.to_string()).collect()
    }
}
