use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::error::PipelineError;

/// Tunable options for one analysis run.
///
/// Built once, validated before any fitting starts. Every stage reads
/// from the same validated copy.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Terms in more than this fraction of documents are dropped (too common).
    pub max_document_frequency_ratio: f64,
    /// Terms in fewer than this many documents are dropped (too rare).
    pub min_document_frequency_count: usize,
    /// Number of latent topics to fit. Caller-chosen, never discovered.
    pub num_topics: usize,
    /// How many top terms to report per topic.
    pub words_per_topic: usize,
    /// Seed for the topic model's random initialization.
    pub random_seed: u64,
    /// Upper bound on variational EM passes over the corpus.
    pub max_iterations: usize,
    /// Stop early once the mean absolute change of the topic-term
    /// distribution falls below this value.
    pub convergence_tolerance: f64,
    /// Dirichlet prior on document-topic proportions (defaults to 1/num_topics).
    pub doc_topic_prior: Option<f64>,
    /// Dirichlet prior on topic-term proportions (defaults to 1/num_topics).
    pub topic_word_prior: Option<f64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_document_frequency_ratio: 0.9,
            min_document_frequency_count: 5,
            num_topics: 10,
            words_per_topic: 10,
            random_seed: 42,
            max_iterations: 10,
            convergence_tolerance: 1e-4,
            doc_topic_prior: None,
            topic_word_prior: None,
        }
    }
}

impl AnalysisConfig {
    /// Reject settings that could never produce a meaningful fit.
    pub fn validate(&self) -> std::result::Result<(), PipelineError> {
        let ratio = self.max_document_frequency_ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(PipelineError::InvalidConfig(format!(
                "max_document_frequency_ratio must be in (0, 1], got {ratio}"
            )));
        }
        if self.num_topics == 0 {
            return Err(PipelineError::InvalidConfig(
                "num_topics must be a positive integer".to_string(),
            ));
        }
        if self.words_per_topic == 0 {
            return Err(PipelineError::InvalidConfig(
                "words_per_topic must be a positive integer".to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(PipelineError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if !(self.convergence_tolerance >= 0.0) {
            return Err(PipelineError::InvalidConfig(format!(
                "convergence_tolerance must be non-negative, got {}",
                self.convergence_tolerance
            )));
        }
        for (name, prior) in [
            ("doc_topic_prior", self.doc_topic_prior),
            ("topic_word_prior", self.topic_word_prior),
        ] {
            if let Some(p) = prior {
                if !(p > 0.0 && p.is_finite()) {
                    return Err(PipelineError::InvalidConfig(format!(
                        "{name} must be positive, got {p}"
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn doc_topic_prior(&self) -> f64 {
        self.doc_topic_prior
            .unwrap_or(1.0 / self.num_topics.max(1) as f64)
    }

    pub fn topic_word_prior(&self) -> f64 {
        self.topic_word_prior
            .unwrap_or(1.0 / self.num_topics.max(1) as f64)
    }
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy; CLI flags override
/// whatever is set here.
pub struct Config {
    /// Where the speech corpus CSV lives.
    pub corpus_path: PathBuf,
    /// Directory for the enriched CSV and topic report.
    pub output_dir: PathBuf,
    /// Optional VADER-format lexicon overlaying the built-in valences.
    pub lexicon_path: Option<PathBuf>,
    pub analysis: AnalysisConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every value has a default; a variable that is set but unparseable
    /// is an error naming the variable.
    pub fn load() -> Result<Self> {
        let defaults = AnalysisConfig::default();

        let analysis = AnalysisConfig {
            max_document_frequency_ratio: env_or(
                "RHETORIC_MAX_DF",
                defaults.max_document_frequency_ratio,
            )?,
            min_document_frequency_count: env_or(
                "RHETORIC_MIN_DF",
                defaults.min_document_frequency_count,
            )?,
            num_topics: env_or("RHETORIC_NUM_TOPICS", defaults.num_topics)?,
            words_per_topic: env_or("RHETORIC_WORDS_PER_TOPIC", defaults.words_per_topic)?,
            random_seed: env_or("RHETORIC_SEED", defaults.random_seed)?,
            max_iterations: env_or("RHETORIC_MAX_ITERATIONS", defaults.max_iterations)?,
            ..defaults
        };

        Ok(Self {
            corpus_path: env::var("RHETORIC_CORPUS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./speeches.csv")),
            output_dir: env::var("RHETORIC_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./output")),
            lexicon_path: env::var("RHETORIC_LEXICON_PATH").ok().map(PathBuf::from),
            analysis,
        })
    }

    /// Check that the corpus file exists before doing any work.
    pub fn require_corpus(&self) -> Result<()> {
        if !self.corpus_path.exists() {
            anyhow::bail!(
                "Corpus not found at {}\n\
                 Set RHETORIC_CORPUS_PATH in your .env file or pass --corpus.",
                self.corpus_path.display()
            );
        }
        Ok(())
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(AnalysisConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_topics_rejected() {
        let config = AnalysisConfig {
            num_topics: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn ratio_out_of_range_rejected() {
        for ratio in [0.0, -0.5, 1.5, f64::NAN] {
            let config = AnalysisConfig {
                max_document_frequency_ratio: ratio,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "ratio {ratio} should be rejected");
        }
    }

    #[test]
    fn priors_default_to_inverse_topic_count() {
        let config = AnalysisConfig {
            num_topics: 4,
            ..Default::default()
        };
        assert!((config.doc_topic_prior() - 0.25).abs() < 1e-12);
        assert!((config.topic_word_prior() - 0.25).abs() < 1e-12);
    }
}
