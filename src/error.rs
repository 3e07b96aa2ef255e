// Pipeline errors: every fatal failure names the stage it came from.
//
// Per-document anomalies (empty or unusable raw text) never surface here.
// They degrade to empty tokens and a 0.0 score for that document only.

use std::fmt;

use thiserror::Error;

/// The pipeline stage a fatal error originated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Ingest,
    Configuration,
    TopicModel,
    Output,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Ingest => "ingest",
            Stage::Configuration => "configuration",
            Stage::TopicModel => "topic model",
            Stage::Output => "output",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("[ingest] corpus is empty: nothing to analyze")]
    EmptyCorpus,

    #[error("[ingest] row {row}: missing required field `{field}`")]
    MissingField { row: usize, field: String },

    #[error("[ingest] duplicate document id `{0}`")]
    DuplicateId(String),

    #[error("[configuration] {0}")]
    InvalidConfig(String),

    #[error("[configuration] lexicon: {0}")]
    Lexicon(String),

    #[error("[topic model] vocabulary is empty after frequency filtering: no topics derivable")]
    EmptyVocabulary,

    #[error(
        "[topic model] requested {requested} topics but only {available} non-empty documents are fittable"
    )]
    TooManyTopics { requested: usize, available: usize },

    #[error("[{stage}] I/O error: {source}")]
    Io {
        stage: Stage,
        #[source]
        source: std::io::Error,
    },

    #[error("[{stage}] CSV error: {source}")]
    Csv {
        stage: Stage,
        #[source]
        source: csv::Error,
    },
}

impl PipelineError {
    /// The stage this error should be reported against.
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::EmptyCorpus
            | PipelineError::MissingField { .. }
            | PipelineError::DuplicateId(_) => Stage::Ingest,
            PipelineError::InvalidConfig(_) | PipelineError::Lexicon(_) => Stage::Configuration,
            PipelineError::EmptyVocabulary | PipelineError::TooManyTopics { .. } => {
                Stage::TopicModel
            }
            PipelineError::Io { stage, .. } | PipelineError::Csv { stage, .. } => *stage,
        }
    }

    /// True for errors caused by caller-supplied settings or degenerate data
    /// that makes those settings unsatisfiable.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            PipelineError::InvalidConfig(_)
                | PipelineError::Lexicon(_)
                | PipelineError::EmptyVocabulary
                | PipelineError::TooManyTopics { .. }
        )
    }

    pub fn io(stage: Stage, source: std::io::Error) -> Self {
        PipelineError::Io { stage, source }
    }

    pub fn csv(stage: Stage, source: csv::Error) -> Self {
        PipelineError::Csv { stage, source }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_data_is_a_topic_model_configuration_error() {
        let err = PipelineError::TooManyTopics {
            requested: 5,
            available: 1,
        };
        assert_eq!(err.stage(), Stage::TopicModel);
        assert!(err.is_configuration());
        assert!(err.to_string().contains("topic model"));
    }

    #[test]
    fn ingest_errors_are_not_configuration_errors() {
        let err = PipelineError::MissingField {
            row: 3,
            field: "speech_text".to_string(),
        };
        assert_eq!(err.stage(), Stage::Ingest);
        assert!(!err.is_configuration());
        assert!(err.to_string().contains("speech_text"));
    }
}
