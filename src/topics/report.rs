// Topic report: top terms per topic, ready for display.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lda::TopicModel;

/// One topic's top terms and its share of the corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicSummary {
    /// Zero-based topic index. Not an importance rank.
    pub index: usize,
    pub terms: Vec<String>,
    /// Mean weight of this topic across fitted documents.
    pub prevalence: f64,
}

impl TopicSummary {
    /// One-based number used in display text.
    pub fn display_number(&self) -> usize {
        self.index + 1
    }
}

impl fmt::Display for TopicSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Topic {}: {}", self.display_number(), self.terms.join(", "))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicReport {
    pub topics: Vec<TopicSummary>,
}

impl TopicReport {
    /// Collect the top `words_per_topic` terms of every topic, in index order.
    pub fn from_model(model: &TopicModel, words_per_topic: usize) -> Self {
        let prevalence = model.topic_prevalence();
        let topics = (0..model.num_topics())
            .map(|index| TopicSummary {
                index,
                terms: model.top_terms(index, words_per_topic),
                prevalence: prevalence.get(index).copied().unwrap_or(0.0),
            })
            .collect();
        Self { topics }
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Display lines, one per topic.
    pub fn lines(&self) -> Vec<String> {
        self.topics.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for TopicReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for topic in &self.topics {
            writeln!(f, "{topic}")?;
        }
        Ok(())
    }
}
