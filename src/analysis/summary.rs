// Sentiment summaries across enriched documents.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::corpus::document::EnrichedDocument;

/// The most positive and most negative documents of a set.
#[derive(Debug, Clone, Copy)]
pub struct SentimentExtremes<'a> {
    pub most_positive: &'a EnrichedDocument,
    pub most_negative: &'a EnrichedDocument,
}

/// `None` for an empty set. On ties the earliest document wins.
pub fn sentiment_extremes(documents: &[EnrichedDocument]) -> Option<SentimentExtremes<'_>> {
    let first = documents.first()?;
    let mut extremes = SentimentExtremes {
        most_positive: first,
        most_negative: first,
    };
    for doc in &documents[1..] {
        if doc.sentiment_score() > extremes.most_positive.sentiment_score() {
            extremes.most_positive = doc;
        }
        if doc.sentiment_score() < extremes.most_negative.sentiment_score() {
            extremes.most_negative = doc;
        }
    }
    Some(extremes)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeakerSummary {
    pub speaker: String,
    pub speeches: usize,
    pub mean_sentiment: f64,
    pub min_sentiment: f64,
    pub max_sentiment: f64,
}

/// Per-speaker sentiment statistics, sorted by speaker name.
pub fn speaker_summaries(documents: &[EnrichedDocument]) -> Vec<SpeakerSummary> {
    let mut by_speaker: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for doc in documents {
        by_speaker
            .entry(doc.document.speaker.as_str())
            .or_default()
            .push(doc.sentiment_score());
    }

    by_speaker
        .into_iter()
        .map(|(speaker, scores)| SpeakerSummary {
            speaker: speaker.to_string(),
            speeches: scores.len(),
            mean_sentiment: scores.iter().sum::<f64>() / scores.len() as f64,
            min_sentiment: scores.iter().copied().fold(f64::INFINITY, f64::min),
            max_sentiment: scores.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::document::Document;
    use crate::sentiment::traits::SentimentResult;

    fn enriched(id: &str, speaker: &str, compound: f64) -> EnrichedDocument {
        EnrichedDocument {
            document: Document::new(id, speaker, ""),
            tokens: Vec::new(),
            sentiment: SentimentResult {
                compound,
                ..Default::default()
            },
            topic_distribution: Vec::new(),
            dominant_topic: None,
        }
    }

    #[test]
    fn extremes_prefer_first_on_ties() {
        let docs = vec![
            enriched("a", "Adams", 0.5),
            enriched("b", "Adams", 0.9),
            enriched("c", "Polk", 0.9),
            enriched("d", "Polk", -0.2),
        ];
        let extremes = sentiment_extremes(&docs).unwrap();
        assert_eq!(extremes.most_positive.document.id, "b");
        assert_eq!(extremes.most_negative.document.id, "d");
        assert!(sentiment_extremes(&[]).is_none());
    }

    #[test]
    fn summaries_group_by_speaker() {
        let docs = vec![
            enriched("1", "Polk", 0.2),
            enriched("2", "Adams", 0.4),
            enriched("3", "Polk", -0.6),
        ];
        let summaries = speaker_summaries(&docs);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].speaker, "Adams");
        let polk = &summaries[1];
        assert_eq!(polk.speeches, 2);
        assert!((polk.mean_sentiment + 0.2).abs() < 1e-12);
        assert_eq!(polk.min_sentiment, -0.6);
        assert_eq!(polk.max_sentiment, 0.2);
    }
}
