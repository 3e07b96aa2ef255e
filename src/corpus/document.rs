// Documents and the corpus they form.
//
// A Document is the raw record handed over by ingest. The pipeline never
// rewrites it; derived values live on EnrichedDocument alongside a copy.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};
use crate::sentiment::traits::SentimentResult;

/// Date formats seen in speech archives, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y", "%m/%d/%Y"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub speaker: String,
    /// Parsed date, if the source text could be understood.
    pub date: Option<NaiveDate>,
    /// The date exactly as supplied.
    pub date_text: String,
    pub url: Option<String>,
    pub raw_text: String,
}

impl Document {
    pub fn new(
        id: impl Into<String>,
        speaker: impl Into<String>,
        raw_text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            speaker: speaker.into(),
            date: None,
            date_text: String::new(),
            url: None,
            raw_text: raw_text.into(),
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date_text = date.format("%Y-%m-%d").to_string();
        self.date = Some(date);
        self
    }

    /// Keep the supplied text and parse it if possible.
    pub fn with_date_text(mut self, text: impl Into<String>) -> Self {
        self.date_text = text.into();
        self.date = parse_date(&self.date_text);
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.url = (!url.trim().is_empty()).then_some(url);
        self
    }

    /// ISO date when parsed, otherwise the text as supplied.
    pub fn date_label(&self) -> String {
        match self.date {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => self.date_text.clone(),
        }
    }
}

/// Parse a speech date. Timestamps (RFC 3339 or `YYYY-MM-DD hh:mm:ss`)
/// keep only their date.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp.date_naive());
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }
    text.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// Documents in chronological order with unique ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Check id uniqueness and sort chronologically. The sort is stable and
    /// undated documents go last, in their original order.
    pub fn new(mut documents: Vec<Document>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(documents.len());
        for doc in &documents {
            if !seen.insert(doc.id.as_str()) {
                return Err(PipelineError::DuplicateId(doc.id.clone()));
            }
        }
        documents.sort_by_key(|doc| (doc.date.is_none(), doc.date));
        Ok(Self { documents })
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    pub fn raw_texts(&self) -> Vec<&str> {
        self.documents.iter().map(|doc| doc.raw_text.as_str()).collect()
    }

    /// Distinct speakers, sorted.
    pub fn speakers(&self) -> Vec<&str> {
        let mut speakers: Vec<&str> = self.documents.iter().map(|d| d.speaker.as_str()).collect();
        speakers.sort_unstable();
        speakers.dedup();
        speakers
    }
}

/// A document with everything the pipeline derived for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedDocument {
    pub document: Document,
    /// Normalized tokens; empty for documents with no usable text.
    pub tokens: Vec<String>,
    pub sentiment: SentimentResult,
    /// One weight per topic, summing to 1.
    pub topic_distribution: Vec<f64>,
    /// `None` when the document had no vocabulary terms to fit on.
    pub dominant_topic: Option<usize>,
}

impl EnrichedDocument {
    /// Tokens rejoined with single spaces.
    pub fn cleaned_speech(&self) -> String {
        self.tokens.join(" ")
    }

    pub fn sentiment_score(&self) -> f64 {
        self.sentiment.compound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_archive_date_formats() {
        assert_eq!(parse_date("1790-01-08"), Some(ymd(1790, 1, 8)));
        assert_eq!(parse_date("January 8, 1790"), Some(ymd(1790, 1, 8)));
        assert_eq!(parse_date("1790-01-08 00:00:00"), Some(ymd(1790, 1, 8)));
        assert_eq!(parse_date("2024-03-07T21:00:00-05:00"), Some(ymd(2024, 3, 7)));
        assert_eq!(parse_date("Unknown"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn corpus_sorts_chronologically_with_undated_last() {
        let corpus = Corpus::new(vec![
            Document::new("c", "Adams", "text").with_date_text("Unknown"),
            Document::new("b", "Adams", "text").with_date(ymd(1797, 11, 22)),
            Document::new("a", "Washington", "text").with_date(ymd(1790, 1, 8)),
        ])
        .unwrap();
        let ids: Vec<&str> = corpus.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(corpus.speakers(), vec!["Adams", "Washington"]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Corpus::new(vec![
            Document::new("1", "Adams", "one"),
            Document::new("1", "Adams", "two"),
        ])
        .unwrap_err();
        assert!(matches!(err, PipelineError::DuplicateId(id) if id == "1"));
    }

    #[test]
    fn empty_corpus_is_legal() {
        let corpus = Corpus::new(Vec::new()).unwrap();
        assert!(corpus.is_empty());
    }

    #[test]
    fn date_label_falls_back_to_text() {
        let doc = Document::new("1", "Lincoln", "").with_date_text("Winter 1862");
        assert_eq!(doc.date_label(), "Winter 1862");
        let doc = Document::new("2", "Lincoln", "").with_date(ymd(1862, 12, 1));
        assert_eq!(doc.date_label(), "1862-12-01");
    }
}
