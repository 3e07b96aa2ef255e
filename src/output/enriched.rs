// Enriched CSV: the original fields plus the derived columns.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::corpus::document::EnrichedDocument;
use crate::error::{PipelineError, Result, Stage};

#[derive(Debug, Serialize)]
struct EnrichedRecord<'a> {
    id: &'a str,
    president: &'a str,
    date: String,
    url: &'a str,
    speech_text: &'a str,
    cleaned_speech: String,
    sentiment_score: f64,
    /// One-based, matching the "Topic N" numbering of the topic report.
    dominant_topic: Option<usize>,
}

impl<'a> From<&'a EnrichedDocument> for EnrichedRecord<'a> {
    fn from(doc: &'a EnrichedDocument) -> Self {
        Self {
            id: &doc.document.id,
            president: &doc.document.speaker,
            date: doc.document.date_label(),
            url: doc.document.url.as_deref().unwrap_or(""),
            speech_text: &doc.document.raw_text,
            cleaned_speech: doc.cleaned_speech(),
            sentiment_score: doc.sentiment_score(),
            dominant_topic: doc.dominant_topic.map(|t| t + 1),
        }
    }
}

/// Write one row per document to any writer, header included.
pub fn write_enriched<W: Write>(writer: W, documents: &[EnrichedDocument]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for doc in documents {
        csv.serialize(EnrichedRecord::from(doc))
            .map_err(|e| PipelineError::csv(Stage::Output, e))?;
    }
    csv.flush().map_err(|e| PipelineError::io(Stage::Output, e))
}

pub fn write_enriched_csv(path: &Path, documents: &[EnrichedDocument]) -> Result<()> {
    let file = File::create(path).map_err(|e| PipelineError::io(Stage::Output, e))?;
    write_enriched(file, documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::document::Document;
    use crate::sentiment::traits::SentimentResult;

    #[test]
    fn writes_derived_columns() {
        let doc = EnrichedDocument {
            document: Document::new("7", "Polk", "Texas, Oregon!").with_date_text("1845-12-02"),
            tokens: vec!["texas".into(), "oregon".into()],
            sentiment: SentimentResult {
                compound: 0.25,
                ..Default::default()
            },
            topic_distribution: vec![0.1, 0.9],
            dominant_topic: Some(1),
        };

        let mut buffer = Vec::new();
        write_enriched(&mut buffer, &[doc]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("id,president,date,url,speech_text,cleaned_speech,sentiment_score,dominant_topic")
        );
        assert_eq!(
            lines.next(),
            Some("7,Polk,1845-12-02,,\"Texas, Oregon!\",texas oregon,0.25,2")
        );
    }
}
