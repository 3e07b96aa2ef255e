// Keyword tracking over time.

use chrono::NaiveDate;
use serde::Serialize;

use crate::corpus::document::Corpus;

/// Case-insensitive, non-overlapping substring count. A blank keyword
/// never matches.
pub fn count_keyword(text: &str, keyword: &str) -> usize {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return 0;
    }
    text.to_lowercase().matches(keyword.as_str()).count()
}

/// One speech's keyword usage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordPoint {
    pub id: String,
    pub speaker: String,
    pub date: Option<NaiveDate>,
    pub date_label: String,
    pub count: usize,
}

/// Keyword counts for every speech, in corpus (chronological) order,
/// optionally restricted to one speaker.
pub fn keyword_timeline(
    corpus: &Corpus,
    keyword: &str,
    speaker: Option<&str>,
) -> Vec<KeywordPoint> {
    corpus
        .iter()
        .filter(|doc| speaker.map_or(true, |s| doc.speaker == s))
        .map(|doc| KeywordPoint {
            id: doc.id.clone(),
            speaker: doc.speaker.clone(),
            date: doc.date,
            date_label: doc.date_label(),
            count: count_keyword(&doc.raw_text, keyword),
        })
        .collect()
}
