// CSV ingest: speech archive exports to a Corpus.
//
// Columns are matched by header name: `speech_text` (or `raw_text`) is
// required; `id`, `president` (or `speaker`), `date` and `url` are optional.
// Archive exports are often written with a UTF-8 BOM, which is ignored.
//
// Transcript cleaning is a regular-expression heuristic. It can drop a
// legitimate sentence that looks like a speaker attribution and can leave
// fragments of unusual annotations behind. It only runs when asked for.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use regex_lite::Regex;
use tracing::{debug, info, warn};

use super::document::{Corpus, Document};
use super::traits::CorpusSource;
use crate::error::{PipelineError, Result, Stage};

const TEXT_COLUMNS: &[&str] = &["speech_text", "raw_text"];
const SPEAKER_COLUMNS: &[&str] = &["president", "speaker"];
const UNKNOWN_SPEAKER: &str = "Unknown";
const TITLE_SUFFIX: &str = "President of the United States";

/// Reads a corpus from a CSV file on disk.
pub struct CsvCorpusSource {
    path: PathBuf,
    clean_transcripts: bool,
}

impl CsvCorpusSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            clean_transcripts: false,
        }
    }

    /// Strip stage directions and speaker attributions from each speech.
    pub fn with_transcript_cleaning(mut self, enabled: bool) -> Self {
        self.clean_transcripts = enabled;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CorpusSource for CsvCorpusSource {
    fn load(&self) -> Result<Corpus> {
        let file = File::open(&self.path).map_err(|e| PipelineError::io(Stage::Ingest, e))?;
        let cleaner = if self.clean_transcripts {
            Some(TranscriptCleaner::new()?)
        } else {
            None
        };
        let corpus = read_corpus(file, cleaner.as_ref())?;
        info!(
            path = %self.path.display(),
            documents = corpus.len(),
            cleaned = self.clean_transcripts,
            "Loaded corpus"
        );
        Ok(corpus)
    }
}

/// Column positions resolved from the header row.
struct Columns {
    text: usize,
    id: Option<usize>,
    speaker: Option<usize>,
    date: Option<usize>,
    url: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let names: Vec<String> = headers
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_lowercase())
            .collect();
        let find = |candidates: &[&str]| {
            candidates
                .iter()
                .find_map(|c| names.iter().position(|name| name == c))
        };

        let text = find(TEXT_COLUMNS).ok_or_else(|| PipelineError::MissingField {
            row: 0,
            field: TEXT_COLUMNS[0].to_string(),
        })?;

        Ok(Self {
            text,
            id: find(&["id"]),
            speaker: find(SPEAKER_COLUMNS),
            date: find(&["date"]),
            url: find(&["url"]),
        })
    }
}

/// Read a corpus from any CSV stream. Rows are numbered from 1 (the first
/// data row); a missing or blank id falls back to that number.
pub fn read_corpus<R: Read>(reader: R, cleaner: Option<&TranscriptCleaner>) -> Result<Corpus> {
    let mut csv = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = csv
        .headers()
        .map_err(|e| PipelineError::csv(Stage::Ingest, e))?
        .clone();
    let columns = Columns::resolve(&headers)?;

    let mut documents = Vec::new();
    for (i, record) in csv.records().enumerate() {
        let record = record.map_err(|e| PipelineError::csv(Stage::Ingest, e))?;
        let row = i + 1;

        let field = |index: Option<usize>| index.and_then(|i| record.get(i)).map(str::trim);

        let raw_text = record
            .get(columns.text)
            .ok_or_else(|| PipelineError::MissingField {
                row,
                field: TEXT_COLUMNS[0].to_string(),
            })?;
        let raw_text = match cleaner {
            Some(cleaner) => cleaner.clean(raw_text),
            None => raw_text.to_string(),
        };
        if raw_text.trim().is_empty() {
            debug!(row, "Document has no text");
        }

        let id = field(columns.id)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| row.to_string());
        let speaker = field(columns.speaker)
            .map(clean_speaker_name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_SPEAKER.to_string());

        let mut doc = Document::new(id, speaker, raw_text);
        if let Some(date) = field(columns.date) {
            doc = doc.with_date_text(date);
            if doc.date.is_none() && !date.is_empty() {
                warn!(row, date, "Unparseable date, sorting document last");
            }
        }
        if let Some(url) = field(columns.url) {
            doc = doc.with_url(url);
        }
        documents.push(doc);
    }

    if documents.is_empty() {
        return Err(PipelineError::EmptyCorpus);
    }
    Corpus::new(documents)
}

/// Drop a trailing "Nth President of the United States" title from a name.
pub fn clean_speaker_name(name: &str) -> String {
    let head = match name.find(TITLE_SUFFIX) {
        Some(pos) => {
            let before = &name[..pos];
            match before.find(|c: char| c.is_ascii_digit()) {
                Some(digit) => &name[..digit],
                None => name,
            }
        }
        None => name,
    };
    head.trim().to_string()
}

/// Strips annotations and attribution lines from archive transcripts.
pub struct TranscriptCleaner {
    annotations: Regex,
    attributions: Regex,
    president_prefix: Regex,
    blank_lines: Regex,
}

impl TranscriptCleaner {
    pub fn new() -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| {
                PipelineError::InvalidConfig(format!("transcript pattern `{pattern}`: {e}"))
            })
        };
        Ok(Self {
            // [Applause], [Laughter], possibly spanning lines
            annotations: compile(r"(?s)\[.*?\]")?,
            // Interjections from anyone other than the speaker of record
            attributions: compile(
                r"(?m)^[ \t]*(?:Audience members?|The Speaker|Speaker|(?:Rep\.|Representative|Senator)[ \t]+[A-Z][^.\n]*)\.[^\n]*\n?",
            )?,
            president_prefix: compile(r"(?m)^[ \t]*The President\.[ \t]*")?,
            blank_lines: compile(r"\n\s*\n")?,
        })
    }

    pub fn clean(&self, text: &str) -> String {
        let text = self.annotations.replace_all(text, "");
        let text = self.attributions.replace_all(&text, "");
        let text = self.president_prefix.replace_all(&text, "");
        let text = self.blank_lines.replace_all(&text, "\n");
        text.trim().to_string()
    }
}
