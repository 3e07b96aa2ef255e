// Corpus: raw speech records, their ingest, and the enriched result type.

pub mod document;
pub mod ingest;
pub mod traits;
