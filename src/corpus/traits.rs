// Corpus source trait: where documents come from.
//
// The pipeline only ever sees a Corpus. Anything that can produce one
// (a CSV export, a database query, an in-memory fixture) is a source.

use super::document::Corpus;
use crate::error::Result;

pub trait CorpusSource {
    /// Read every record and assemble a validated, chronologically sorted corpus.
    fn load(&self) -> Result<Corpus>;
}
