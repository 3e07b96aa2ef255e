// Corpus-level analysis helpers built on pipeline output.

pub mod keyword;
pub mod summary;
