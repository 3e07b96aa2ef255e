// Rhetoric: sentiment and topic analysis for political speech corpora
//
// This is the library root. Each module corresponds to a stage or a shared
// resource of the analysis pipeline.

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod error;
pub mod lexicon;
pub mod output;
pub mod pipeline;
pub mod sentiment;
pub mod text;
pub mod topics;
