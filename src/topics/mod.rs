// Topic discovery: vocabulary fitting, TF-IDF weighting, LDA, reporting.

pub mod lda;
pub mod report;
pub mod vocabulary;
pub mod weighting;
