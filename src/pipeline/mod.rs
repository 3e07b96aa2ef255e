// Pipeline orchestration: sequences normalization, scoring and topic fitting.

pub mod analyze;
