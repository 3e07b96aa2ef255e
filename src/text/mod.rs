// Text preparation: tokenization and normalization for term weighting.

pub mod normalize;
pub mod tokenize;
