// Linguistic resources: stopwords, lemmas, and sentiment valences behind
// one swappable provider trait.

pub mod english;
pub mod lemma;
pub mod stoplist;
pub mod traits;
pub mod valence;
