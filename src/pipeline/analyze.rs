// Analysis pipeline: corpus in, enriched documents and topic report out.
//
// Stage 1 is per-document and embarrassingly parallel: normalize the raw
// text and score its sentiment. Results are collected in corpus order, so
// each one stays attached to its document. Stage 2 is corpus-wide: fit the
// vocabulary, weight every document, fit the topic model. It either runs to
// completion or fails as a unit.
//
// Documents with no usable text are not errors. They keep empty tokens, a
// 0.0 sentiment score and a uniform topic distribution.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::{info, warn};

use crate::config::AnalysisConfig;
use crate::corpus::document::{Corpus, Document, EnrichedDocument};
use crate::error::{PipelineError, Result};
use crate::lexicon::traits::LexiconProvider;
use crate::sentiment::lexical::LexiconSentimentScorer;
use crate::sentiment::traits::{SentimentResult, SentimentScorer};
use crate::text::normalize::Normalizer;
use crate::topics::lda::{FitOutcome, TopicModel, TopicModelParams};
use crate::topics::report::TopicReport;
use crate::topics::vocabulary::{Vocabulary, VocabularyBuilder};
use crate::topics::weighting::TermWeighter;

/// Everything one run derives from a corpus.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Enriched documents, in corpus order.
    pub documents: Vec<EnrichedDocument>,
    pub vocabulary: Vocabulary,
    pub model: TopicModel,
    pub report: TopicReport,
}

impl PipelineOutput {
    pub fn outcome(&self) -> FitOutcome {
        self.model.outcome()
    }
}

/// A configured pipeline. The lexicon and scorer are shared, read-only
/// resources built once and reused for every document.
pub struct Pipeline {
    config: AnalysisConfig,
    lexicon: Arc<dyn LexiconProvider>,
    normalizer: Normalizer,
    scorer: Arc<dyn SentimentScorer>,
}

impl Pipeline {
    /// Validate the configuration before any work starts.
    pub fn new(config: AnalysisConfig, lexicon: Arc<dyn LexiconProvider>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            normalizer: Normalizer::new(Arc::clone(&lexicon)),
            scorer: Arc::new(LexiconSentimentScorer::new(Arc::clone(&lexicon))),
            lexicon,
            config,
        })
    }

    /// Replace the default lexicon scorer.
    pub fn with_scorer(mut self, scorer: Arc<dyn SentimentScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn scorer(&self) -> &dyn SentimentScorer {
        self.scorer.as_ref()
    }

    /// Normalize and score one document. Sentiment always sees the raw text.
    pub fn analyze_document(&self, document: &Document) -> (Vec<String>, SentimentResult) {
        let tokens = self.normalizer.normalize(&document.raw_text);
        let sentiment = self.scorer.polarity_scores(&document.raw_text);
        (tokens, sentiment)
    }

    /// Stage 1 over the whole corpus. Topic fields are left empty.
    pub fn prepare(&self, corpus: &Corpus) -> Vec<EnrichedDocument> {
        let prepared: Vec<EnrichedDocument> = corpus
            .documents()
            .par_iter()
            .map(|document| {
                let (tokens, sentiment) = self.analyze_document(document);
                EnrichedDocument {
                    document: document.clone(),
                    tokens,
                    sentiment,
                    topic_distribution: Vec::new(),
                    dominant_topic: None,
                }
            })
            .collect();

        let empty = prepared.iter().filter(|d| d.tokens.is_empty()).count();
        if empty > 0 {
            warn!(
                documents = empty,
                "Documents with no usable tokens are excluded from topic fitting"
            );
        }
        info!(documents = prepared.len(), "Normalized and scored corpus");

        prepared
    }

    /// Run both stages. An empty corpus is an input error; an empty
    /// vocabulary or too few fittable documents is a configuration error.
    pub fn run(&self, corpus: &Corpus) -> Result<PipelineOutput> {
        if corpus.is_empty() {
            return Err(PipelineError::EmptyCorpus);
        }

        let mut documents = self.prepare(corpus);
        let tokens: Vec<&[String]> = documents.iter().map(|d| d.tokens.as_slice()).collect();

        let vocabulary = VocabularyBuilder::from_config(&self.config)
            .with_stopwords(self.lexicon.vocabulary_stopwords())
            .fit(&tokens);
        info!(
            terms = vocabulary.len(),
            fitted_documents = vocabulary.corpus_size(),
            "Built vocabulary"
        );

        let vectors = TermWeighter::new(&vocabulary).transform_all(&tokens);
        let model = TopicModel::fit(
            &vectors,
            &vocabulary,
            &TopicModelParams::from_config(&self.config),
        )?;
        let report = TopicReport::from_model(&model, self.config.words_per_topic);

        for (i, document) in documents.iter_mut().enumerate() {
            document.topic_distribution = model.doc_topic()[i].clone();
            document.dominant_topic = model.dominant_topic(i);
        }

        Ok(PipelineOutput {
            documents,
            vocabulary,
            model,
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::english::EnglishLexicon;

    fn pipeline(config: AnalysisConfig) -> Result<Pipeline> {
        Pipeline::new(config, Arc::new(EnglishLexicon::new()))
    }

    #[test]
    fn invalid_config_fails_before_any_work() {
        let config = AnalysisConfig {
            num_topics: 0,
            ..Default::default()
        };
        let err = pipeline(config).err().map(|e| e.is_configuration());
        assert_eq!(err, Some(true));
    }

    #[test]
    fn empty_corpus_is_an_input_error() {
        let p = pipeline(AnalysisConfig::default()).unwrap();
        let err = p.run(&Corpus::default()).unwrap_err();
        assert!(matches!(err, PipelineError::EmptyCorpus));
    }

    #[test]
    fn filler_words_stay_out_of_the_vocabulary() {
        let p = pipeline(AnalysisConfig {
            num_topics: 1,
            max_document_frequency_ratio: 1.0,
            min_document_frequency_count: 1,
            ..Default::default()
        })
        .unwrap();
        let corpus = Corpus::new(vec![
            Document::new("1", "A", "We also would defend the harbor."),
            Document::new("2", "B", "Farmers must also plant wheat."),
        ])
        .unwrap();
        let output = p.run(&corpus).unwrap();
        for word in ["also", "would", "must"] {
            assert_eq!(output.vocabulary.index_of(word), None, "{word} kept");
        }
        assert!(output.vocabulary.index_of("harbor").is_some());
        assert!(output.vocabulary.index_of("wheat").is_some());
    }

    #[test]
    fn sentiment_uses_raw_text() {
        let p = pipeline(AnalysisConfig::default()).unwrap();
        let doc = Document::new("1", "Adams", "We are NOT happy!!");
        let (tokens, sentiment) = p.analyze_document(&doc);
        assert_eq!(tokens, vec!["happy"]);
        assert!(sentiment.compound < 0.0);
    }
}
