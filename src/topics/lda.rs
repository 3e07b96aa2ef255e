// Latent Dirichlet Allocation fitted by batch variational Bayes.
//
// The optimizer is an explicit state object (the variational topic-term
// parameters) advanced through a bounded loop. Each step runs an E-step
// over every fittable document in parallel, reduces the sufficient
// statistics sequentially in document order, then runs the M-step. The
// loop stops when the normalized topic-term matrix stops moving or the
// iteration budget runs out; either way the current state is returned and
// the outcome records which one happened.
//
// Inputs are the unit-length weighted vectors, so "counts" are fractional.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Gamma};
use rayon::prelude::*;
use statrs::function::gamma::digamma;
use tracing::{debug, info};

use super::vocabulary::Vocabulary;
use super::weighting::WeightedVector;
use crate::config::AnalysisConfig;
use crate::error::{PipelineError, Result};

/// Shape and scale of the Gamma draw that initializes the topic-term
/// parameters (mean 1, low variance).
const INIT_SHAPE: f64 = 100.0;
const INIT_SCALE: f64 = 0.01;
/// Per-document E-step budget and stopping threshold.
const MAX_DOC_ITERATIONS: usize = 100;
const DOC_MEAN_CHANGE_TOL: f64 = 1e-3;

/// Settings for one fit.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicModelParams {
    pub num_topics: usize,
    pub seed: u64,
    pub max_iterations: usize,
    pub convergence_tolerance: f64,
    /// Dirichlet prior on document-topic proportions (alpha).
    pub doc_topic_prior: f64,
    /// Dirichlet prior on topic-term proportions (eta).
    pub topic_word_prior: f64,
}

impl TopicModelParams {
    /// Defaults for everything except the topic count and seed.
    pub fn new(num_topics: usize, seed: u64) -> Self {
        Self::from_config(&AnalysisConfig {
            num_topics,
            random_seed: seed,
            ..Default::default()
        })
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            num_topics: config.num_topics,
            seed: config.random_seed,
            max_iterations: config.max_iterations,
            convergence_tolerance: config.convergence_tolerance,
            doc_topic_prior: config.doc_topic_prior(),
            topic_word_prior: config.topic_word_prior(),
        }
    }
}

/// How the bounded fitting loop ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOutcome {
    /// Full E/M passes actually run.
    pub iterations: usize,
    /// True if the change fell below tolerance before the budget ran out.
    pub converged: bool,
    /// Mean absolute change of the topic-term distribution on the last pass.
    pub final_change: f64,
}

/// A fitted topic model. Rebuilt on every fit, never updated in place.
#[derive(Debug, Clone)]
pub struct TopicModel {
    terms: Vec<String>,
    /// num_topics × vocabulary size, rows sum to 1.
    topic_term: Vec<Vec<f64>>,
    /// documents × num_topics, rows sum to 1.
    doc_topic: Vec<Vec<f64>>,
    /// Whether each document had any vocabulary terms to fit on.
    fitted: Vec<bool>,
    outcome: FitOutcome,
}

impl TopicModel {
    /// Fit `params.num_topics` topics over one weighted vector per document.
    ///
    /// Empty vectors are left out of fitting and receive a uniform topic
    /// distribution. Fails with a configuration error when the vocabulary is
    /// empty or there are fewer fittable documents than topics.
    pub fn fit(
        vectors: &[WeightedVector],
        vocabulary: &Vocabulary,
        params: &TopicModelParams,
    ) -> Result<Self> {
        if vocabulary.is_empty() {
            return Err(PipelineError::EmptyVocabulary);
        }
        if params.num_topics == 0 {
            return Err(PipelineError::InvalidConfig(
                "num_topics must be a positive integer".to_string(),
            ));
        }

        let fittable: Vec<&WeightedVector> = vectors.iter().filter(|v| !v.is_empty()).collect();
        if params.num_topics > fittable.len() {
            return Err(PipelineError::TooManyTopics {
                requested: params.num_topics,
                available: fittable.len(),
            });
        }

        let mut state = VariationalState::initialize(params, vocabulary.len())?;
        let mut previous = state.topic_term_distribution();
        let mut outcome = FitOutcome {
            iterations: 0,
            converged: false,
            final_change: f64::INFINITY,
        };

        while outcome.iterations < params.max_iterations {
            state.step(&fittable, params);
            outcome.iterations += 1;

            let current = state.topic_term_distribution();
            outcome.final_change = mean_absolute_change(&previous, &current);
            previous = current;

            debug!(
                iteration = outcome.iterations,
                change = outcome.final_change,
                "Variational EM step"
            );

            if outcome.final_change < params.convergence_tolerance {
                outcome.converged = true;
                break;
            }
        }

        let uniform = vec![1.0 / params.num_topics as f64; params.num_topics];
        let inferred: Vec<Vec<f64>> = vectors
            .par_iter()
            .map(|v| {
                if v.is_empty() {
                    uniform.clone()
                } else {
                    normalized(&state.infer(v, params.doc_topic_prior).gamma)
                }
            })
            .collect();

        info!(
            topics = params.num_topics,
            documents = fittable.len(),
            terms = vocabulary.len(),
            iterations = outcome.iterations,
            converged = outcome.converged,
            final_change = outcome.final_change,
            "Fitted topic model"
        );

        Ok(Self {
            terms: vocabulary.terms().to_vec(),
            topic_term: previous,
            doc_topic: inferred,
            fitted: vectors.iter().map(|v| !v.is_empty()).collect(),
            outcome,
        })
    }

    pub fn num_topics(&self) -> usize {
        self.topic_term.len()
    }

    pub fn outcome(&self) -> FitOutcome {
        self.outcome
    }

    /// Topic-term distribution, one row per topic.
    pub fn topic_term(&self) -> &[Vec<f64>] {
        &self.topic_term
    }

    /// Document-topic distribution, one row per input vector.
    pub fn doc_topic(&self) -> &[Vec<f64>] {
        &self.doc_topic
    }

    /// The `k` highest-weighted terms of a topic, ties broken by vocabulary
    /// index. Empty for an unknown topic.
    pub fn top_terms(&self, topic: usize, k: usize) -> Vec<String> {
        self.top_weighted_terms(topic, k)
            .into_iter()
            .map(|(term, _)| term)
            .collect()
    }

    pub fn top_weighted_terms(&self, topic: usize, k: usize) -> Vec<(String, f64)> {
        let Some(row) = self.topic_term.get(topic) else {
            return Vec::new();
        };
        let mut order: Vec<usize> = (0..row.len()).collect();
        order.sort_by(|&a, &b| row[b].total_cmp(&row[a]).then(a.cmp(&b)));
        order
            .into_iter()
            .take(k)
            .map(|i| (self.terms[i].clone(), row[i]))
            .collect()
    }

    /// Highest-weight topic of a document, `None` if the document had
    /// nothing to fit on.
    pub fn dominant_topic(&self, document: usize) -> Option<usize> {
        if !self.fitted.get(document).copied().unwrap_or(false) {
            return None;
        }
        let row = self.doc_topic.get(document)?;
        let mut best = 0;
        for (k, &weight) in row.iter().enumerate() {
            if weight > row[best] {
                best = k;
            }
        }
        Some(best)
    }

    /// Mean weight of each topic across fitted documents.
    pub fn topic_prevalence(&self) -> Vec<f64> {
        let mut prevalence = vec![0.0; self.num_topics()];
        let mut count = 0usize;
        for (row, _) in self.doc_topic.iter().zip(&self.fitted).filter(|(_, f)| **f) {
            for (total, weight) in prevalence.iter_mut().zip(row) {
                *total += weight;
            }
            count += 1;
        }
        if count > 0 {
            for total in &mut prevalence {
                *total /= count as f64;
            }
        }
        prevalence
    }
}

/// Variational parameters over topic-term weights (lambda) and the cached
/// exp(E[log beta]) derived from them.
struct VariationalState {
    lambda: Vec<Vec<f64>>,
    exp_elog_beta: Vec<Vec<f64>>,
}

/// E-step result for one document.
struct DocumentInference {
    gamma: Vec<f64>,
    /// num_topics × nnz contributions to the sufficient statistics, before
    /// scaling by exp(E[log beta]).
    sstats: Vec<Vec<f64>>,
}

impl VariationalState {
    fn initialize(params: &TopicModelParams, num_terms: usize) -> Result<Self> {
        let gamma = Gamma::new(INIT_SHAPE, INIT_SCALE)
            .map_err(|e| PipelineError::InvalidConfig(format!("topic initialization: {e}")))?;
        let mut rng = StdRng::seed_from_u64(params.seed);

        let lambda: Vec<Vec<f64>> = (0..params.num_topics)
            .map(|_| (0..num_terms).map(|_| gamma.sample(&mut rng)).collect())
            .collect();

        let mut state = Self {
            exp_elog_beta: Vec::new(),
            lambda,
        };
        state.refresh_expectations();
        Ok(state)
    }

    fn refresh_expectations(&mut self) {
        self.exp_elog_beta = self
            .lambda
            .iter()
            .map(|row| exp_dirichlet_expectation(row))
            .collect();
    }

    /// One E/M pass over all fittable documents.
    fn step(&mut self, documents: &[&WeightedVector], params: &TopicModelParams) {
        let inferences: Vec<DocumentInference> = documents
            .par_iter()
            .map(|doc| self.infer(doc, params.doc_topic_prior))
            .collect();

        let num_terms = self.lambda.first().map_or(0, Vec::len);
        let mut sstats = vec![vec![0.0; num_terms]; params.num_topics];
        for (doc, inference) in documents.iter().zip(&inferences) {
            for (k, row) in inference.sstats.iter().enumerate() {
                for (&(j, _), value) in doc.entries().iter().zip(row) {
                    sstats[k][j] += value;
                }
            }
        }

        for (k, row) in self.lambda.iter_mut().enumerate() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = params.topic_word_prior + sstats[k][j] * self.exp_elog_beta[k][j];
            }
        }
        self.refresh_expectations();
    }

    /// Fit one document's topic proportions against the current topics.
    fn infer(&self, document: &WeightedVector, alpha: f64) -> DocumentInference {
        let entries = document.entries();
        let num_topics = self.lambda.len();

        // Topic weights restricted to this document's terms.
        let beta: Vec<Vec<f64>> = self
            .exp_elog_beta
            .iter()
            .map(|row| entries.iter().map(|&(j, _)| row[j]).collect())
            .collect();

        let mut gamma = vec![1.0; num_topics];
        let mut exp_elog_theta = exp_dirichlet_expectation(&gamma);
        let mut phinorm = phi_normalizer(&exp_elog_theta, &beta);

        for _ in 0..MAX_DOC_ITERATIONS {
            let last = gamma.clone();
            for k in 0..num_topics {
                let expected: f64 = entries
                    .iter()
                    .zip(&phinorm)
                    .zip(&beta[k])
                    .map(|((&(_, w), norm), b)| w / norm * b)
                    .sum();
                gamma[k] = alpha + exp_elog_theta[k] * expected;
            }
            exp_elog_theta = exp_dirichlet_expectation(&gamma);
            phinorm = phi_normalizer(&exp_elog_theta, &beta);

            let change = gamma
                .iter()
                .zip(&last)
                .map(|(a, b)| (a - b).abs())
                .sum::<f64>()
                / num_topics as f64;
            if change < DOC_MEAN_CHANGE_TOL {
                break;
            }
        }

        let sstats = exp_elog_theta
            .iter()
            .map(|theta| {
                entries
                    .iter()
                    .zip(&phinorm)
                    .map(|(&(_, w), norm)| theta * w / norm)
                    .collect()
            })
            .collect();

        DocumentInference { gamma, sstats }
    }

    fn topic_term_distribution(&self) -> Vec<Vec<f64>> {
        self.lambda.iter().map(|row| normalized(row)).collect()
    }
}

/// Per-term normalizer sum_k theta_k * beta_kj (plus epsilon).
fn phi_normalizer(exp_elog_theta: &[f64], beta: &[Vec<f64>]) -> Vec<f64> {
    let len = beta.first().map_or(0, Vec::len);
    (0..len)
        .map(|j| {
            exp_elog_theta
                .iter()
                .zip(beta)
                .map(|(theta, row)| theta * row[j])
                .sum::<f64>()
                + f64::EPSILON
        })
        .collect()
}

/// exp(E[log x]) for x ~ Dirichlet(alpha): exp(psi(alpha_i) - psi(sum alpha)).
fn exp_dirichlet_expectation(alpha: &[f64]) -> Vec<f64> {
    let total = digamma(alpha.iter().sum());
    alpha.iter().map(|&a| (digamma(a) - total).exp()).collect()
}

fn normalized(row: &[f64]) -> Vec<f64> {
    let total: f64 = row.iter().sum();
    if total > 0.0 {
        row.iter().map(|v| v / total).collect()
    } else {
        vec![1.0 / row.len().max(1) as f64; row.len()]
    }
}

fn mean_absolute_change(previous: &[Vec<f64>], current: &[Vec<f64>]) -> f64 {
    let mut total = 0.0;
    let mut count = 0usize;
    for (a, b) in previous.iter().zip(current) {
        for (x, y) in a.iter().zip(b) {
            total += (x - y).abs();
            count += 1;
        }
    }
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topics::vocabulary::VocabularyBuilder;
    use crate::topics::weighting::TermWeighter;

    fn corpus() -> Vec<Vec<String>> {
        let themes = [
            "tax budget deficit revenue",
            "army navy soldier veteran",
            "school teacher student college",
        ];
        (0..12)
            .map(|i| {
                let theme = themes[i % themes.len()];
                theme.split_whitespace().map(String::from).collect()
            })
            .collect()
    }

    fn fit(num_topics: usize, seed: u64) -> Result<TopicModel> {
        let docs = corpus();
        let vocab = VocabularyBuilder::new(0.9, 1).fit(&docs);
        let vectors = TermWeighter::new(&vocab).transform_all(&docs);
        TopicModel::fit(&vectors, &vocab, &TopicModelParams::new(num_topics, seed))
    }

    fn assert_rows_sum_to_one(rows: &[Vec<f64>]) {
        for (i, row) in rows.iter().enumerate() {
            let total: f64 = row.iter().sum();
            assert!((total - 1.0).abs() < 1e-9, "row {i} sums to {total}");
        }
    }

    #[test]
    fn distributions_are_normalized() {
        let model = fit(3, 42).unwrap();
        assert_eq!(model.num_topics(), 3);
        assert_rows_sum_to_one(model.topic_term());
        assert_rows_sum_to_one(model.doc_topic());
    }

    #[test]
    fn same_seed_is_reproducible() {
        let a = fit(3, 7).unwrap();
        let b = fit(3, 7).unwrap();
        assert_eq!(a.topic_term(), b.topic_term());
        assert_eq!(a.doc_topic(), b.doc_topic());
    }

    #[test]
    fn too_many_topics_is_a_configuration_error() {
        let err = fit(13, 42).unwrap_err();
        assert!(err.is_configuration());
        assert!(matches!(
            err,
            PipelineError::TooManyTopics {
                requested: 13,
                available: 12
            }
        ));
    }

    #[test]
    fn empty_vocabulary_is_a_configuration_error() {
        let vocab = Vocabulary::default();
        let err = TopicModel::fit(&[], &vocab, &TopicModelParams::new(2, 42)).unwrap_err();
        assert!(matches!(err, PipelineError::EmptyVocabulary));
    }

    #[test]
    fn top_terms_are_distinct_and_bounded() {
        let model = fit(3, 42).unwrap();
        let terms = model.top_terms(0, 5);
        assert_eq!(terms.len(), 5);
        let mut unique = terms.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 5);
        assert_eq!(model.top_terms(0, 100).len(), 12);
        assert!(model.top_terms(9, 5).is_empty());
    }

    #[test]
    fn top_weighted_terms_are_descending() {
        let model = fit(3, 42).unwrap();
        let weighted = model.top_weighted_terms(1, 12);
        for pair in weighted.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn iteration_budget_is_observable() {
        let docs = corpus();
        let vocab = VocabularyBuilder::new(0.9, 1).fit(&docs);
        let vectors = TermWeighter::new(&vocab).transform_all(&docs);
        let params = TopicModelParams {
            max_iterations: 1,
            convergence_tolerance: 0.0,
            ..TopicModelParams::new(3, 42)
        };
        let model = TopicModel::fit(&vectors, &vocab, &params).unwrap();
        assert_eq!(model.outcome().iterations, 1);
        assert!(!model.outcome().converged);
    }

    #[test]
    fn empty_documents_get_uniform_topics() {
        let mut docs = corpus();
        docs.push(Vec::new());
        let vocab = VocabularyBuilder::new(0.9, 1).fit(&docs);
        let vectors = TermWeighter::new(&vocab).transform_all(&docs);
        let model = TopicModel::fit(&vectors, &vocab, &TopicModelParams::new(3, 42)).unwrap();
        let last = model.doc_topic().last().cloned().unwrap_or_default();
        assert!(last.iter().all(|&w| (w - 1.0 / 3.0).abs() < 1e-12));
        assert_eq!(model.dominant_topic(docs.len() - 1), None);
        assert!(model.dominant_topic(0).is_some());
        let prevalence: f64 = model.topic_prevalence().iter().sum();
        assert!((prevalence - 1.0).abs() < 1e-9);
    }
}
