// Latent Dirichlet Allocation via collapsed Gibbs sampling.
//
// Small corpora and a seeded RNG make the simple sampler the right
// tool: no variational machinery, fully reproducible runs. Smoothing
// follows the usual symmetric priors (alpha for document-topic, beta
// for topic-word).

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::topics::vectorizer::DocumentTermMatrix;
use crate::topics::TopicError;

pub struct LdaConfig {
    pub n_topics: usize,
    /// Document-topic smoothing
    pub alpha: f64,
    /// Topic-word smoothing
    pub beta: f64,
    /// Full Gibbs sweeps over the corpus
    pub n_iterations: usize,
    /// Fixed seed: identical inputs give identical topics
    pub random_seed: u64,
}

impl Default for LdaConfig {
    fn default() -> Self {
        Self {
            n_topics: 5,
            alpha: 0.1,
            beta: 0.01,
            n_iterations: 25,
            random_seed: 42,
        }
    }
}

pub struct Lda {
    config: LdaConfig,
    doc_topic_counts: Option<Array2<f64>>,
    topic_word_counts: Option<Array2<f64>>,
}

impl Lda {
    pub fn new(config: LdaConfig) -> Self {
        Self {
            config,
            doc_topic_counts: None,
            topic_word_counts: None,
        }
    }

    /// Run the sampler over a fitted document-term matrix.
    pub fn fit(&mut self, dtm: &DocumentTermMatrix) -> Result<(), TopicError> {
        let k = self.config.n_topics;
        if k == 0 {
            return Err(TopicError::InvalidTopicCount(0));
        }
        let n_terms = dtm.terms.len();
        if n_terms == 0 {
            return Err(TopicError::EmptyVocabulary);
        }
        let n_docs = dtm.matrix.nrows();

        // Expand counts into explicit token streams per document.
        let mut docs: Vec<Vec<usize>> = Vec::with_capacity(n_docs);
        for doc_idx in 0..n_docs {
            let mut tokens = Vec::new();
            for term_idx in 0..n_terms {
                let count = dtm.matrix[[doc_idx, term_idx]] as usize;
                for _ in 0..count {
                    tokens.push(term_idx);
                }
            }
            docs.push(tokens);
        }

        let mut rng = StdRng::seed_from_u64(self.config.random_seed);
        let mut doc_topic = Array2::<f64>::zeros((n_docs, k));
        let mut topic_word = Array2::<f64>::zeros((k, n_terms));
        let mut topic_total = Array1::<f64>::zeros(k);

        let mut assignments: Vec<Vec<usize>> = Vec::with_capacity(n_docs);
        for (doc_idx, tokens) in docs.iter().enumerate() {
            let mut doc_assignments = Vec::with_capacity(tokens.len());
            for &term_idx in tokens {
                let topic = rng.gen_range(0..k);
                doc_assignments.push(topic);
                doc_topic[[doc_idx, topic]] += 1.0;
                topic_word[[topic, term_idx]] += 1.0;
                topic_total[topic] += 1.0;
            }
            assignments.push(doc_assignments);
        }

        let alpha = self.config.alpha;
        let beta = self.config.beta;
        let vocab_size = n_terms as f64;
        let mut weights = vec![0.0f64; k];

        for _ in 0..self.config.n_iterations {
            for (doc_idx, tokens) in docs.iter().enumerate() {
                for (token_pos, &term_idx) in tokens.iter().enumerate() {
                    let old_topic = assignments[doc_idx][token_pos];
                    doc_topic[[doc_idx, old_topic]] -= 1.0;
                    topic_word[[old_topic, term_idx]] -= 1.0;
                    topic_total[old_topic] -= 1.0;

                    let mut total = 0.0;
                    for (topic, weight) in weights.iter_mut().enumerate() {
                        *weight = (doc_topic[[doc_idx, topic]] + alpha)
                            * (topic_word[[topic, term_idx]] + beta)
                            / (topic_total[topic] + beta * vocab_size);
                        total += *weight;
                    }

                    let mut draw = rng.gen::<f64>() * total;
                    let mut new_topic = k - 1;
                    for (topic, &weight) in weights.iter().enumerate() {
                        draw -= weight;
                        if draw <= 0.0 {
                            new_topic = topic;
                            break;
                        }
                    }

                    assignments[doc_idx][token_pos] = new_topic;
                    doc_topic[[doc_idx, new_topic]] += 1.0;
                    topic_word[[new_topic, term_idx]] += 1.0;
                    topic_total[new_topic] += 1.0;
                }
            }
        }

        self.doc_topic_counts = Some(doc_topic);
        self.topic_word_counts = Some(topic_word);
        Ok(())
    }

    /// Per-document topic distribution. Each row sums to 1; a document
    /// with no tokens gets the uniform prior.
    pub fn document_topics(&self) -> Result<Array2<f64>, TopicError> {
        let counts = self
            .doc_topic_counts
            .as_ref()
            .ok_or(TopicError::NotFitted)?;
        let alpha = self.config.alpha;
        let k = self.config.n_topics as f64;
        let mut dist = counts.clone();
        for mut row in dist.rows_mut() {
            let total = row.sum() + alpha * k;
            for value in row.iter_mut() {
                *value = (*value + alpha) / total;
            }
        }
        Ok(dist)
    }

    /// Per-topic term distribution. Each row sums to 1.
    pub fn topic_terms(&self) -> Result<Array2<f64>, TopicError> {
        let counts = self
            .topic_word_counts
            .as_ref()
            .ok_or(TopicError::NotFitted)?;
        let beta = self.config.beta;
        let vocab_size = counts.ncols() as f64;
        let mut dist = counts.clone();
        for mut row in dist.rows_mut() {
            let total = row.sum() + beta * vocab_size;
            for value in row.iter_mut() {
                *value = (*value + beta) / total;
            }
        }
        Ok(dist)
    }
}

/// Dominant topic per document: the argmax of each row, ties resolved
/// to the lowest topic index.
pub fn dominant_topics(doc_topics: &Array2<f64>) -> Vec<usize> {
    doc_topics
        .rows()
        .into_iter()
        .map(|row| {
            let mut best = 0;
            let mut best_weight = f64::NEG_INFINITY;
            for (idx, &weight) in row.iter().enumerate() {
                if weight > best_weight {
                    best = idx;
                    best_weight = weight;
                }
            }
            best
        })
        .collect()
}
