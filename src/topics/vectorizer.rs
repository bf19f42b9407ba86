// Document-term matrix construction.
//
// Counts unigrams and bigrams over normalized abstracts, drops terms
// that are too rare to cluster on (min_df) or so ubiquitous they carry
// no signal (max_df). The vocabulary is sorted alphabetically so runs
// are reproducible.

use std::collections::{HashMap, HashSet};

use ndarray::Array2;

use crate::topics::TopicError;

pub struct CountVectorizer {
    /// Minimum number of documents a term must appear in
    min_df: usize,
    /// Maximum fraction of documents a term may appear in
    max_df_ratio: f64,
    /// Inclusive n-gram length range
    ngram_range: (usize, usize),
    stop_words: HashSet<String>,
}

/// The fitted matrix plus its vocabulary.
pub struct DocumentTermMatrix {
    /// Rows are documents, columns are terms, cells are counts.
    pub matrix: Array2<f64>,
    /// term -> column index
    pub vocabulary: HashMap<String, usize>,
    /// column index -> term, alphabetical
    pub terms: Vec<String>,
}

impl CountVectorizer {
    pub fn new() -> Self {
        Self {
            min_df: 2,
            max_df_ratio: 0.95,
            ngram_range: (1, 2),
            stop_words: stop_words::get(stop_words::LANGUAGE::English)
                .into_iter()
                .collect(),
        }
    }

    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df;
        self
    }

    pub fn with_max_df_ratio(mut self, max_df_ratio: f64) -> Self {
        self.max_df_ratio = max_df_ratio;
        self
    }

    pub fn with_ngram_range(mut self, ngram_range: (usize, usize)) -> Self {
        self.ngram_range = ngram_range;
        self
    }

    /// Build the document-term matrix. Fails with
    /// [`TopicError::EmptyVocabulary`] when the frequency filters leave
    /// nothing behind.
    pub fn fit_transform(&self, documents: &[String]) -> Result<DocumentTermMatrix, TopicError> {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| self.ngrams(d)).collect();

        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(|t| t.as_str()).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let n_docs = documents.len();
        let max_df = self.max_df_ratio * n_docs as f64;
        let mut terms: Vec<String> = doc_freq
            .iter()
            .filter(|(_, &df)| df >= self.min_df && (df as f64) <= max_df)
            .map(|(term, _)| (*term).to_string())
            .collect();
        terms.sort();

        if terms.is_empty() {
            return Err(TopicError::EmptyVocabulary);
        }

        let vocabulary: HashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();

        let mut matrix = Array2::<f64>::zeros((n_docs, terms.len()));
        for (doc_idx, tokens) in tokenized.iter().enumerate() {
            for token in tokens {
                if let Some(&term_idx) = vocabulary.get(token.as_str()) {
                    matrix[[doc_idx, term_idx]] += 1.0;
                }
            }
        }

        Ok(DocumentTermMatrix {
            matrix,
            vocabulary,
            terms,
        })
    }

    /// Stopword-filtered tokens expanded into n-grams. Single-character
    /// tokens are dropped before n-grams are formed, so a bigram never
    /// straddles a removed token.
    fn ngrams(&self, document: &str) -> Vec<String> {
        let tokens: Vec<&str> = document
            .split_whitespace()
            .filter(|t| t.chars().count() >= 2 && !self.stop_words.contains(*t))
            .collect();

        let (lo, hi) = self.ngram_range;
        let mut grams = Vec::new();
        for n in lo.max(1)..=hi {
            if tokens.len() < n {
                continue;
            }
            for window in tokens.windows(n) {
                grams.push(window.join(" "));
            }
        }
        grams
    }
}

impl Default for CountVectorizer {
    fn default() -> Self {
        Self::new()
    }
}
