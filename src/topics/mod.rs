// Topic modeling: document-term matrix, LDA, naming, and summaries.

pub mod lda;
pub mod naming;
pub mod summary;
pub mod vectorizer;

use thiserror::Error;

/// Typed failures from the topic-modeling stage.
#[derive(Debug, Error)]
pub enum TopicError {
    #[error(
        "vocabulary is empty after document-frequency filtering; \
         the corpus is too small or too uniform for topic modeling"
    )]
    EmptyVocabulary,
    #[error("topic count must be at least 1, got {0}")]
    InvalidTopicCount(usize),
    #[error("model has not been fitted yet")]
    NotFitted,
}
