// The analysis pipeline: normalize, score, cluster, name, assemble.
//
// Pure computation over an in-memory corpus; callers load the corpus
// and persist the outputs. Every stage is deterministic (the LDA
// sampler is seeded), so rerunning over the same corpus reproduces the
// same rows and the same topic names.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::corpus::models::{AnalyzedDocument, Document, SentimentCategory};
use crate::sentiment::scorer::{SentimentScorer, SentimentScores};
use crate::text::normalize::Normalizer;
use crate::topics::lda::{dominant_topics, Lda, LdaConfig};
use crate::topics::summary::{build_summary, TopicSummary};
use crate::topics::vectorizer::CountVectorizer;

/// Run the full analysis over the corpus. Returns the per-paper rows
/// and the named topic summary.
pub fn run(
    documents: &[Document],
    num_topics: usize,
    lda_iterations: usize,
    seed: u64,
) -> Result<(Vec<AnalyzedDocument>, TopicSummary)> {
    // Step 1: Normalize abstracts and score sentiment in one pass
    println!("Normalizing and scoring {} abstracts...", documents.len());
    let normalizer = Normalizer::new();
    let scorer = SentimentScorer::new();

    let pb = ProgressBar::new(documents.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Scoring [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );

    let mut processed: Vec<String> = Vec::with_capacity(documents.len());
    let mut scores: Vec<SentimentScores> = Vec::with_capacity(documents.len());
    for document in documents {
        processed.push(normalizer.normalize(&document.abstract_text));
        scores.push(scorer.score(&document.abstract_text));
        pb.inc(1);
    }
    pb.finish_and_clear();
    info!(count = documents.len(), "Normalized and scored abstracts");

    // Step 2: Build the document-term matrix
    let dtm = CountVectorizer::new()
        .fit_transform(&processed)
        .context("Cannot build a topic model from this corpus")?;
    info!(vocabulary = dtm.terms.len(), "Built document-term matrix");

    // Step 3: Fit the topic model
    println!(
        "Fitting {num_topics} topics over a {}-term vocabulary ({lda_iterations} iterations)...",
        dtm.terms.len()
    );
    let mut lda = Lda::new(LdaConfig {
        n_topics: num_topics,
        n_iterations: lda_iterations,
        random_seed: seed,
        ..LdaConfig::default()
    });
    lda.fit(&dtm)?;
    let doc_topics = lda.document_topics()?;
    let topic_terms = lda.topic_terms()?;
    let assignments = dominant_topics(&doc_topics);
    info!(topics = num_topics, "Fitted LDA model");

    // Step 4: Name topics and assemble the summary
    let summary = build_summary(documents, &doc_topics, &topic_terms, &dtm.terms, &assignments);

    // Step 5: One analysis row per paper
    let rows = documents
        .iter()
        .enumerate()
        .map(|(idx, document)| {
            let score = scores[idx];
            let category =
                SentimentCategory::from_scores(score.compound, score.technical_confidence);
            let topic_index = assignments[idx];
            AnalyzedDocument {
                id: document.id.clone(),
                title: document.title.clone(),
                abstract_text: document.abstract_text.clone(),
                published: document.published.clone(),
                categories: document.categories.clone(),
                processed_abstract: processed[idx].clone(),
                base_sentiment: score.base_sentiment,
                technical_confidence: score.technical_confidence,
                result_strength: score.result_strength,
                citation_impact: score.citation_impact,
                compound: score.compound,
                sentiment_category: category.as_str().to_string(),
                topic_index,
                topic_name: summary.clusters[topic_index].name.clone(),
            }
        })
        .collect();

    Ok((rows, summary))
}
