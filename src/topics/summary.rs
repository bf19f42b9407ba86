// Topic summary: named clusters with keywords and example papers.
//
// Built once per analysis run from the fitted LDA distributions, then
// persisted as JSON for the report stage.

use std::collections::HashSet;

use colored::Colorize;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::corpus::models::Document;
use crate::output::truncate_chars;
use crate::topics::naming;

/// Top terms kept per topic.
const TOP_TERMS: usize = 20;
/// Representative papers kept per topic.
const TOP_PAPERS: usize = 5;
/// How many of the top terms feed naming and keyword display.
const KEYWORD_COUNT: usize = 10;
/// Representative papers shown in terminal and report output.
const SHOWN_PAPERS: usize = 3;

/// One named LDA cluster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicCluster {
    pub index: usize,
    pub name: String,
    /// Most probable vocabulary terms, highest first
    pub top_terms: Vec<String>,
    /// Titles of the papers most associated with this topic
    pub example_titles: Vec<String>,
    /// Topic probability for each example title
    pub example_probabilities: Vec<f64>,
    /// Papers whose dominant topic this is
    pub paper_count: usize,
}

impl TopicCluster {
    /// The naming/display slice of the top terms.
    pub fn keywords(&self) -> &[String] {
        &self.top_terms[..KEYWORD_COUNT.min(self.top_terms.len())]
    }

    /// Example titles paired with their probabilities, display count.
    pub fn shown_examples(&self) -> impl Iterator<Item = (&String, f64)> {
        self.example_titles
            .iter()
            .zip(self.example_probabilities.iter().copied())
            .take(SHOWN_PAPERS)
    }
}

/// All clusters from one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicSummary {
    pub clusters: Vec<TopicCluster>,
    pub document_count: usize,
}

/// Assemble the summary from the fitted distributions. Names are
/// assigned in topic-index order so reruns produce identical names.
pub fn build_summary(
    documents: &[Document],
    doc_topics: &Array2<f64>,
    topic_term_dist: &Array2<f64>,
    terms: &[String],
    assignments: &[usize],
) -> TopicSummary {
    let n_topics = topic_term_dist.nrows();
    let mut used_names = HashSet::new();
    let mut clusters = Vec::with_capacity(n_topics);

    for topic_idx in 0..n_topics {
        // Top terms by probability, ties to the lower (alphabetical) index
        let term_row = topic_term_dist.row(topic_idx);
        let mut term_order: Vec<usize> = (0..terms.len()).collect();
        term_order.sort_by(|&a, &b| {
            term_row[b]
                .partial_cmp(&term_row[a])
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.cmp(&b))
        });
        let top_terms: Vec<String> = term_order
            .iter()
            .take(TOP_TERMS)
            .map(|&i| terms[i].clone())
            .collect();

        // Most associated papers, ties to the earlier document
        let mut doc_order: Vec<usize> = (0..documents.len()).collect();
        doc_order.sort_by(|&a, &b| {
            doc_topics[[b, topic_idx]]
                .partial_cmp(&doc_topics[[a, topic_idx]])
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.cmp(&b))
        });
        let examples: Vec<usize> = doc_order.into_iter().take(TOP_PAPERS).collect();
        let example_titles: Vec<String> = examples
            .iter()
            .map(|&d| documents[d].title.clone())
            .collect();
        let example_probabilities: Vec<f64> = examples
            .iter()
            .map(|&d| doc_topics[[d, topic_idx]])
            .collect();

        let keyword_count = KEYWORD_COUNT.min(top_terms.len());
        let name = naming::unique_topic_name(
            &top_terms[..keyword_count],
            &example_titles,
            &mut used_names,
        );

        let paper_count = assignments.iter().filter(|&&t| t == topic_idx).count();

        clusters.push(TopicCluster {
            index: topic_idx,
            name,
            top_terms,
            example_titles,
            example_probabilities,
            paper_count,
        });
    }

    TopicSummary {
        clusters,
        document_count: documents.len(),
    }
}

impl TopicSummary {
    /// Print the clusters with names, keywords, and example papers.
    pub fn display(&self) {
        println!(
            "\n{}",
            format!(
                "=== Topic Summary ({} topics, {} papers) ===",
                self.clusters.len(),
                self.document_count
            )
            .bold()
        );
        for cluster in &self.clusters {
            println!("\n{}. {}", cluster.index + 1, cluster.name.bold());
            println!(
                "   {} {}",
                "Keywords:".dimmed(),
                cluster.keywords().join(", ")
            );
            println!(
                "   {} {} papers",
                "Assigned:".dimmed(),
                cluster.paper_count
            );
            for (title, probability) in cluster.shown_examples() {
                println!(
                    "   - {} {}",
                    truncate_chars(title, 70),
                    format!("(probability {probability:.3})").dimmed()
                );
            }
        }
    }
}
