// CSV-backed persistence for the corpus and analysis tables.
//
// The pipeline is batch-oriented, so flat files are enough: collect
// merges into the corpus CSV, analyze rewrites the analysis CSV and
// the topic summary JSON wholesale.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::corpus::models::{AnalyzedDocument, Document};
use crate::topics::summary::TopicSummary;

/// Load the raw corpus. Fails with a pointer to `collect` when the
/// file doesn't exist yet.
pub fn load_corpus(path: &str) -> Result<Vec<Document>> {
    if !Path::new(path).exists() {
        anyhow::bail!("No corpus found at {path}. Run `gallium collect` first.");
    }
    read_csv(path).with_context(|| format!("Failed to read corpus at {path}"))
}

pub fn save_corpus(path: &str, documents: &[Document]) -> Result<()> {
    write_csv(path, documents).with_context(|| format!("Failed to write corpus at {path}"))
}

/// Merge freshly collected papers into the corpus, deduplicating by
/// arXiv id. Returns (corpus total, newly added).
pub fn merge_corpus(path: &str, fetched: Vec<Document>) -> Result<(usize, usize)> {
    let mut documents = if Path::new(path).exists() {
        load_corpus(path)?
    } else {
        Vec::new()
    };

    let mut known: HashSet<String> = documents.iter().map(|d| d.id.clone()).collect();
    let mut added = 0;
    for document in fetched {
        if known.insert(document.id.clone()) {
            documents.push(document);
            added += 1;
        }
    }

    save_corpus(path, &documents)?;
    info!(
        total = documents.len(),
        added, "Merged fetched papers into corpus"
    );
    Ok((documents.len(), added))
}

/// Load the per-paper analysis table. Fails with a pointer to `analyze`
/// when the file doesn't exist yet.
pub fn load_analysis(path: &str) -> Result<Vec<AnalyzedDocument>> {
    if !Path::new(path).exists() {
        anyhow::bail!("No analysis found at {path}. Run `gallium analyze` first.");
    }
    read_csv(path).with_context(|| format!("Failed to read analysis at {path}"))
}

pub fn save_analysis(path: &str, rows: &[AnalyzedDocument]) -> Result<()> {
    write_csv(path, rows).with_context(|| format!("Failed to write analysis at {path}"))
}

pub fn load_topic_summary(path: &str) -> Result<TopicSummary> {
    if !Path::new(path).exists() {
        anyhow::bail!("No topic summary found at {path}. Run `gallium analyze` first.");
    }
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read topic summary at {path}"))?;
    serde_json::from_str(&json).with_context(|| format!("Malformed topic summary at {path}"))
}

pub fn save_topic_summary(path: &str, summary: &TopicSummary) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(path, json).with_context(|| format!("Failed to write topic summary at {path}"))
}

fn read_csv<T: serde::de::DeserializeOwned>(path: &str) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

fn write_csv<T: serde::Serialize>(path: &str, rows: &[T]) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn ensure_parent_dir(path: &str) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }
    Ok(())
}
