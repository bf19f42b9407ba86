// Pipeline status display: what has been collected and how fresh it is.

use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Local};

use crate::config::Config;
use crate::corpus::store;

/// Display pipeline status to the terminal.
pub fn show(config: &Config) -> Result<()> {
    if !Path::new(&config.corpus_path).exists() {
        println!("Corpus: not collected");
        println!("\nRun `gallium collect` to fetch papers from arXiv.");
        return Ok(());
    }

    let papers = store::load_corpus(&config.corpus_path)?;
    println!(
        "Corpus: {} ({}, {} papers{})",
        config.corpus_path,
        file_size(&config.corpus_path),
        papers.len(),
        modified_suffix(&config.corpus_path)
    );

    if Path::new(&config.analysis_path).exists() {
        let rows = store::load_analysis(&config.analysis_path)?;
        let stale = rows.len() != papers.len();
        println!(
            "Analysis: {} ({} rows{}){}",
            config.analysis_path,
            rows.len(),
            modified_suffix(&config.analysis_path),
            if stale { " [stale: corpus changed, rerun `gallium analyze`]" } else { "" }
        );
    } else {
        println!("Analysis: not run yet");
        println!("  Run `gallium analyze` to score and cluster the corpus");
    }

    if Path::new(&config.topics_path).exists() {
        let summary = store::load_topic_summary(&config.topics_path)?;
        let names: Vec<&str> = summary
            .clusters
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        println!("Topics: {} ({})", summary.clusters.len(), names.join(", "));
    } else {
        println!("Topics: not built yet");
    }

    if Path::new(&config.report_path).exists() {
        println!(
            "Report: {}{}",
            config.report_path,
            modified_suffix(&config.report_path)
        );
    } else {
        println!("Report: not written yet");
        println!("  Run `gallium report` to render charts and the markdown file");
    }

    Ok(())
}

fn file_size(path: &str) -> String {
    std::fs::metadata(path)
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string())
}

/// ", modified YYYY-MM-DD HH:MM" when the mtime is readable.
fn modified_suffix(path: &str) -> String {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .map(|mtime| {
            let local: DateTime<Local> = mtime.into();
            format!(", modified {}", local.format("%Y-%m-%d %H:%M"))
        })
        .unwrap_or_default()
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
