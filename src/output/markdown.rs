// Markdown report generation.
//
// Renders the same aggregates as the terminal charts into a file that
// can be committed, diffed, or pasted into a lab notebook.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use crate::corpus::models::{AnalyzedDocument, SentimentCategory};
use crate::output::terminal::papers_per_year;
use crate::topics::summary::TopicSummary;

/// Write the markdown report and return the path it was written to.
pub fn generate_report(
    rows: &[AnalyzedDocument],
    summary: &TopicSummary,
    path: &str,
) -> Result<String> {
    let mut md = String::new();

    md.push_str("# Gallium Analysis Report\n\n");
    md.push_str(&format!(
        "Generated {} over {} analyzed papers.\n\n",
        Utc::now().format("%Y-%m-%d %H:%M UTC"),
        rows.len()
    ));

    // Sentiment distribution table
    md.push_str("## Sentiment Distribution\n\n");
    md.push_str("| Band | Papers | Share |\n");
    md.push_str("|------|--------|-------|\n");
    for category in SentimentCategory::ordered() {
        let count = rows
            .iter()
            .filter(|r| r.sentiment_category == category.as_str())
            .count();
        let share = if rows.is_empty() {
            0.0
        } else {
            count as f64 / rows.len() as f64 * 100.0
        };
        md.push_str(&format!(
            "| {} | {} | {:.1}% |\n",
            category.as_str(),
            count,
            share
        ));
    }
    md.push_str(&format!("| **Total** | **{}** | |\n\n", rows.len()));

    // Topic overview table plus per-topic details
    md.push_str("## Topics\n\n");
    md.push_str("| # | Topic | Papers | Mean sentiment |\n");
    md.push_str("|---|-------|--------|----------------|\n");
    for cluster in &summary.clusters {
        let compounds: Vec<f64> = rows
            .iter()
            .filter(|r| r.topic_index == cluster.index)
            .map(|r| r.compound)
            .collect();
        let mean = if compounds.is_empty() {
            "-".to_string()
        } else {
            format!(
                "{:+.3}",
                compounds.iter().sum::<f64>() / compounds.len() as f64
            )
        };
        md.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            cluster.index + 1,
            escape_pipes(&cluster.name),
            cluster.paper_count,
            mean
        ));
    }
    md.push('\n');

    for cluster in &summary.clusters {
        md.push_str(&format!(
            "### {}. {}\n\n",
            cluster.index + 1,
            cluster.name
        ));
        md.push_str(&format!(
            "**Keywords:** {}\n\n",
            cluster.keywords().join(", ")
        ));
        md.push_str("Representative papers:\n\n");
        for (title, probability) in cluster.shown_examples() {
            md.push_str(&format!("- {title} (probability {probability:.3})\n"));
        }
        md.push('\n');
    }

    // Publication trend table
    let years = papers_per_year(rows);
    if !years.is_empty() {
        md.push_str("## Publication Trend\n\n");
        md.push_str("| Year | Papers | Growth |\n");
        md.push_str("|------|--------|--------|\n");
        let mut previous: Option<usize> = None;
        for (year, &count) in &years {
            let growth = match previous {
                Some(prev) if prev > 0 => {
                    format!("{:+.1}%", (count as f64 - prev as f64) / prev as f64 * 100.0)
                }
                _ => "-".to_string(),
            };
            md.push_str(&format!("| {year} | {count} | {growth} |\n"));
            previous = Some(count);
        }
        md.push('\n');
    }

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create report directory {}", parent.display()))?;
        }
    }
    fs::write(path, md).with_context(|| format!("Failed to write report to {path}"))?;

    Ok(path.to_string())
}

/// Escape pipe characters so topic names can't break a table row.
fn escape_pipes(text: &str) -> String {
    text.replace('|', "\\|")
}
