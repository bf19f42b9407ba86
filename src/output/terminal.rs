// Colored terminal output for the report charts.
//
// This module handles all terminal-specific formatting: colors, bars,
// tables. The main.rs display paths delegate here.

use std::collections::BTreeMap;

use colored::Colorize;

use crate::corpus::models::{AnalyzedDocument, SentimentCategory};
use crate::text::phrases::Collocation;
use crate::topics::summary::TopicSummary;

const BAR_WIDTH: usize = 30;

/// Display the sentiment band histogram, most negative band first.
pub fn display_sentiment_distribution(rows: &[AnalyzedDocument]) {
    if rows.is_empty() {
        println!("No analyzed papers yet. Run `gallium analyze` first.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Sentiment Distribution ({} papers) ===", rows.len()).bold()
    );
    println!();

    let counts: Vec<(SentimentCategory, usize)> = SentimentCategory::ordered()
        .into_iter()
        .map(|category| {
            let count = rows
                .iter()
                .filter(|r| r.sentiment_category == category.as_str())
                .count();
            (category, count)
        })
        .collect();
    let max_count = counts.iter().map(|(_, c)| *c).max().unwrap_or(0).max(1);

    for (category, count) in counts {
        let share = count as f64 / rows.len() as f64 * 100.0;
        let bar = scaled_bar(count, max_count);
        println!(
            "  {:<18} [{}] {:>4} ({:>5.1}%)",
            category.as_str(),
            colorize_band(&bar, category),
            count,
            share
        );
    }
}

/// Display papers per topic as a bar chart.
pub fn display_topic_distribution(summary: &TopicSummary) {
    if summary.clusters.is_empty() {
        return;
    }

    println!("\n{}", "=== Papers per Topic ===".bold());
    println!();

    let max_count = summary
        .clusters
        .iter()
        .map(|c| c.paper_count)
        .max()
        .unwrap_or(0)
        .max(1);

    for cluster in &summary.clusters {
        let bar = scaled_bar(cluster.paper_count, max_count);
        println!(
            "  {:>2}. {:<36} [{}] {:>4}",
            cluster.index + 1,
            super::truncate_chars(&cluster.name, 34),
            bar.cyan(),
            cluster.paper_count
        );
    }
}

/// Display the mean compound score per topic, sign-colored.
pub fn display_topic_sentiment(rows: &[AnalyzedDocument], summary: &TopicSummary) {
    if summary.clusters.is_empty() {
        return;
    }

    println!("\n{}", "=== Mean Sentiment per Topic ===".bold());
    println!();

    for cluster in &summary.clusters {
        let compounds: Vec<f64> = rows
            .iter()
            .filter(|r| r.topic_index == cluster.index)
            .map(|r| r.compound)
            .collect();

        let value = if compounds.is_empty() {
            "no papers".dimmed()
        } else {
            let mean = compounds.iter().sum::<f64>() / compounds.len() as f64;
            let formatted = format!("{mean:+.3}");
            if mean > 0.05 {
                formatted.green()
            } else if mean < -0.05 {
                formatted.red()
            } else {
                formatted.normal()
            }
        };

        println!(
            "  {:>2}. {:<36} {}",
            cluster.index + 1,
            super::truncate_chars(&cluster.name, 34),
            value
        );
    }
}

/// Display papers per publication year with year-over-year growth.
pub fn display_publication_trend(rows: &[AnalyzedDocument]) {
    let years = papers_per_year(rows);
    if years.is_empty() {
        return;
    }

    println!("\n{}", "=== Publication Trend ===".bold());
    println!();

    let max_count = years.values().copied().max().unwrap_or(1).max(1);
    let mut previous: Option<usize> = None;
    for (year, &count) in &years {
        let bar = scaled_bar(count, max_count);
        let growth = match previous {
            Some(prev) if prev > 0 => {
                let pct = (count as f64 - prev as f64) / prev as f64 * 100.0;
                let formatted = format!("({pct:+.1}%)");
                if pct > 0.0 {
                    formatted.green().to_string()
                } else if pct < 0.0 {
                    formatted.red().to_string()
                } else {
                    formatted.dimmed().to_string()
                }
            }
            _ => String::new(),
        };
        println!("  {year}  [{}] {:>4}  {growth}", bar.blue(), count);
        previous = Some(count);
    }
}

/// Display the bigram and trigram collocation tables.
pub fn display_collocations(bigrams: &[Collocation], trigrams: &[Collocation]) {
    if bigrams.is_empty() && trigrams.is_empty() {
        println!("No collocations above the frequency thresholds. Collect more papers first.");
        return;
    }

    if !bigrams.is_empty() {
        collocation_table("Technical Bigrams", bigrams);
    }
    if !trigrams.is_empty() {
        collocation_table("Technical Trigrams", trigrams);
    }
}

fn collocation_table(title: &str, collocations: &[Collocation]) {
    println!(
        "\n{}",
        format!("=== {title} (top {}) ===", collocations.len()).bold()
    );
    println!();
    println!(
        "  {:>4}  {:<40} {:>6}  {:>6}",
        "Rank".dimmed(),
        "Phrase".dimmed(),
        "Count".dimmed(),
        "PMI".dimmed(),
    );
    println!("  {}", "-".repeat(62).dimmed());

    for (i, collocation) in collocations.iter().enumerate() {
        println!(
            "  {:>4}. {:<40} {:>6}  {:>6.2}",
            i + 1,
            super::truncate_chars(&collocation.phrase, 38),
            collocation.count,
            collocation.score,
        );
    }
}

/// Count analyzed papers per publication year, oldest first.
pub fn papers_per_year(rows: &[AnalyzedDocument]) -> BTreeMap<String, usize> {
    let mut years = BTreeMap::new();
    for row in rows {
        if let Some(year) = publication_year(&row.published) {
            *years.entry(year).or_insert(0) += 1;
        }
    }
    years
}

/// The leading YYYY of a date string, when present.
fn publication_year(published: &str) -> Option<String> {
    let year: String = published.chars().take(4).collect();
    if year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()) {
        Some(year)
    } else {
        None
    }
}

/// A space-padded bar of fixed width. Padding happens before coloring
/// so ANSI escapes never skew the column alignment.
fn scaled_bar(count: usize, max_count: usize) -> String {
    let filled = (count as f64 / max_count as f64 * BAR_WIDTH as f64).round() as usize;
    format!("{:<width$}", "=".repeat(filled.min(BAR_WIDTH)), width = BAR_WIDTH)
}

/// Colorize a histogram bar by its sentiment band.
fn colorize_band(bar: &str, category: SentimentCategory) -> colored::ColoredString {
    match category {
        SentimentCategory::StrongNegative => bar.red(),
        SentimentCategory::ModerateNegative => bar.bright_red(),
        SentimentCategory::Neutral => bar.dimmed(),
        SentimentCategory::ModeratePositive => bar.bright_green(),
        SentimentCategory::StrongPositive => bar.green(),
    }
}
