// Paginated paper collection from the arXiv export API.

use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use crate::arxiv::client::ArxivClient;
use crate::corpus::models::Document;

/// Fetch up to `max_results` papers in pages of `page_size`, sleeping
/// `delay_secs` between requests per the arXiv usage policy. Stops
/// early when a page comes back empty: the query is exhausted or the
/// API is rate limiting.
pub async fn fetch_papers(
    client: &ArxivClient,
    query: &str,
    max_results: usize,
    page_size: usize,
    delay_secs: u64,
) -> Result<Vec<Document>> {
    let page_size = page_size.max(1);
    let mut papers: Vec<Document> = Vec::with_capacity(max_results);

    let pb = ProgressBar::new(max_results as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Fetching [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );

    let mut start = 0;
    while start < max_results {
        let want = page_size.min(max_results - start);
        let page = client
            .query_page(query, start, want)
            .await
            .with_context(|| format!("Failed to fetch papers at offset {start}"))?;

        if page.is_empty() {
            warn!(
                start,
                collected = papers.len(),
                "arXiv returned an empty page; stopping early"
            );
            break;
        }

        debug!(
            page_papers = page.len(),
            total_collected = papers.len() + page.len(),
            "Fetched page of papers"
        );
        papers.extend(page);
        pb.set_position(papers.len().min(max_results) as u64);

        start += page_size;
        if start < max_results {
            tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        }
    }

    pb.finish_and_clear();
    info!(count = papers.len(), query, "Collected papers from arXiv");
    Ok(papers)
}
