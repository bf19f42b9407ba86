// arXiv export API client: unauthenticated Atom over HTTP.
//
// The export API needs no key. It returns Atom XML, which feed-rs
// parses; the entry fields map straight onto the corpus Document.
// arXiv asks for a politeness delay between requests, which the
// paging loop in papers.rs honors.

use anyhow::{Context, Result};
use tracing::debug;

use crate::corpus::models::Document;

/// Default arXiv export API endpoint.
pub const DEFAULT_EXPORT_API_URL: &str = "http://export.arxiv.org/api/query";

/// Thin HTTP client for the arXiv export API.
pub struct ArxivClient {
    client: reqwest::Client,
    base_url: String,
}

impl ArxivClient {
    /// Create a client pointing at the given endpoint. Pass a different
    /// URL for testing against a local fixture server.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("gallium/0.1 (research-paper analysis)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one page of results, newest first. An empty page means
    /// the query is exhausted or the API is throttling us.
    pub async fn query_page(
        &self,
        search_query: &str,
        start: usize,
        max_results: usize,
    ) -> Result<Vec<Document>> {
        let start_param = start.to_string();
        let max_param = max_results.to_string();
        let params: &[(&str, &str)] = &[
            ("search_query", search_query),
            ("start", &start_param),
            ("max_results", &max_param),
            ("sortBy", "lastUpdatedDate"),
            ("sortOrder", "descending"),
        ];

        debug!(search_query, start, "arXiv query request");

        let response = self
            .client
            .get(&self.base_url)
            .query(params)
            .send()
            .await
            .with_context(|| format!("arXiv request failed at offset {start}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("arXiv API returned {status}: {body}");
        }

        let bytes = response
            .bytes()
            .await
            .context("Failed to read arXiv response body")?;
        let feed = feed_rs::parser::parse(&bytes[..]).context("Failed to parse Atom feed")?;

        Ok(feed.entries.into_iter().map(entry_to_document).collect())
    }
}

/// Map one Atom entry onto a corpus Document. Missing fields become
/// empty strings rather than dropping the paper; the published date
/// falls back to the updated date.
fn entry_to_document(entry: feed_rs::model::Entry) -> Document {
    let title = entry
        .title
        .map(|t| squash_whitespace(&t.content))
        .unwrap_or_default();
    let abstract_text = entry
        .summary
        .map(|s| squash_whitespace(&s.content))
        .unwrap_or_default();
    let published = entry
        .published
        .or(entry.updated)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let categories = entry.categories.into_iter().map(|c| c.term).collect();

    Document {
        id: entry.id,
        title,
        abstract_text,
        published,
        categories,
    }
}

/// arXiv wraps titles and abstracts with hard newlines and doubled
/// spaces; collapse them so display and naming see clean text.
fn squash_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
