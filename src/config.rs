use std::env;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// Every setting has a sensible default, so the pipeline runs out of the
/// box. The .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// arXiv search query (defaults to all:semiconductor)
    pub query: String,
    /// arXiv export API endpoint (defaults to http://export.arxiv.org/api/query)
    pub api_url: String,
    /// Total number of papers to fetch across all pages
    pub max_results: usize,
    /// Papers per API request
    pub page_size: usize,
    /// Politeness delay between API requests, in seconds
    pub fetch_delay_secs: u64,
    /// Raw corpus CSV (written by collect, read by analyze)
    pub corpus_path: String,
    /// Per-paper analysis CSV (written by analyze, read by report)
    pub analysis_path: String,
    /// Topic summary JSON (written by analyze, read by report)
    pub topics_path: String,
    /// Markdown report output path
    pub report_path: String,
    /// Number of LDA topics
    pub num_topics: usize,
    /// Gibbs sampling iterations
    pub lda_iterations: usize,
    /// Seed for the LDA sampler (fixed for reproducible runs)
    pub seed: u64,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn load() -> Result<Self> {
        Ok(Self {
            query: env::var("GALLIUM_QUERY").unwrap_or_else(|_| "all:semiconductor".to_string()),
            api_url: env::var("GALLIUM_API_URL")
                .unwrap_or_else(|_| crate::arxiv::client::DEFAULT_EXPORT_API_URL.to_string()),
            max_results: env_usize("GALLIUM_MAX_RESULTS", 1000),
            page_size: env_usize("GALLIUM_PAGE_SIZE", 100),
            fetch_delay_secs: env_u64("GALLIUM_FETCH_DELAY_SECS", 3),
            corpus_path: env::var("GALLIUM_CORPUS_PATH")
                .unwrap_or_else(|_| "./arxiv_papers.csv".to_string()),
            analysis_path: env::var("GALLIUM_ANALYSIS_PATH")
                .unwrap_or_else(|_| "./paper_analysis.csv".to_string()),
            topics_path: env::var("GALLIUM_TOPICS_PATH")
                .unwrap_or_else(|_| "./topic_summary.json".to_string()),
            report_path: env::var("GALLIUM_REPORT_PATH")
                .unwrap_or_else(|_| "output/gallium-report.md".to_string()),
            num_topics: env_usize("GALLIUM_NUM_TOPICS", 5),
            lda_iterations: env_usize("GALLIUM_LDA_ITERATIONS", 25),
            seed: env_u64("GALLIUM_SEED", 42),
        })
    }

    /// Check that the search query is non-empty.
    /// Call this before collection when no query override was given.
    pub fn require_query(&self) -> Result<()> {
        if self.query.trim().is_empty() {
            anyhow::bail!(
                "GALLIUM_QUERY is set but empty. Provide a query like all:semiconductor,\n\
                 or unset the variable to use the default."
            );
        }
        Ok(())
    }

    /// Check that the topic-model parameters are usable.
    /// Call this before analysis; a zero topic count can only come from
    /// a bad environment override.
    pub fn require_topics(&self) -> Result<()> {
        if self.num_topics == 0 {
            anyhow::bail!(
                "GALLIUM_NUM_TOPICS is 0. Topic modeling needs at least one topic;\n\
                 unset the variable to use the default of 5."
            );
        }
        if self.lda_iterations == 0 {
            anyhow::bail!(
                "GALLIUM_LDA_ITERATIONS is 0. The sampler needs at least one pass;\n\
                 unset the variable to use the default of 25."
            );
        }
        Ok(())
    }
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
