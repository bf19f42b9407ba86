use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use gallium::arxiv::client::ArxivClient;
use gallium::arxiv::papers::fetch_papers;
use gallium::config::Config;
use gallium::corpus::models::Document;
use gallium::corpus::store;
use gallium::output::terminal;
use gallium::text::normalize::Normalizer;
use gallium::text::phrases::extract_collocations;

/// Gallium: Scientific sentiment and topic analysis for arXiv.
///
/// Collects paper metadata, scores how confidently results are
/// reported, clusters abstracts into named topics, and renders
/// aggregate reports.
#[derive(Parser)]
#[command(name = "gallium", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch paper metadata from the arXiv API into the corpus
    Collect {
        /// Override the arXiv search query (default: all:semiconductor)
        #[arg(long)]
        query: Option<String>,

        /// Total number of papers to fetch (default: 1000)
        #[arg(long)]
        max_results: Option<usize>,
    },

    /// Normalize abstracts, score sentiment, and fit named topics
    Analyze,

    /// Show frequent technical collocations from the corpus
    Phrases,

    /// Render aggregate charts and write the markdown report
    Report,

    /// Show pipeline status (corpus size, analysis freshness)
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gallium=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Collect { query, max_results } => {
            let config = Config::load()?;
            let query = match query {
                Some(q) => q,
                None => {
                    config.require_query()?;
                    config.query.clone()
                }
            };
            let max_results = max_results.unwrap_or(config.max_results);

            println!(
                "{}",
                format!("Collecting up to {max_results} papers from arXiv...").bold()
            );
            println!("  Query: {query}");

            let client = ArxivClient::new(&config.api_url)?;
            let papers = fetch_papers(
                &client,
                &query,
                max_results,
                config.page_size,
                config.fetch_delay_secs,
            )
            .await?;
            let (total, added) = store::merge_corpus(&config.corpus_path, papers)?;

            println!("\n{}", "Collection complete.".bold());
            println!("  New papers: {added}");
            println!("  Corpus: {total} papers ({})", config.corpus_path);
        }

        Commands::Analyze => {
            let config = Config::load()?;
            config.require_topics()?;
            let papers = load_nonempty_corpus(&config)?;

            println!("{}", format!("Analyzing {} papers...", papers.len()).bold());
            let (rows, summary) = gallium::pipeline::analyze::run(
                &papers,
                config.num_topics,
                config.lda_iterations,
                config.seed,
            )?;

            summary.display();

            store::save_analysis(&config.analysis_path, &rows)?;
            store::save_topic_summary(&config.topics_path, &summary)?;

            println!("\n{}", "Analysis complete.".bold());
            println!("  Rows: {} ({})", rows.len(), config.analysis_path);
            println!(
                "  Topics: {} ({})",
                summary.clusters.len(),
                config.topics_path
            );
            println!("  Next: run `gallium report` for charts and the markdown file");
        }

        Commands::Phrases => {
            let config = Config::load()?;
            let papers = load_nonempty_corpus(&config)?;

            println!(
                "{}",
                format!("Extracting collocations from {} abstracts...", papers.len()).bold()
            );
            let normalizer = Normalizer::new();
            let processed: Vec<String> = papers
                .iter()
                .map(|p| normalizer.normalize(&p.abstract_text))
                .collect();
            let (bigrams, trigrams) = extract_collocations(&processed);
            terminal::display_collocations(&bigrams, &trigrams);
        }

        Commands::Report => {
            let config = Config::load()?;
            let rows = store::load_analysis(&config.analysis_path)?;
            let summary = store::load_topic_summary(&config.topics_path)?;

            terminal::display_sentiment_distribution(&rows);
            terminal::display_topic_distribution(&summary);
            terminal::display_topic_sentiment(&rows, &summary);
            terminal::display_publication_trend(&rows);

            let report_path =
                gallium::output::markdown::generate_report(&rows, &summary, &config.report_path)?;
            println!(
                "\n{}",
                format!("Markdown report saved to: {report_path}").bold()
            );
        }

        Commands::Status => {
            let config = Config::load()?;
            gallium::status::show(&config)?;
        }
    }

    Ok(())
}

/// Load the corpus and refuse to proceed when it has no papers.
fn load_nonempty_corpus(config: &Config) -> Result<Vec<Document>> {
    let papers = store::load_corpus(&config.corpus_path)?;
    if papers.is_empty() {
        anyhow::bail!(
            "Corpus at {} has no papers. Run `gallium collect` first.",
            config.corpus_path
        );
    }
    Ok(papers)
}
