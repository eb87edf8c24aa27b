use std::time::Duration;

use feedwatch::config::Config;
use feedwatch::db::Repository;
use feedwatch::error::Result;
use feedwatch::feed::FeedFetcher;
use feedwatch::pipeline::{KeywordMatcher, Pipeline};
use feedwatch::report;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        tracing::error!("run failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    // Check for --report-only flag (re-render the report without ingesting)
    let report_only = args.len() >= 2 && args[1] == "--report-only";

    // Load configuration
    let config = Config::load()?;

    if config.feeds.is_empty() {
        tracing::warn!(
            "no feeds configured; edit {}",
            Config::config_path().display()
        );
    }

    let repository = Repository::new(&config.db_path).await?;
    let matcher = KeywordMatcher::new(&config.keywords)?;

    if !report_only {
        let fetcher = FeedFetcher::new(Duration::from_secs(config.fetch_timeout_secs));
        let pipeline = Pipeline::new(
            &repository,
            &fetcher,
            &matcher,
            &config.feeds,
            config.retention_days,
        );
        pipeline.run().await?;
    }

    report::render(&repository, &config).await?;

    Ok(())
}
