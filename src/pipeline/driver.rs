use chrono::{Duration, Utc};

use crate::config::FeedConfig;
use crate::db::Repository;
use crate::error::Result;
use crate::feed::FeedFetcher;

use super::ingest::FeedIngestor;
use super::matcher::KeywordMatcher;

/// One full monitor run: purge, ingest every configured feed, purge again.
///
/// A failing feed is logged and skipped; only storage errors abort the run.
pub struct Pipeline<'a> {
    repository: &'a Repository,
    fetcher: &'a FeedFetcher,
    matcher: &'a KeywordMatcher,
    feeds: &'a [FeedConfig],
    retention: Duration,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        repository: &'a Repository,
        fetcher: &'a FeedFetcher,
        matcher: &'a KeywordMatcher,
        feeds: &'a [FeedConfig],
        retention_days: u32,
    ) -> Self {
        Self {
            repository,
            fetcher,
            matcher,
            feeds,
            retention: Duration::days(i64::from(retention_days)),
        }
    }

    pub async fn run(&self) -> Result<()> {
        // Purge on both ends of the pass: bounds startup size and post-run
        // size, and a redundant purge deletes nothing.
        self.purge().await?;

        let ingestor = FeedIngestor::new(self.repository, self.matcher);

        for feed in self.feeds {
            match self.fetcher.fetch(&feed.url).await {
                Ok(entries) => {
                    let stats = ingestor.ingest(&feed.name, entries).await?;
                    tracing::info!(
                        "feed {} processed: {} new articles, {} matches",
                        feed.name,
                        stats.new_articles,
                        stats.matched_articles
                    );
                }
                Err(e) => {
                    tracing::error!("failed to fetch feed {} ({}): {}", feed.name, feed.url, e);
                }
            }
        }

        self.purge().await?;

        Ok(())
    }

    async fn purge(&self) -> Result<()> {
        let cutoff = Utc::now() - self.retention;
        let deleted = self.repository.purge_older_than(cutoff).await?;
        if deleted > 0 {
            tracing::info!(
                "purged {} articles older than {} days",
                deleted,
                self.retention.num_days()
            );
        }
        Ok(())
    }
}
