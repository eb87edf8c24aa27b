use chrono::Utc;

use crate::db::Repository;
use crate::error::Result;
use crate::models::{Article, RawEntry};

use super::matcher::KeywordMatcher;
use super::normalize::{normalize, TimestampSource};

/// Per-feed ingestion counts, for logging.
#[derive(Debug, Default, Clone, Copy)]
pub struct IngestStats {
    pub new_articles: usize,
    pub matched_articles: usize,
}

/// Runs one feed's entries through normalize → dedup-check → match → insert.
///
/// Store errors propagate (they are fatal for the run); everything else is
/// per-entry best effort — an unprocessable entry is skipped and the rest of
/// the feed is still ingested.
pub struct FeedIngestor<'a> {
    repository: &'a Repository,
    matcher: &'a KeywordMatcher,
}

impl<'a> FeedIngestor<'a> {
    pub fn new(repository: &'a Repository, matcher: &'a KeywordMatcher) -> Self {
        Self {
            repository,
            matcher,
        }
    }

    pub async fn ingest(&self, feed_name: &str, entries: Vec<RawEntry>) -> Result<IngestStats> {
        let mut stats = IngestStats::default();

        for entry in entries {
            let now = Utc::now();

            let Some(draft) = normalize(entry, now) else {
                tracing::debug!("skipping entry without link in feed {}", feed_name);
                continue;
            };

            if draft.timestamp_source != TimestampSource::Published {
                tracing::debug!(
                    "no published time for {}, using {:?}",
                    draft.link,
                    draft.timestamp_source
                );
            }

            if self.repository.exists(&draft.link).await? {
                tracing::debug!("article already exists: {}", draft.link);
                continue;
            }

            let text = format!("{} {}", draft.title, draft.description);
            let matched_keywords = self.matcher.matches(&text);

            let article = Article {
                link: draft.link,
                title: draft.title,
                description: draft.description,
                published: draft.published,
                feed_name: feed_name.to_string(),
                matched_keywords,
                processed_at: now,
            };

            let is_match = article.is_match();
            let title = article.title.clone();

            if self.repository.insert_if_absent(article).await? {
                stats.new_articles += 1;
                if is_match {
                    stats.matched_articles += 1;
                    tracing::info!("keyword match in {}: {}", feed_name, title);
                }
            }
        }

        Ok(stats)
    }
}
