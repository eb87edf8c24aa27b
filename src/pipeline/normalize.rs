use chrono::{DateTime, Utc};

use crate::models::RawEntry;

/// Placeholder title for entries that arrive without one.
pub const UNTITLED: &str = "Untitled";

/// Which fallback tier produced the draft's published timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampSource {
    Published,
    Updated,
    IngestionTime,
}

/// A normalized entry, ready for dedup-check and keyword matching.
#[derive(Debug, Clone)]
pub struct ArticleDraft {
    pub link: String,
    pub title: String,
    pub description: String,
    pub published: DateTime<Utc>,
    pub timestamp_source: TimestampSource,
}

/// Turn a raw entry into a canonical draft, or `None` when the entry has no
/// link and therefore no dedup key. Pure: `now` is supplied by the caller
/// and only used when both entry timestamps are absent.
pub fn normalize(entry: RawEntry, now: DateTime<Utc>) -> Option<ArticleDraft> {
    let link = entry.link.filter(|l| !l.trim().is_empty())?;

    let (published, timestamp_source) = match (entry.published, entry.updated) {
        (Some(ts), _) => (ts, TimestampSource::Published),
        (None, Some(ts)) => (ts, TimestampSource::Updated),
        (None, None) => (now, TimestampSource::IngestionTime),
    };

    Some(ArticleDraft {
        link,
        title: entry.title.unwrap_or_else(|| UNTITLED.to_string()),
        description: entry.description.unwrap_or_default(),
        published,
        timestamp_source,
    })
}
