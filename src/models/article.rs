use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A deduplicated, persisted article. One row per unique link; rows are
/// never mutated after insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub link: String,
    pub title: String,
    pub description: String,
    pub published: DateTime<Utc>,
    pub feed_name: String,
    pub matched_keywords: Vec<String>,
    pub processed_at: DateTime<Utc>,
}

impl Article {
    pub fn is_match(&self) -> bool {
        !self.matched_keywords.is_empty()
    }
}
