use chrono::{DateTime, Utc};

/// One raw item from a feed, before normalization. Every field is
/// independently optional; timestamps that failed to parse upstream
/// arrive here as `None`.
#[derive(Debug, Clone, Default)]
pub struct RawEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
    pub published: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
}
