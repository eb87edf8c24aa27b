use std::time::Duration;

use feed_rs::parser;
use reqwest::Client;

use crate::error::Result;
use crate::models::RawEntry;

pub struct FeedFetcher {
    client: Client,
}

impl FeedFetcher {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent("feedwatch/1.0")
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch one feed URL and parse it into raw entries. Any failure here
    /// (network, HTTP status, unparsable document) is a per-feed error; the
    /// caller decides whether to continue with other feeds.
    pub async fn fetch(&self, url: &str) -> Result<Vec<RawEntry>> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!("Failed to fetch feed: HTTP {}", response.status()).into());
        }

        let bytes = response.bytes().await?;
        let feed = parser::parse(&bytes[..])?;

        let entries = feed.entries.into_iter().map(raw_entry_from).collect();
        Ok(entries)
    }
}

fn raw_entry_from(entry: feed_rs::model::Entry) -> RawEntry {
    // Prefer the summary, fall back to full content
    let description_html = entry
        .summary
        .map(|s| s.content)
        .or_else(|| entry.content.and_then(|c| c.body));

    // Flatten HTML to plain text so keyword matching sees words, not markup
    let description = description_html
        .and_then(|html| html2text::from_read(html.as_bytes(), 80).ok())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty());

    RawEntry {
        title: entry.title.map(|t| t.content),
        link: entry.links.first().map(|l| l.href.clone()),
        description,
        published: entry.published,
        updated: entry.updated,
    }
}
