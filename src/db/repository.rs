use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Row};
use tokio_rusqlite::Connection;

use crate::error::Result;
use crate::models::Article;

use super::schema::SCHEMA;

/// Durable article storage keyed by link.
///
/// All access goes through a single `tokio_rusqlite` connection, which runs
/// every closure sequentially on its own thread. That serializes mutations,
/// so the dedup-check-then-insert sequence can never admit two rows for the
/// same link.
pub struct Repository {
    conn: Connection,
}

impl Repository {
    pub async fn new(db_path: &str) -> Result<Self> {
        let conn = Connection::open(db_path).await?;

        conn.call(|conn| {
            conn.execute_batch(SCHEMA)?;
            Ok(())
        })
        .await?;

        Ok(Self { conn })
    }

    /// Membership check for a link. Cheap pre-filter; `insert_if_absent`
    /// remains the authority on uniqueness.
    pub async fn exists(&self, link: &str) -> Result<bool> {
        let link = link.to_string();
        let exists = self
            .conn
            .call(move |conn| {
                let count: i64 = conn.query_row(
                    "SELECT COUNT(*) FROM articles WHERE link = ?1",
                    params![link],
                    |row| row.get(0),
                )?;
                Ok(count > 0)
            })
            .await?;
        Ok(exists)
    }

    /// Insert an article unless its link is already stored. Returns whether
    /// a row was written; a duplicate link is a silent no-op, never an
    /// overwrite and never an error.
    pub async fn insert_if_absent(&self, article: Article) -> Result<bool> {
        let keywords_json = serde_json::to_string(&article.matched_keywords)?;
        let inserted = self
            .conn
            .call(move |conn| {
                let changed = conn.execute(
                    r#"INSERT OR IGNORE INTO articles
                       (link, title, description, published, feed_name, matched_keywords, processed_at)
                       VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"#,
                    params![
                        article.link,
                        article.title,
                        article.description,
                        format_datetime(article.published),
                        article.feed_name,
                        keywords_json,
                        format_datetime(article.processed_at),
                    ],
                )?;
                Ok(changed > 0)
            })
            .await?;
        Ok(inserted)
    }

    /// Delete every article published before `cutoff` and report how many
    /// rows went away. Compaction afterwards is best-effort housekeeping:
    /// a VACUUM failure is logged and ignored.
    pub async fn purge_older_than(&self, cutoff: DateTime<Utc>) -> Result<usize> {
        let cutoff_text = format_datetime(cutoff);
        let deleted = self
            .conn
            .call(move |conn| {
                let deleted = conn.execute(
                    "DELETE FROM articles WHERE published < ?1",
                    params![cutoff_text],
                )?;
                Ok(deleted)
            })
            .await?;

        if deleted > 0 {
            if let Err(e) = self
                .conn
                .call(|conn| {
                    conn.execute_batch("VACUUM")?;
                    Ok(())
                })
                .await
            {
                tracing::warn!("compaction after purge failed: {}", e);
            }
        }

        Ok(deleted)
    }

    /// Most recent articles, newest first. With `matched_only`, restricted
    /// to articles whose keyword match is non-empty.
    pub async fn query_recent(&self, matched_only: bool, limit: u32) -> Result<Vec<Article>> {
        let articles = self
            .conn
            .call(move |conn| {
                let sql = if matched_only {
                    r#"SELECT link, title, description, published, feed_name, matched_keywords, processed_at
                       FROM articles
                       WHERE matched_keywords != '[]'
                       ORDER BY published DESC
                       LIMIT ?1"#
                } else {
                    r#"SELECT link, title, description, published, feed_name, matched_keywords, processed_at
                       FROM articles
                       ORDER BY published DESC
                       LIMIT ?1"#
                };
                let mut stmt = conn.prepare(sql)?;
                let articles = stmt
                    .query_map(params![limit], |row| Ok(article_from_row(row)))?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(articles)
            })
            .await?;
        Ok(articles)
    }
}

/// Timestamps are stored as RFC 3339 UTC with whole-second precision, so
/// string comparison and `ORDER BY` agree with chronological order.
fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    // Try RFC3339 first (e.g., "2026-01-11T12:34:56Z")
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    // Try SQLite datetime format (e.g., "2026-01-11 12:34:56")
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    None
}

fn article_from_row(row: &Row) -> Article {
    Article {
        link: row.get(0).unwrap(),
        title: row.get(1).unwrap(),
        description: row.get(2).unwrap(),
        published: row
            .get::<_, String>(3)
            .ok()
            .and_then(|s| parse_datetime(&s))
            .unwrap_or_else(Utc::now),
        feed_name: row.get(4).unwrap(),
        matched_keywords: row
            .get::<_, String>(5)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default(),
        processed_at: row
            .get::<_, String>(6)
            .ok()
            .and_then(|s| parse_datetime(&s))
            .unwrap_or_else(Utc::now),
    }
}
