pub const SCHEMA: &str = r#"
-- articles table: one row per unique link, immutable after insert
CREATE TABLE IF NOT EXISTS articles (
    link TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    published TEXT NOT NULL,
    feed_name TEXT NOT NULL,
    matched_keywords TEXT NOT NULL DEFAULT '[]',
    processed_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_articles_published ON articles(published DESC);
"#;
