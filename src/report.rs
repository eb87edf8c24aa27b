use crate::config::Config;
use crate::db::Repository;
use crate::error::Result;
use crate::models::Article;

/// Query the store read-only and write the static HTML report.
pub async fn render(repository: &Repository, config: &Config) -> Result<()> {
    let matched = repository.query_recent(true, config.report_limit).await?;
    let recent = repository.query_recent(false, config.report_limit).await?;

    let html = render_html(&matched, &recent, config);
    std::fs::write(&config.report_path, html)?;

    tracing::info!(
        "report written to {} ({} matches, {} recent)",
        config.report_path,
        matched.len(),
        recent.len()
    );
    Ok(())
}

fn render_html(matched: &[Article], recent: &[Article], config: &Config) -> String {
    let feed_names: Vec<&str> = config.feeds.iter().map(|f| f.name.as_str()).collect();

    let mut html = format!(
        r#"<html>
<head>
    <title>Feed Monitor</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 20px; }}
        table {{ border-collapse: collapse; width: 100%; margin-bottom: 30px; }}
        th, td {{ border: 1px solid #ddd; padding: 8px; text-align: left; }}
        th {{ background-color: #f2f2f2; }}
        tr:nth-child(even) {{ background-color: #f9f9f9; }}
        h2 {{ color: #333; margin-top: 30px; }}
    </style>
</head>
<body>
    <h1>Feed Monitor</h1>
    <p>Monitoring feeds: {}</p>
    <p>Keywords: {}</p>

    <h2>Keyword Matches</h2>
    <table>
        <tr>
            <th>Title</th>
            <th>Feed</th>
            <th>Published</th>
            <th>Keywords Matched</th>
            <th>Processed</th>
        </tr>
"#,
        escape_html(&feed_names.join(", ")),
        escape_html(&config.keywords.join(", "))
    );

    for article in matched {
        html.push_str(&format!(
            r#"        <tr>
            <td><a href="{}" target="_blank">{}</a></td>
            <td>{}</td>
            <td>{}</td>
            <td>{}</td>
            <td>{}</td>
        </tr>
"#,
            escape_html(&article.link),
            escape_html(&article.title),
            escape_html(&article.feed_name),
            article.published.format("%Y-%m-%d %H:%M"),
            escape_html(&article.matched_keywords.join(", ")),
            article.processed_at.format("%Y-%m-%d %H:%M"),
        ));
    }

    html.push_str(
        r#"    </table>

    <h2>All Recent Articles</h2>
    <table>
        <tr>
            <th>Title</th>
            <th>Feed</th>
            <th>Published</th>
            <th>Processed</th>
        </tr>
"#,
    );

    for article in recent {
        html.push_str(&format!(
            r#"        <tr>
            <td><a href="{}" target="_blank">{}</a></td>
            <td>{}</td>
            <td>{}</td>
            <td>{}</td>
        </tr>
"#,
            escape_html(&article.link),
            escape_html(&article.title),
            escape_html(&article.feed_name),
            article.published.format("%Y-%m-%d %H:%M"),
            article.processed_at.format("%Y-%m-%d %H:%M"),
        ));
    }

    html.push_str(
        r#"    </table>
</body>
</html>
"#,
    );

    html
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
