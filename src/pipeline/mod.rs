mod driver;
mod ingest;
mod matcher;
mod normalize;

pub use driver::Pipeline;
pub use ingest::{FeedIngestor, IngestStats};
pub use matcher::KeywordMatcher;
pub use normalize::{normalize, ArticleDraft, TimestampSource, UNTITLED};
