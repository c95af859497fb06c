// src/feed/types.rs
use crate::error::FeedError;

/// Source of a raw syndication document. The HTTP implementation lives
/// in [`crate::feed::http`]; tests substitute fixture-backed doubles.
#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the feed document as one string, or fail; never partial.
    async fn fetch_document(&self) -> Result<String, FeedError>;

    /// Label for logs (the URL for HTTP sources).
    fn name(&self) -> &str;
}
