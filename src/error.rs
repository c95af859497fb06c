use thiserror::Error;

/// Failures surfaced by [`crate::feed::FeedLoader`]. A load either
/// returns the full item list or one of these; there is no partial
/// result.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("feed returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed feed document: {0}")]
    Parse(String),
}

impl FeedError {
    /// True when the transport failure was the overall request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FeedError::Fetch(e) if e.is_timeout())
    }
}

/// Rejections from the category state transitions.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("category name must not be blank")]
    BlankCategoryName,
}
