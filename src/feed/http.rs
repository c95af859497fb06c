// src/feed/http.rs
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::FeedError;
use crate::feed::types::FeedSource;

/// Fetches a feed document over HTTP(S) with an overall request
/// timeout. Every call re-fetches; there is no conditional logic.
pub struct HttpFeedSource {
    url: String,
    client: Client,
}

impl HttpFeedSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FeedError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    /// Share an existing reqwest client (one client per process is
    /// enough; reqwest pools connections internally).
    pub fn with_client(url: impl Into<String>, client: Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch_document(&self) -> Result<String, FeedError> {
        tracing::debug!(url = %self.url, "fetching feed");

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status));
        }

        Ok(response.text().await?)
    }

    fn name(&self) -> &str {
        &self.url
    }
}
