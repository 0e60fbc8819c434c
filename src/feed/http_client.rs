//! Minimal HTTP client for one-shot feed retrieval.

use crate::error::FeedError;
use std::time::Duration;

/// Thin wrapper around `reqwest` with a fixed timeout and status checking.
///
/// The pipeline fetches the feed exactly once at startup, so there is no
/// retry, backoff, or connection pooling concern beyond what `reqwest`
/// provides by default.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// GET a URL and return the response body as text.
    ///
    /// Any transport failure or non-success status maps to
    /// [`FeedError::Unreachable`].
    pub async fn get_text(&self, url: &str) -> Result<String, FeedError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FeedError::Unreachable {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::Unreachable {
                url: url.to_string(),
                reason: format!("status {status}"),
            });
        }

        resp.text().await.map_err(|e| FeedError::Unreachable {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}
