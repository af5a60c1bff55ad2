//! Bounded-timeout HTTP content fetcher.

use std::time::Duration;

use async_trait::async_trait;

use layerhub_core::error::{AppError, ErrorKind};
use layerhub_core::result::AppResult;
use layerhub_core::traits::storage::ContentFetcher;

/// Timeout applied to every content fetch.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Content fetcher backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpContentFetcher {
    client: reqwest::Client,
}

impl HttpContentFetcher {
    /// Create a fetcher with the standard 30-second timeout.
    pub fn new() -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to build HTTP client", e)
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ContentFetcher for HttpContentFetcher {
    async fn fetch_text(&self, url: &str) -> AppResult<Option<String>> {
        let response = self.client.get(url).send().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Content fetch failed for '{url}'"),
                e,
            )
        })?;

        if response.status() != reqwest::StatusCode::OK {
            return Ok(None);
        }

        let body = response.text().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read content body from '{url}'"),
                e,
            )
        })?;

        Ok(Some(body))
    }
}
