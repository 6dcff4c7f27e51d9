//! HTTP download backend
//!
//! Implements Downloader over a reqwest client. Used when the SDK talks to a
//! live GeoNode instance; tests inject their own Downloader instead.

use async_trait::async_trait;
use serde_json::Value;

use super::{CatalogError, Downloader};

/// Downloader backed by a shared reqwest client
pub struct HttpDownloader {
    client: reqwest::Client,
}

impl HttpDownloader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpDownloader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Downloader for HttpDownloader {
    async fn download(&self, url: &str) -> Result<Value, CatalogError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::NetworkError(format!("Failed to fetch {}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(CatalogError::ApiError(format!(
                "Request to {} failed: {}",
                url,
                response.status()
            )));
        }

        response.json().await.map_err(|e| {
            CatalogError::SerializationError(format!("Failed to parse response from {}: {}", url, e))
        })
    }
}
