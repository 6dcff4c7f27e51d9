//! Catalog access
//!
//! Defines the download abstraction and the GeoNode catalog reader built on it:
//! - Downloader: narrow contract for the download collaborator (one GET, JSON body)
//! - GeoNodeCatalog: region and layer fetchers over a Downloader
//! - HttpDownloader: reqwest-backed implementation (feature "api-backend")

use async_trait::async_trait;
use serde_json::Value;

use crate::models::{LayerRecord, Region};

/// Error type for catalog operations
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Catalog API error: {0}")]
    ApiError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for the download collaborator
///
/// The SDK never constructs HTTP clients itself; it issues one GET at a time
/// through this dependency. Retries, timeouts and cancellation are the
/// implementor's business.
#[async_trait]
pub trait Downloader: Send + Sync {
    /// Fetch a URL and return its JSON body
    async fn download(&self, url: &str) -> Result<Value, CatalogError>;
}

/// Reader for the region and layer endpoints of a GeoNode catalog
pub struct GeoNodeCatalog<D: Downloader> {
    base_url: String,
    downloader: D,
}

impl<D: Downloader> GeoNodeCatalog<D> {
    /// Create a catalog reader for a base URL without a trailing slash
    /// (e.g. "https://geonode.wfp.org")
    pub fn new(base_url: impl Into<String>, downloader: D) -> Self {
        Self {
            base_url: base_url.into(),
            downloader,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the regions known to the catalog.
    ///
    /// Regions whose dataset count is null are dropped; a count of zero is
    /// kept. Upstream order is preserved, not re-sorted.
    pub async fn fetch_regions(&self) -> Result<Vec<Region>, CatalogError> {
        let url = format!("{}/api/regions", self.base_url);
        let body = self.downloader.download(&url).await?;
        let regions: Vec<Region> = serde_json::from_value(take_objects(body)?)
            .map_err(|e| CatalogError::SerializationError(format!("Failed to parse regions: {}", e)))?;
        Ok(regions.into_iter().filter(|r| r.count.is_some()).collect())
    }

    /// Fetch the layer records belonging to one region code.
    ///
    /// Returns the `objects` list verbatim. No pagination handling: the
    /// upstream API is assumed to return the full result set in one page.
    pub async fn fetch_layers(&self, country_code: &str) -> Result<Vec<LayerRecord>, CatalogError> {
        let url = format!(
            "{}/api/layers/?regions__code__in={}",
            self.base_url, country_code
        );
        let body = self.downloader.download(&url).await?;
        serde_json::from_value(take_objects(body)?)
            .map_err(|e| CatalogError::SerializationError(format!("Failed to parse layers: {}", e)))
    }
}

/// Pull the `objects` list out of a catalog response envelope
fn take_objects(mut body: Value) -> Result<Value, CatalogError> {
    match body.get_mut("objects") {
        Some(objects) => Ok(objects.take()),
        None => Err(CatalogError::SerializationError(
            "Missing 'objects' key in catalog response".to_string(),
        )),
    }
}

#[cfg(feature = "api-backend")]
pub mod http;
