//! GeoNode Harvest SDK - transforms GeoNode catalog metadata into open-data records
//!
//! Provides the pieces of a sequential harvest pipeline:
//! - Catalog access (regions and layers, via an injected downloader)
//! - Tag classification from category and free-text heuristics
//! - Dataset and showcase record building
//! - Harvest orchestration and the publishing seam
//!
//! The SDK produces descriptors; pushing them into the target platform is the
//! job of a [`publish::Publisher`] implementation supplied by the caller.

pub mod build;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod harvest;
pub mod models;
pub mod publish;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used types
pub use catalog::{CatalogError, Downloader, GeoNodeCatalog};
#[cfg(feature = "api-backend")]
pub use catalog::http::HttpDownloader;

pub use build::RecordBuilder;
pub use classify::classify;
pub use config::{ConfigError, HarvestConfig};
pub use harvest::{HarvestError, Harvester};
pub use publish::{LogPublisher, PublishError, Publisher};

// Re-export models
pub use models::{DatasetDescriptor, LayerRecord, Region, ResourceDescriptor, ShowcaseDescriptor};
