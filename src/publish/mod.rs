//! Publishing seam
//!
//! The SDK produces descriptors; pushing them into the target open-data
//! platform (create/update, country and tag vocabulary validation, stale
//! dataset deletion) belongs to an implementation of Publisher supplied by
//! the caller.

use async_trait::async_trait;
use tracing::info;

use crate::models::{DatasetDescriptor, ShowcaseDescriptor};

/// Error during publishing
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Publish error: {0}")]
    PublishError(String),
}

/// Trait for the publishing collaborator
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Create or update one dataset together with its paired showcase
    async fn create_or_update(
        &self,
        dataset: &DatasetDescriptor,
        showcase: &ShowcaseDescriptor,
    ) -> Result<(), PublishError>;

    /// Delete previously published datasets whose names are not in `keep`
    async fn delete_datasets_not_in(&self, keep: &[String]) -> Result<(), PublishError>;
}

/// Publisher that only logs what it would do. Used for dry runs and as the
/// CLI default when no platform credentials are wired in.
pub struct LogPublisher;

#[async_trait]
impl Publisher for LogPublisher {
    async fn create_or_update(
        &self,
        dataset: &DatasetDescriptor,
        showcase: &ShowcaseDescriptor,
    ) -> Result<(), PublishError> {
        info!("Dataset date is {}", dataset.dataset_date);
        info!(
            "Would create or update dataset {} with showcase {}",
            dataset.name, showcase.name
        );
        Ok(())
    }

    async fn delete_datasets_not_in(&self, keep: &[String]) -> Result<(), PublishError> {
        info!(
            "Would delete datasets other than the {} just harvested",
            keep.len()
        );
        Ok(())
    }
}
