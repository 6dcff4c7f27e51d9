//! Harvest orchestration
//!
//! Sequential driver over the pipeline: regions, then each region's layers,
//! then one record build per layer. One request at a time, no overlap;
//! rejected layers are skipped with a warning from the record builder and
//! fetch failures abort the run.

use tracing::info;

use crate::build::RecordBuilder;
use crate::catalog::{CatalogError, Downloader, GeoNodeCatalog};
use crate::config::HarvestConfig;
use crate::models::{DatasetDescriptor, ShowcaseDescriptor};
use crate::publish::{PublishError, Publisher};

/// Error during a harvest-and-publish run
#[derive(Debug, thiserror::Error)]
pub enum HarvestError {
    #[error("Catalog error: {0}")]
    CatalogError(#[from] CatalogError),
    #[error("Publish error: {0}")]
    PublishError(#[from] PublishError),
}

/// Drives a full harvest of one catalog
pub struct Harvester<D: Downloader> {
    catalog: GeoNodeCatalog<D>,
    builder: RecordBuilder,
}

impl<D: Downloader> Harvester<D> {
    pub fn new(config: HarvestConfig, downloader: D) -> Self {
        let catalog = GeoNodeCatalog::new(config.base_url.clone(), downloader);
        Self {
            catalog,
            builder: RecordBuilder::new(config),
        }
    }

    pub fn builder(&self) -> &RecordBuilder {
        &self.builder
    }

    /// Run the full harvest and return the accepted pairs in catalog order
    pub async fn harvest(
        &self,
    ) -> Result<Vec<(DatasetDescriptor, ShowcaseDescriptor)>, CatalogError> {
        let regions = self.catalog.fetch_regions().await?;
        info!("Harvesting {} regions", regions.len());

        let mut results = Vec::new();
        for region in &regions {
            let layers = self.catalog.fetch_layers(&region.code).await?;
            info!("Region {}: {} layers", region.code, layers.len());
            for layer in &layers {
                if let Some(pair) = self
                    .builder
                    .generate_dataset_and_showcase(&region.code, layer)
                {
                    results.push(pair);
                }
            }
        }

        info!("Harvested {} datasets", results.len());
        Ok(results)
    }

    /// Harvest, hand every accepted pair to the publisher, and finish by
    /// letting the publisher prune datasets the harvest no longer produces
    pub async fn harvest_and_publish<P: Publisher>(
        &self,
        publisher: &P,
    ) -> Result<Vec<(DatasetDescriptor, ShowcaseDescriptor)>, HarvestError> {
        let pairs = self.harvest().await?;
        for (dataset, showcase) in &pairs {
            publisher.create_or_update(dataset, showcase).await?;
        }
        let names: Vec<String> = pairs.iter().map(|(dataset, _)| dataset.name.clone()).collect();
        publisher.delete_datasets_not_in(&names).await?;
        Ok(pairs)
    }
}
