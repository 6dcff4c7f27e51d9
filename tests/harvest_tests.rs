//! Harvest pipeline tests against a canned in-memory downloader

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};
use uuid::Uuid;

use geonode_harvest_sdk::catalog::{CatalogError, Downloader, GeoNodeCatalog};
use geonode_harvest_sdk::models::{DatasetDescriptor, ShowcaseDescriptor};
use geonode_harvest_sdk::publish::{PublishError, Publisher};
use geonode_harvest_sdk::{HarvestConfig, Harvester};

const BASE_URL: &str = "https://geonode.wfp.org";

/// Downloader serving canned JSON responses keyed by URL
struct CannedDownloader {
    responses: HashMap<String, Value>,
}

impl CannedDownloader {
    fn new(entries: Vec<(&str, Value)>) -> Self {
        Self {
            responses: entries
                .into_iter()
                .map(|(url, body)| (url.to_string(), body))
                .collect(),
        }
    }
}

#[async_trait]
impl Downloader for CannedDownloader {
    async fn download(&self, url: &str) -> Result<Value, CatalogError> {
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| CatalogError::NetworkError(format!("No canned response for {}", url)))
    }
}

fn regions_body() -> Value {
    json!({"objects": [
        {"code": "SSD", "name": "South Sudan", "count": 2},
        {"code": "ETH", "name": "Ethiopia", "count": null},
        {"code": "KEN", "name": "Kenya", "count": 0}
    ]})
}

fn ssd_layers_body() -> Value {
    json!({"objects": [
        {
            "abstract": "Primary and secondary roads of South Sudan",
            "category__gn_description": "Transportation",
            "date": "2019-10-04T09:56:00",
            "detail_url": "/layers/geonode%3Asouth_sudan_roads",
            "id": 10161,
            "owner__username": "kevin.ketchmen",
            "popular_count": 32,
            "srid": "EPSG:4326",
            "supplemental_information": "No information provided",
            "thumbnail_url": "https://geonode.wfp.org/uploaded/thumbs/layer-roads-thumb.png",
            "title": "South Sudan Roads shapefile",
            "uuid": "5509fda2-e0ee-11e9-81cf-005056822e38"
        },
        {
            "abstract": "Boundaries re-published from the Humanitarian Data Exchange",
            "category__gn_description": "Boundaries",
            "date": "2018-03-01T00:00:00",
            "detail_url": "/layers/geonode%3Assd_admin",
            "srid": "EPSG:4326",
            "supplemental_information": "No information provided",
            "thumbnail_url": "https://geonode.wfp.org/uploaded/thumbs/layer-admin-thumb.png",
            "title": "South Sudan admin boundaries"
        },
        {
            "abstract": "DEPRECATED - superseded by the 2020 edition",
            "category__gn_description": null,
            "date": "2016-06-15T00:00:00",
            "detail_url": "/layers/geonode%3Assd_old",
            "srid": "EPSG:4326",
            "supplemental_information": "No information provided",
            "thumbnail_url": "https://geonode.wfp.org/uploaded/thumbs/layer-old-thumb.png",
            "title": "South Sudan old roads"
        }
    ]})
}

fn canned_catalog() -> CannedDownloader {
    CannedDownloader::new(vec![
        ("https://geonode.wfp.org/api/regions", regions_body()),
        (
            "https://geonode.wfp.org/api/layers/?regions__code__in=SSD",
            ssd_layers_body(),
        ),
        (
            "https://geonode.wfp.org/api/layers/?regions__code__in=KEN",
            json!({"objects": []}),
        ),
    ])
}

fn config() -> HarvestConfig {
    HarvestConfig::new(
        BASE_URL,
        Uuid::parse_str("d7a13725-5cb5-48f4-87ac-a70b5cea531e").unwrap(),
        Uuid::parse_str("3ecac442-7fed-448d-8f78-b385ef6f84e7").unwrap(),
    )
}

mod region_tests {
    use super::*;

    #[tokio::test]
    async fn test_null_count_excluded_zero_kept() {
        let catalog = GeoNodeCatalog::new(BASE_URL, canned_catalog());
        let regions = catalog.fetch_regions().await.unwrap();

        let codes: Vec<&str> = regions.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["SSD", "KEN"]);
        assert_eq!(regions[1].count, Some(0));
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        let catalog = GeoNodeCatalog::new(BASE_URL, CannedDownloader::new(vec![]));
        let result = catalog.fetch_regions().await;
        assert!(matches!(result, Err(CatalogError::NetworkError(_))));
    }
}

mod layer_tests {
    use super::*;

    #[tokio::test]
    async fn test_layers_returned_verbatim() {
        let catalog = GeoNodeCatalog::new(BASE_URL, canned_catalog());
        let layers = catalog.fetch_layers("SSD").await.unwrap();

        // No filtering at fetch time: the ineligible layers come back too
        assert_eq!(layers.len(), 3);
        assert_eq!(layers[0].title, "South Sudan Roads shapefile");
        assert_eq!(layers[0].category.as_deref(), Some("Transportation"));
        assert_eq!(layers[2].category, None);
    }

    #[tokio::test]
    async fn test_missing_required_field_fails_loudly() {
        let downloader = CannedDownloader::new(vec![(
            "https://geonode.wfp.org/api/layers/?regions__code__in=SSD",
            json!({"objects": [{"title": "No abstract here"}]}),
        )]);
        let catalog = GeoNodeCatalog::new(BASE_URL, downloader);
        let result = catalog.fetch_layers("SSD").await;
        assert!(matches!(result, Err(CatalogError::SerializationError(_))));
    }

    #[tokio::test]
    async fn test_missing_objects_key_fails() {
        let downloader = CannedDownloader::new(vec![(
            "https://geonode.wfp.org/api/layers/?regions__code__in=SSD",
            json!({"meta": {}}),
        )]);
        let catalog = GeoNodeCatalog::new(BASE_URL, downloader);
        let result = catalog.fetch_layers("SSD").await;
        assert!(matches!(result, Err(CatalogError::SerializationError(_))));
    }
}

mod pipeline_tests {
    use super::*;

    /// Publisher recording what it was handed
    #[derive(Default)]
    struct RecordingPublisher {
        created: Mutex<Vec<String>>,
        kept: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Publisher for RecordingPublisher {
        async fn create_or_update(
            &self,
            dataset: &DatasetDescriptor,
            showcase: &ShowcaseDescriptor,
        ) -> Result<(), PublishError> {
            assert_eq!(dataset.tags, showcase.tags);
            self.created.lock().unwrap().push(dataset.name.clone());
            Ok(())
        }

        async fn delete_datasets_not_in(&self, keep: &[String]) -> Result<(), PublishError> {
            self.kept.lock().unwrap().extend_from_slice(keep);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_harvest_skips_ineligible_layers() {
        let harvester = Harvester::new(config(), canned_catalog());
        let pairs = harvester.harvest().await.unwrap();

        // Three SSD layers, two rejected by their abstracts
        assert_eq!(pairs.len(), 1);
        let (dataset, showcase) = &pairs[0];
        assert_eq!(dataset.name, "wfp-south-sudan-roads-shapefile");
        assert_eq!(dataset.country_code, "SSD");
        assert_eq!(showcase.name, "wfp-south-sudan-roads-shapefile-showcase");
    }

    #[tokio::test]
    async fn test_harvest_and_publish_hands_over_everything() {
        let harvester = Harvester::new(config(), canned_catalog());
        let publisher = RecordingPublisher::default();
        let pairs = harvester.harvest_and_publish(&publisher).await.unwrap();

        let created = publisher.created.lock().unwrap().clone();
        let kept = publisher.kept.lock().unwrap().clone();
        assert_eq!(created, vec!["wfp-south-sudan-roads-shapefile"]);
        assert_eq!(kept, created);
        assert_eq!(pairs.len(), 1);
    }

    #[tokio::test]
    async fn test_layer_fetch_failure_aborts_run() {
        let downloader = CannedDownloader::new(vec![(
            "https://geonode.wfp.org/api/regions",
            regions_body(),
        )]);
        let harvester = Harvester::new(config(), downloader);
        assert!(harvester.harvest().await.is_err());
    }
}
