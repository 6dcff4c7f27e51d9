//! Dataset descriptor model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A normalized dataset record ready for the publishing collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatasetDescriptor {
    /// Slugified name, at most 90 characters
    pub name: String,
    pub title: String,
    pub notes: String,
    pub maintainer_id: Uuid,
    pub organization_id: Uuid,
    /// ISO-8601 string taken from the layer record (or from the title when
    /// title-date extraction is enabled); never reformatted here
    pub dataset_date: String,
    pub update_frequency: String,
    pub subnational: bool,
    pub country_code: String,
    pub tags: Vec<String>,
    pub resources: Vec<ResourceDescriptor>,
}

/// One downloadable representation of a dataset.
///
/// Every dataset carries exactly two: the zipped shapefile and the GeoJSON
/// export, both derived from the same WFS typename.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourceDescriptor {
    pub name: String,
    pub url: String,
    pub description: String,
    pub file_type: String,
}
