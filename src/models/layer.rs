//! Layer model
//!
//! One raw catalog entry as served by the GeoNode layers API. Field names
//! follow the upstream JSON wire format; missing required fields fail at
//! deserialization rather than being defaulted, since the upstream API
//! contract guarantees them.

use serde::Deserialize;

/// A single geospatial dataset entry in the source catalog.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LayerRecord {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Human-readable category description; null for uncategorized layers
    #[serde(rename = "category__gn_description")]
    pub category: Option<String>,
    /// ISO-8601 timestamp, passed through to the dataset date unmodified
    pub date: String,
    /// Relative path to the layer's catalog page; its final segment is the
    /// WFS typename
    pub detail_url: String,
    pub supplemental_information: String,
    pub thumbnail_url: String,
    /// Spatial reference identifier, e.g. "EPSG:4326"
    pub srid: String,

    // Catalog-internal fields, not used downstream
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(rename = "owner__username", default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub popular_count: Option<i64>,
}
