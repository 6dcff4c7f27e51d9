//! Showcase descriptor model

use serde::{Deserialize, Serialize};

/// A promotional record paired 1:1 with a dataset, linking back to the
/// layer's catalog page and thumbnail. Shares the dataset's tags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShowcaseDescriptor {
    /// Dataset slug with a "-showcase" suffix
    pub name: String,
    pub title: String,
    pub notes: String,
    pub url: String,
    pub image_url: String,
    pub tags: Vec<String>,
}
