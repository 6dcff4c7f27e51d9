//! Region model

use serde::{Deserialize, Serialize};

/// A geographic region (country) known to the catalog.
///
/// Only `code` and `count` are consumed by the pipeline; `count` is null for
/// regions the catalog has never associated a dataset with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Region {
    /// ISO3-like code used to scope layer queries
    pub code: String,
    #[serde(default)]
    pub name: String,
    /// Number of datasets in the region; zero is a valid count
    pub count: Option<u32>,
}
