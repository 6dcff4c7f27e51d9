//! Harvest configuration
//!
//! Deployment parameters loaded from a YAML file: catalog base URL, the
//! publishing identifiers, extra ignore markers and category overrides.
//! These parameterize the record builder without hard-coding
//! deployment-specific strings into it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Abstract markers that always reject a layer: the first guards against
/// circular ingestion of layers the catalog itself re-published from the
/// target platform, the second against deprecated layers.
pub const BUILTIN_IGNORE_MARKERS: &[&str] = &["Humanitarian Data Exchange", "DEPRECATED"];

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, String),
    #[error("Failed to parse config: {0}")]
    ParseError(String),
}

/// Parameters of one harvest run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Base URL of the GeoNode catalog, without a trailing slash
    pub base_url: String,
    /// Maintainer of the published datasets
    pub maintainer_id: Uuid,
    /// Organization owning the published datasets
    pub organization_id: Uuid,
    /// Prefix prepended to layer titles when deriving dataset names
    #[serde(default = "default_name_prefix")]
    pub name_prefix: String,
    /// Abstract substrings that reject a layer, checked after the built-in
    /// markers
    #[serde(default)]
    pub ignore_data: Vec<String>,
    /// Category tag overrides consulted before the built-in category table
    #[serde(default)]
    pub category_mapping: HashMap<String, String>,
    /// Take the dataset date from a YYYYMMDD token in the title when present
    #[serde(default)]
    pub date_from_title: bool,
}

fn default_name_prefix() -> String {
    "WFP".to_string()
}

impl HarvestConfig {
    /// Create a configuration with default prefix, markers and mappings
    pub fn new(base_url: impl Into<String>, maintainer_id: Uuid, organization_id: Uuid) -> Self {
        Self {
            base_url: base_url.into(),
            maintainer_id,
            organization_id,
            name_prefix: default_name_prefix(),
            ignore_data: Vec::new(),
            category_mapping: HashMap::new(),
            date_from_title: false,
        }
    }

    /// Load a configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e.to_string()))?;
        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Markers checked against layer abstracts, built-ins first
    pub fn ignore_markers(&self) -> impl Iterator<Item = &str> {
        BUILTIN_IGNORE_MARKERS
            .iter()
            .copied()
            .chain(self.ignore_data.iter().map(String::as_str))
    }

    /// First ignore marker contained in the abstract, if any
    pub fn matched_ignore_marker(&self, abstract_text: &str) -> Option<&str> {
        self.ignore_markers()
            .find(|marker| abstract_text.contains(marker))
    }
}
