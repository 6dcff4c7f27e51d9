//! Record building
//!
//! Maps one accepted layer record into a dataset descriptor and its paired
//! showcase, including the derived WFS export URLs. Pure function of the
//! layer, the configuration and the static classification tables, with two
//! early-exit rejection branches.

use std::collections::HashSet;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

use crate::classify::classify;
use crate::config::HarvestConfig;
use crate::models::{DatasetDescriptor, LayerRecord, ResourceDescriptor, ShowcaseDescriptor};

/// Hard cut applied to dataset name slugs
const MAX_SLUG_LENGTH: usize = 90;

/// Fixed update frequency for harvested datasets
const UPDATE_FREQUENCY: &str = "Adhoc";

/// Supplemental information starting with this (case-insensitively) carries
/// no content and is not appended to the notes
const NO_INFO_PREFIX: &str = "no info";

static TITLE_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{8}\b").expect("title date pattern"));

/// Builds dataset and showcase descriptors from layer records
pub struct RecordBuilder {
    config: HarvestConfig,
}

impl RecordBuilder {
    pub fn new(config: HarvestConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HarvestConfig {
        &self.config
    }

    /// Build the descriptor pair for one layer.
    ///
    /// Returns `None` for ineligible layers (abstract matches an ignore
    /// marker), logging a warning naming the title. The pair is
    /// both-or-nothing: an accepted layer always yields both descriptors,
    /// sharing the same tag list.
    pub fn generate_dataset_and_showcase(
        &self,
        country_code: &str,
        layer: &LayerRecord,
    ) -> Option<(DatasetDescriptor, ShowcaseDescriptor)> {
        let title = &layer.title;
        if let Some(marker) = self.config.matched_ignore_marker(&layer.abstract_text) {
            warn!("Ignoring {}: abstract contains '{}'", title, marker);
            return None;
        }
        info!("Creating dataset: {}", title);

        let mut notes = layer.abstract_text.clone();
        if !layer
            .supplemental_information
            .to_lowercase()
            .starts_with(NO_INFO_PREFIX)
        {
            notes = format!("{}\n\n{}", notes, layer.supplemental_information);
        }

        let slugified_name = truncate_slug(
            &slug::slugify(format!("{} {}", self.config.name_prefix, title)),
            MAX_SLUG_LENGTH,
        );

        let dataset_date = if self.config.date_from_title {
            date_from_title(title).unwrap_or_else(|| layer.date.clone())
        } else {
            layer.date.clone()
        };

        // The classifier may emit duplicates; collapse them here, first
        // occurrence wins.
        let mut seen = HashSet::new();
        let tags: Vec<String> = classify(
            title,
            &notes,
            layer.category.as_deref(),
            &self.config.category_mapping,
        )
        .into_iter()
        .filter(|tag| seen.insert(tag.clone()))
        .collect();

        // The WFS typename is the trailing path segment, kept percent-encoded
        let typename = layer.detail_url.rsplit('/').next().unwrap_or(&layer.detail_url);
        let srid = quote_plus(&layer.srid);
        let base_url = &self.config.base_url;

        let resources = vec![
            ResourceDescriptor {
                name: format!("{} shapefile", title),
                url: format!(
                    "{}/geoserver/wfs?format_options=charset:UTF-8&typename={}&outputFormat=SHAPE-ZIP&version=1.0.0&service=WFS&request=GetFeature",
                    base_url, typename
                ),
                description: format!("Zipped Shapefile. {}", notes),
                file_type: "zipped shapefile".to_string(),
            },
            ResourceDescriptor {
                name: format!("{} geojson", title),
                url: format!(
                    "{}/geoserver/wfs?srsName={}&typename={}&outputFormat=json&version=1.0.0&service=WFS&request=GetFeature",
                    base_url, srid, typename
                ),
                description: format!("GeoJSON file. {}", notes),
                file_type: "GeoJSON".to_string(),
            },
        ];

        let dataset = DatasetDescriptor {
            name: slugified_name.clone(),
            title: title.clone(),
            notes: notes.clone(),
            maintainer_id: self.config.maintainer_id,
            organization_id: self.config.organization_id,
            dataset_date,
            update_frequency: UPDATE_FREQUENCY.to_string(),
            subnational: true,
            country_code: country_code.to_string(),
            tags: tags.clone(),
            resources,
        };

        let showcase = ShowcaseDescriptor {
            name: format!("{}-showcase", slugified_name),
            title: title.clone(),
            notes,
            url: format!("{}{}", base_url, layer.detail_url),
            image_url: layer.thumbnail_url.clone(),
            tags,
        };

        Some((dataset, showcase))
    }
}

/// Hard cut at `max` characters, not word-boundary aware
fn truncate_slug(slug: &str, max: usize) -> String {
    slug.chars().take(max).collect()
}

/// Encode a query-string value the way Python's quote_plus does: spaces
/// become '+', other reserved characters are percent-encoded
fn quote_plus(value: &str) -> String {
    urlencoding::encode(value).replace("%20", "+")
}

/// Last valid YYYYMMDD token in the title, reformatted as YYYY-MM-DD
fn date_from_title(title: &str) -> Option<String> {
    TITLE_DATE
        .find_iter(title)
        .filter_map(|m| NaiveDate::parse_from_str(m.as_str(), "%Y%m%d").ok())
        .last()
        .map(|date| date.format("%Y-%m-%d").to_string())
}
