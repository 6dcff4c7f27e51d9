//! Tag classification
//!
//! Derives subject tags for a layer from its category description and from
//! substring heuristics over its title and notes. The category map and the
//! rule table are fixed lookup data; deployment-specific category overrides
//! come in through the harvest configuration.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Base tag attached to every layer
pub const BASE_TAG: &str = "geodata";

/// Category descriptions mapped onto controlled-vocabulary tags.
/// Categories absent from this table pass through as tags unchanged.
static CATEGORY_TAGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Elevation", "elevation - topography - altitude"),
        ("Boundaries", "geodata"),
        ("Location", "populated places - settlements"),
        ("Transportation", "transportation"),
        ("Structure", "facilities and infrastructure"),
        ("Environment", "environment"),
        ("Inland Waters", "river"),
        (
            "Physical Features, Land Cover, Land Use, DEM",
            "land use and land cover",
        ),
        ("Farming", "food production"),
        ("Natural Hazards", "hazards and risk"),
    ])
});

/// One substring-presence rule. Matches when at least one `any` needle (if
/// given) and every `all` needle is present, and no `none` needle is.
struct TagRule {
    any: &'static [&'static str],
    all: &'static [&'static str],
    none: &'static [&'static str],
    tags: &'static [&'static str],
}

impl TagRule {
    fn matches(&self, text: &str) -> bool {
        (self.any.is_empty() || self.any.iter().any(|n| text.contains(n)))
            && self.all.iter().all(|n| text.contains(n))
            && !self.none.iter().any(|n| text.contains(n))
    }
}

const NONE: &[&str] = &[];

/// Ordered rule table applied to the lowercased "title notes" text.
/// Rules are independent; order only determines emission order, never set
/// membership. Note "malnutrition" contains "nutrition" as a substring, so
/// the plain nutrition rule must exclude it.
static TAG_RULES: &[TagRule] = &[
    TagRule { any: &["land cover", "forest"], all: NONE, none: NONE, tags: &["land use and land cover"] },
    TagRule { any: &["landslide"], all: NONE, none: NONE, tags: &["landslides"] },
    TagRule { any: &["flood"], all: NONE, none: NONE, tags: &["floods"] },
    TagRule { any: &["drought"], all: NONE, none: NONE, tags: &["drought"] },
    TagRule { any: &["ffa", "food for assets"], all: NONE, none: NONE, tags: &["food assistance"] },
    TagRule { any: &["emergency levels"], all: NONE, none: NONE, tags: &["hazards and risk"] },
    TagRule { any: NONE, all: &["admin", "boundaries"], none: NONE, tags: &["administrative divisions"] },
    TagRule { any: NONE, all: &["security", "food"], none: NONE, tags: &["food security"] },
    TagRule { any: NONE, all: &["security"], none: &["food"], tags: &["security"] },
    TagRule { any: NONE, all: &["refugee", "camp"], none: NONE, tags: &["displaced persons locations - camps - shelters"] },
    TagRule { any: &["refugee"], all: NONE, none: NONE, tags: &["refugees"] },
    TagRule { any: NONE, all: &["idp", "camp"], none: NONE, tags: &["displaced persons locations - camps - shelters"] },
    TagRule { any: &["idp"], all: NONE, none: NONE, tags: &["internally displaced persons - idp"] },
    TagRule { any: &["malnutrition"], all: NONE, none: NONE, tags: &["malnutrition"] },
    TagRule { any: NONE, all: &["nutrition"], none: &["malnutrition"], tags: &["nutrition"] },
    TagRule { any: &["food distribution"], all: NONE, none: NONE, tags: &["food assistance"] },
    TagRule { any: &["streets", "roads"], all: NONE, none: NONE, tags: &["roads", "transportation"] },
    TagRule { any: &["airport", "airstrip"], all: NONE, none: NONE, tags: &["aviation", "facilities and infrastructure"] },
    TagRule { any: &["bridges"], all: NONE, none: NONE, tags: &["bridges", "transportation", "facilities and infrastructure"] },
    TagRule { any: &["frost"], all: NONE, none: NONE, tags: &["cold wave"] },
    TagRule { any: &["erosion", "mudflow", "mudslide"], all: NONE, none: NONE, tags: &["mudslide"] },
];

/// Derive the tag list for a layer.
///
/// `notes` is the post-augmentation notes text, not the raw abstract.
/// Returns tags in emission order and may contain duplicates (two rules can
/// add the same tag); the record builder deduplicates before attaching them
/// to descriptors.
pub fn classify(
    title: &str,
    notes: &str,
    category: Option<&str>,
    overrides: &HashMap<String, String>,
) -> Vec<String> {
    let mut tags = vec![BASE_TAG.to_string(), category_tag(category, overrides)];
    let text = format!("{} {}", title, notes).to_lowercase();
    for rule in TAG_RULES {
        if rule.matches(&text) {
            tags.extend(rule.tags.iter().map(|t| (*t).to_string()));
        }
    }
    tags
}

/// Map a category description onto its tag.
///
/// Overrides win over the built-in table; unknown categories pass through
/// unchanged. An absent category becomes an empty tag, matching the source
/// catalog's behaviour; filtering it out is left to the publishing side's
/// vocabulary validation.
fn category_tag(category: Option<&str>, overrides: &HashMap<String, String>) -> String {
    let Some(category) = category else {
        return String::new();
    };
    if let Some(tag) = overrides.get(category) {
        return tag.clone();
    }
    match CATEGORY_TAGS.get(category) {
        Some(tag) => (*tag).to_string(),
        None => category.to_string(),
    }
}
