//! Output formatting for CLI

use crate::models::{DatasetDescriptor, ShowcaseDescriptor};

/// Format a harvest run summary
pub fn format_summary(pairs: &[(DatasetDescriptor, ShowcaseDescriptor)]) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n✅ Harvested {} dataset(s):\n", pairs.len()));
    for (idx, (dataset, showcase)) in pairs.iter().enumerate() {
        output.push_str(&format!("\nDataset {}: {}\n", idx + 1, dataset.name));
        output.push_str(&format!("  Title: {}\n", dataset.title));
        output.push_str(&format!("  Date: {}\n", dataset.dataset_date));
        output.push_str(&format!("  Country: {}\n", dataset.country_code));
        output.push_str(&format!("  Tags: {}\n", dataset.tags.join(", ")));
        output.push_str(&format!("  Resources: {}\n", dataset.resources.len()));
        output.push_str(&format!("  Showcase: {}\n", showcase.name));
    }

    output
}
