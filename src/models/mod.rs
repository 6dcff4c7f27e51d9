//! Data model for the harvest pipeline
//!
//! Wire-format records read from the catalog (Region, LayerRecord) and the
//! normalized descriptors handed to the publishing collaborator.

pub mod dataset;
pub mod layer;
pub mod region;
pub mod showcase;

pub use dataset::{DatasetDescriptor, ResourceDescriptor};
pub use layer::LayerRecord;
pub use region::Region;
pub use showcase::ShowcaseDescriptor;
