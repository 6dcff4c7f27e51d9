//! CLI module for the geonode-harvest-cli binary

#[cfg(feature = "cli")]
pub mod error;
#[cfg(feature = "cli")]
pub mod output;

#[cfg(feature = "cli")]
pub use error::CliError;
