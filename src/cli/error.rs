//! CLI error types

use std::path::PathBuf;

use crate::config::ConfigError;
use crate::harvest::HarvestError;

/// Error type for the CLI binary
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Failed to write {0}: {1}")]
    FileWriteError(PathBuf, String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Config error: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("Harvest error: {0}")]
    HarvestError(#[from] HarvestError),
}
