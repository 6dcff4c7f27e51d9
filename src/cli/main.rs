//! geonode-harvest-cli entry point
//!
//! Runs one sequential harvest against a live catalog, prints a summary, and
//! optionally writes the descriptor pairs to a JSON file for the publishing
//! collaborator to pick up. Publishing itself stays outside this binary: the
//! built-in publisher only logs.

use std::path::PathBuf;

use clap::Parser;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use geonode_harvest_sdk::cli::CliError;
use geonode_harvest_sdk::cli::output::format_summary;
use geonode_harvest_sdk::{HarvestConfig, Harvester, HttpDownloader, LogPublisher};

/// Harvest a GeoNode catalog into dataset and showcase records
#[derive(Parser)]
#[command(name = "geonode-harvest-cli", version, about)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "config/harvest.yml")]
    config: PathBuf,
    /// Override the catalog base URL from the configuration
    #[arg(long)]
    base_url: Option<String>,
    /// Write the harvested descriptor pairs to this JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut config = HarvestConfig::from_yaml_file(&args.config)?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }

    let harvester = Harvester::new(config, HttpDownloader::new());
    let pairs = harvester.harvest_and_publish(&LogPublisher).await?;

    if let Some(path) = &args.output {
        let records: Vec<_> = pairs
            .iter()
            .map(|(dataset, showcase)| json!({"dataset": dataset, "showcase": showcase}))
            .collect();
        let content = serde_json::to_string_pretty(&records)
            .map_err(|e| CliError::SerializationError(e.to_string()))?;
        std::fs::write(path, content)
            .map_err(|e| CliError::FileWriteError(path.clone(), e.to_string()))?;
    }

    println!("{}", format_summary(&pairs));
    Ok(())
}
