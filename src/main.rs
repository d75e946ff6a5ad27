//! Command-line flood-risk lookup
//!
//! Usage:
//!   flood-risk "1600 Pennsylvania Ave, Washington DC"
//!   flood-risk --pretty "addr one" "addr two"

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use futures::FutureExt;
use futures::future::join_all;

use flood_risk::utils::logging::{create_lookup_progress_bar, finish_progress_bar};
use flood_risk::{FloodLookupConfig, FloodZoneLookup, LookupResult};

/// Look up the FEMA flood zone and risk profile for street addresses
#[derive(Parser, Debug)]
#[command(name = "flood-risk")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Addresses to look up
    #[arg(required = true)]
    addresses: Vec<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Geocoder endpoint override
    #[arg(long)]
    geocoder_url: Option<String>,

    /// Hazard layer endpoint override
    #[arg(long)]
    hazard_url: Option<String>,
}

impl Cli {
    fn config(&self) -> FloodLookupConfig {
        let mut config = FloodLookupConfig::from_env();
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(url) = &self.geocoder_url {
            config = config.with_geocoder_url(url.as_str());
        }
        if let Some(url) = &self.hazard_url {
            config = config.with_hazard_url(url.as_str());
        }
        config
    }
}

async fn run_batch(lookup: &FloodZoneLookup, addresses: &[String]) -> Vec<LookupResult> {
    let pb = create_lookup_progress_bar(addresses.len() as u64, Some("looking up"));
    let results = join_all(
        addresses
            .iter()
            .map(|address| lookup.lookup(address).inspect(|_| pb.inc(1))),
    )
    .await;
    finish_progress_bar(&pb, Some("done"));
    results
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = cli.config();
    log::debug!("Using configuration: {config:?}");

    let lookup = FloodZoneLookup::from_config(&config).context("Failed to set up flood lookup")?;

    let results = if cli.addresses.len() > 1 {
        run_batch(&lookup, &cli.addresses).await
    } else {
        lookup.lookup_many(cli.addresses.as_slice()).await
    };

    for result in &results {
        let line = if cli.pretty {
            serde_json::to_string_pretty(result)
        } else {
            serde_json::to_string(result)
        }
        .context("Failed to serialize lookup result")?;
        println!("{line}");
    }

    Ok(())
}
