//! Flood zone lookup orchestration
//!
//! Sequences geocoding, the hazard-zone query and classification, and folds
//! every outcome into a `LookupResult`. This is the single recovery
//! boundary: stage errors become the errored result shape and are never
//! returned to the caller.

use std::time::Instant;

use futures::future::join_all;

use crate::common::traits::{Geocoder, HazardZoneResolver};
use crate::config::FloodLookupConfig;
use crate::error::Result;
use crate::geocoder::ArcGisGeocoder;
use crate::hazard::NfhlHazardResolver;
use crate::models::{LookupOutcome, LookupResult};
use crate::utils::http::build_client;
use crate::utils::logging::{log_lookup_complete, log_lookup_failure, log_lookup_start};

/// Address to flood-risk lookup over a geocoder and a hazard-zone resolver
#[derive(Debug, Clone)]
pub struct FloodZoneLookup<G = ArcGisGeocoder, H = NfhlHazardResolver> {
    geocoder: G,
    resolver: H,
    learn_more_url: String,
}

impl FloodZoneLookup {
    /// Create a lookup backed by the ArcGIS geocoder and the FEMA hazard layer
    ///
    /// Both stages share one HTTP client carrying the configured timeout.
    pub fn from_config(config: &FloodLookupConfig) -> Result<Self> {
        let client = build_client(config)?;
        Ok(Self::new(
            ArcGisGeocoder::new(client.clone(), config.geocoder_url.as_str()),
            NfhlHazardResolver::new(client, config.hazard_url.as_str()),
            config.learn_more_url.as_str(),
        ))
    }
}

impl<G, H> FloodZoneLookup<G, H>
where
    G: Geocoder,
    H: HazardZoneResolver,
{
    #[must_use]
    pub fn new(geocoder: G, resolver: H, learn_more_url: impl Into<String>) -> Self {
        Self {
            geocoder,
            resolver,
            learn_more_url: learn_more_url.into(),
        }
    }

    /// Link attached to every result
    #[must_use]
    pub fn learn_more_url(&self) -> &str {
        &self.learn_more_url
    }

    /// Run the pipeline and return its typed terminal state
    pub async fn resolve(&self, address: &str) -> LookupOutcome {
        let coordinate = match self.geocoder.geocode(address).await {
            Ok(coordinate) => coordinate,
            Err(error) => {
                log_lookup_failure("geocode", address, &error);
                return LookupOutcome::Errored { error };
            }
        };

        match self.resolver.query_hazard_zone(coordinate).await {
            Ok(Some(attributes)) => LookupOutcome::resolved(coordinate, attributes),
            Ok(None) => LookupOutcome::OutsideCoverage { coordinate },
            Err(error) => {
                log_lookup_failure("hazard zone query", address, &error);
                LookupOutcome::Errored { error }
            }
        }
    }

    /// Look up the flood risk for an address
    ///
    /// Never fails: upstream errors produce a result with `error` set and
    /// an `Unknown` risk level.
    pub async fn lookup(&self, address: &str) -> LookupResult {
        log_lookup_start(address);
        let start = Instant::now();

        let outcome = self.resolve(address).await;
        let result = LookupResult::from_outcome(address, outcome, &self.learn_more_url);

        log_lookup_complete(&result, start.elapsed());
        result
    }

    /// Look up several addresses concurrently, preserving input order
    pub async fn lookup_many<S: AsRef<str>>(&self, addresses: &[S]) -> Vec<LookupResult> {
        join_all(addresses.iter().map(|address| self.lookup(address.as_ref()))).await
    }
}
