//! Logging utilities
//!
//! This module provides standardized logging functions for lookups.

use std::time::Duration;

use crate::error::LookupError;
use crate::models::LookupResult;

/// Log a lookup start with consistent format
///
/// # Arguments
/// * `address` - The address being looked up
pub fn log_lookup_start(address: &str) {
    log::info!("Looking up flood zone for {address:?}");
}

/// Log a lookup completion with consistent format
///
/// # Arguments
/// * `result` - The finished lookup
/// * `elapsed` - Time spent on the lookup
pub fn log_lookup_complete(result: &LookupResult, elapsed: Duration) {
    match &result.error {
        Some(error) => log::warn!(
            "Lookup for {:?} failed in {:?}: {}",
            result.address,
            elapsed,
            error
        ),
        None => log::info!(
            "Lookup for {:?} completed in {:?}: zone {}, risk {}",
            result.address,
            elapsed,
            result.flood_zone.as_deref().unwrap_or("none"),
            result.risk_level
        ),
    }
}

/// Log a stage failure
///
/// # Arguments
/// * `stage` - Name of the failing stage
/// * `address` - The address being looked up
/// * `error` - The stage's error
pub fn log_lookup_failure(stage: &str, address: &str, error: &LookupError) {
    log::debug!("{stage} failed for {address:?}: {error:?}");
}
