//! Flood-risk lookup for street addresses.
//!
//! Geocodes a free-text address, queries the FEMA National Flood Hazard
//! Layer at the resulting point, and translates the flood zone code into a
//! graded risk profile with guidance for the property owner.

pub mod common;
pub mod config;
pub mod error;
pub mod geocoder;
pub mod hazard;
pub mod lookup;
pub mod models;
pub mod risk;
pub mod utils;

// Re-export the most common types for easier use
pub use common::traits::{Geocoder, HazardZoneResolver, StageFuture};
pub use config::FloodLookupConfig;
pub use error::{LookupError, Result, UpstreamService};
pub use geocoder::ArcGisGeocoder;
pub use hazard::NfhlHazardResolver;
pub use lookup::FloodZoneLookup;
pub use models::{
    Coordinate, HazardFeatureAttributes, LookupOutcome, LookupResult, OUTSIDE_DATA_COVERAGE,
    RiskLevel, RiskProfile,
};
pub use risk::classify;
