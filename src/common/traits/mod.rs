//! Common traits used across the codebase
//!
//! This module defines the seams between the lookup orchestrator and its
//! stages.

pub mod stages;

pub use stages::{Geocoder, HazardZoneResolver, StageFuture};
