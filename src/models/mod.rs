//! Domain models for the flood lookup

pub mod result;
pub mod types;

pub use result::{LookupOutcome, LookupResult, OUTSIDE_DATA_COVERAGE};
pub use types::{Coordinate, HazardFeatureAttributes, RiskLevel, RiskProfile};
