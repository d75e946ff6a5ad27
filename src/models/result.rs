//! Lookup outcomes and the flattened result returned to callers

use serde::Serialize;

use crate::error::LookupError;
use crate::models::types::{Coordinate, HazardFeatureAttributes, RiskLevel, RiskProfile};
use crate::risk::classify;

/// Zone marker for points outside the hazard dataset's mapped extent
pub const OUTSIDE_DATA_COVERAGE: &str = "OUTSIDE_DATA_COVERAGE";

/// Summary for points outside coverage
pub const OUTSIDE_COVERAGE_SUMMARY: &str =
    "This property is outside FEMA flood hazard coverage areas.";

/// Summary for any failed lookup
pub const ERROR_SUMMARY: &str = "An error occurred while retrieving flood information.";

/// Terminal state of one lookup
#[derive(Debug)]
pub enum LookupOutcome {
    /// A hazard feature was found and classified
    Resolved {
        coordinate: Coordinate,
        attributes: HazardFeatureAttributes,
        profile: RiskProfile,
    },
    /// The address geocoded but no hazard feature covers it
    OutsideCoverage { coordinate: Coordinate },
    /// Geocoding or the hazard query failed
    Errored { error: LookupError },
}

impl LookupOutcome {
    /// Build the resolved state, classifying the feature's zone code
    #[must_use]
    pub fn resolved(coordinate: Coordinate, attributes: HazardFeatureAttributes) -> Self {
        let profile = classify(attributes.zone_code.as_deref());
        Self::Resolved {
            coordinate,
            attributes,
            profile,
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Errored { .. })
    }
}

/// Uniform, serializable result of a flood lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupResult {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinate>,
    pub flood_zone: Option<String>,
    pub sfha: bool,
    pub risk_level: RiskLevel,
    pub summary: String,
    pub insurance_required: bool,
    pub learn_more_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LookupResult {
    /// Flatten an outcome into the caller-facing shape
    #[must_use]
    pub fn from_outcome(address: &str, outcome: LookupOutcome, learn_more_url: &str) -> Self {
        match outcome {
            LookupOutcome::Resolved {
                coordinate,
                attributes,
                profile,
            } => Self {
                address: address.to_string(),
                coordinates: Some(coordinate),
                flood_zone: attributes.zone_code,
                sfha: attributes.is_special_hazard_area,
                risk_level: profile.risk_level,
                summary: profile.summary.to_string(),
                insurance_required: profile.insurance_required,
                learn_more_url: learn_more_url.to_string(),
                error: None,
            },
            LookupOutcome::OutsideCoverage { coordinate } => Self {
                address: address.to_string(),
                coordinates: Some(coordinate),
                flood_zone: Some(OUTSIDE_DATA_COVERAGE.to_string()),
                sfha: false,
                risk_level: RiskLevel::Unknown,
                summary: OUTSIDE_COVERAGE_SUMMARY.to_string(),
                insurance_required: false,
                learn_more_url: learn_more_url.to_string(),
                error: None,
            },
            LookupOutcome::Errored { error } => Self {
                address: address.to_string(),
                coordinates: None,
                flood_zone: None,
                sfha: false,
                risk_level: RiskLevel::Unknown,
                summary: ERROR_SUMMARY.to_string(),
                insurance_required: false,
                learn_more_url: learn_more_url.to_string(),
                error: Some(error.to_string()),
            },
        }
    }

    /// True when the point fell outside the hazard dataset
    #[must_use]
    pub fn is_outside_coverage(&self) -> bool {
        self.flood_zone.as_deref() == Some(OUTSIDE_DATA_COVERAGE)
    }
}
