//! Common domain type definitions
//!
//! Coordinates, hazard feature attributes and the risk classification
//! types shared by every stage of the lookup.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A WGS84 point in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lon: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Point geometry as the hazard layer expects it: `"<lon>,<lat>"`
    #[must_use]
    pub fn to_point_geometry(&self) -> String {
        format!("{},{}", self.lon, self.lat)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

/// Attributes of the hazard-layer feature intersecting a point
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HazardFeatureAttributes {
    /// Raw flood zone code (`FLD_ZONE`)
    pub zone_code: Option<String>,
    /// Special flood hazard area flag (`SFHA_TF == "T"`)
    pub is_special_hazard_area: bool,
    /// Zone subtype (`ZONE_SUBTY`), informational only
    pub zone_subtype: Option<String>,
}

/// Graded flood risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Special flood hazard area (A and V zones)
    High,
    /// Zone X
    #[serde(rename = "Moderate/Low")]
    ModerateLow,
    /// Zone D
    Undetermined,
    /// No code, unrecognized code, no coverage or failure
    Unknown,
}

impl RiskLevel {
    /// Label used on the wire and in user-facing output
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::ModerateLow => "Moderate/Low",
            Self::Undetermined => "Undetermined",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification of a zone code with guidance for the property owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskProfile {
    pub risk_level: RiskLevel,
    pub summary: &'static str,
    pub insurance_required: bool,
}
