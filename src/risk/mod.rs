//! Translation of FEMA flood zone codes into user-facing risk profiles.
//!
//! The classifier is total: every input, including `None`, empty or
//! unrecognized codes, yields a profile.

use crate::models::types::{RiskLevel, RiskProfile};

const UNDETERMINED_INPUT_SUMMARY: &str = "Flood risk could not be determined.";

const HIGH_SUMMARY: &str = "This property is located in a high-risk flood area \
with a 1% annual chance of flooding (also known as the 100-year flood zone). \
Flood insurance is typically required for federally backed mortgages.";

const MODERATE_LOW_SUMMARY: &str = "This property is located in a moderate-to-low flood risk area. \
Flood insurance is not federally required but is recommended.";

const UNDETERMINED_SUMMARY: &str = "Flood risk for this property has not been fully determined.";

const UNCLEAR_SUMMARY: &str = "Flood zone classification unclear.";

/// Classify a raw flood zone code
///
/// The code is trimmed and uppercased before matching. Any code starting
/// with `A` or `V` (`AE`, `AH`, `A1-30`, `VE`, ...) is high risk.
#[must_use]
pub fn classify(zone_code: Option<&str>) -> RiskProfile {
    let zone = zone_code.map(str::trim).unwrap_or_default().to_uppercase();

    if zone.is_empty() {
        return profile(RiskLevel::Unknown, UNDETERMINED_INPUT_SUMMARY);
    }

    if zone.starts_with('A') || zone.starts_with('V') {
        return profile(RiskLevel::High, HIGH_SUMMARY);
    }

    match zone.as_str() {
        "X" => profile(RiskLevel::ModerateLow, MODERATE_LOW_SUMMARY),
        "D" => profile(RiskLevel::Undetermined, UNDETERMINED_SUMMARY),
        _ => profile(RiskLevel::Unknown, UNCLEAR_SUMMARY),
    }
}

const fn profile(risk_level: RiskLevel, summary: &'static str) -> RiskProfile {
    RiskProfile {
        risk_level,
        summary,
        insurance_required: matches!(risk_level, RiskLevel::High),
    }
}
