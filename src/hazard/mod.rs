//! FEMA National Flood Hazard Layer client
//!
//! Runs a point-intersection query against the flood hazard zones layer,
//! asking only for the zone attributes and no geometry.

use reqwest::Client;
use serde::Deserialize;

use crate::common::traits::{HazardZoneResolver, StageFuture};
use crate::error::{LookupError, Result, UpstreamService};
use crate::models::types::{Coordinate, HazardFeatureAttributes};
use crate::utils::http::{ServiceError, get_json};

/// Attribute fields requested from the layer
pub const OUT_FIELDS: &str = "FLD_ZONE,SFHA_TF,ZONE_SUBTY";

/// Layer query response body
#[derive(Debug, Deserialize)]
pub struct HazardQueryResponse {
    #[serde(default)]
    pub features: Option<Vec<Feature>>,
    #[serde(default)]
    pub error: Option<ServiceError>,
}

/// One intersecting feature
#[derive(Debug, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub attributes: Option<RawAttributes>,
}

/// Attributes as named by the NFHL schema
#[derive(Debug, Default, Deserialize)]
pub struct RawAttributes {
    #[serde(rename = "FLD_ZONE", default)]
    pub fld_zone: Option<String>,
    #[serde(rename = "SFHA_TF", default)]
    pub sfha_tf: Option<String>,
    #[serde(rename = "ZONE_SUBTY", default)]
    pub zone_subty: Option<String>,
}

impl From<RawAttributes> for HazardFeatureAttributes {
    fn from(raw: RawAttributes) -> Self {
        Self {
            is_special_hazard_area: raw.sfha_tf.as_deref() == Some("T"),
            zone_code: raw.fld_zone,
            zone_subtype: raw.zone_subty,
        }
    }
}

impl HazardQueryResponse {
    /// Attributes of the first feature, or `None` outside coverage
    pub fn into_attributes(self) -> Result<Option<HazardFeatureAttributes>> {
        if let Some(error) = self.error {
            return Err(error.into_error(UpstreamService::HazardLayer));
        }

        let features = self.features.unwrap_or_default();
        if features.len() > 1 {
            log::debug!(
                "{} hazard features intersect the point, using the first",
                features.len()
            );
        }

        let Some(feature) = features.into_iter().next() else {
            return Ok(None);
        };

        feature
            .attributes
            .map(|raw| Some(raw.into()))
            .ok_or_else(|| {
                LookupError::malformed(UpstreamService::HazardLayer, "feature has no attributes")
            })
    }
}

/// Hazard zone resolver backed by the NFHL MapServer query endpoint
#[derive(Debug, Clone)]
pub struct NfhlHazardResolver {
    client: Client,
    url: String,
}

impl NfhlHazardResolver {
    #[must_use]
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    async fn fetch(&self, coordinate: Coordinate) -> Result<Option<HazardFeatureAttributes>> {
        let geometry = coordinate.to_point_geometry();
        let params = [
            ("geometry", geometry.as_str()),
            ("geometryType", "esriGeometryPoint"),
            ("inSR", "4326"),
            ("spatialRel", "esriSpatialRelIntersects"),
            ("outFields", OUT_FIELDS),
            ("returnGeometry", "false"),
            ("f", "json"),
        ];

        let response: HazardQueryResponse =
            get_json(&self.client, &self.url, &params, UpstreamService::HazardLayer).await?;
        let attributes = response.into_attributes()?;

        match &attributes {
            Some(attrs) => log::debug!(
                "Hazard zone at {coordinate}: {:?} (SFHA: {}, subtype: {:?})",
                attrs.zone_code,
                attrs.is_special_hazard_area,
                attrs.zone_subtype
            ),
            None => log::debug!("No hazard feature at {coordinate}"),
        }
        Ok(attributes)
    }
}

impl HazardZoneResolver for NfhlHazardResolver {
    fn query_hazard_zone<'a>(
        &'a self,
        coordinate: Coordinate,
    ) -> StageFuture<'a, Option<HazardFeatureAttributes>> {
        Box::pin(self.fetch(coordinate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> HazardQueryResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_first_feature_attributes() {
        let response = parse(
            r#"{"features": [
                {"attributes": {"FLD_ZONE": "AE", "SFHA_TF": "T", "ZONE_SUBTY": "FLOODWAY"}},
                {"attributes": {"FLD_ZONE": "X", "SFHA_TF": "F", "ZONE_SUBTY": null}}
            ]}"#,
        );
        let attrs = response.into_attributes().unwrap().unwrap();
        assert_eq!(attrs.zone_code.as_deref(), Some("AE"));
        assert!(attrs.is_special_hazard_area);
        assert_eq!(attrs.zone_subtype.as_deref(), Some("FLOODWAY"));
    }

    #[test]
    fn test_sfha_flag_requires_t() {
        for (flag, expected) in [(r#""T""#, true), (r#""F""#, false), ("null", false), (r#""t""#, false)] {
            let body = format!(r#"{{"features": [{{"attributes": {{"FLD_ZONE": "X", "SFHA_TF": {flag}}}}}]}}"#);
            let attrs = parse(&body).into_attributes().unwrap().unwrap();
            assert_eq!(attrs.is_special_hazard_area, expected, "SFHA_TF = {flag}");
        }
    }

    #[test]
    fn test_no_features_is_outside_coverage() {
        for body in [r#"{"features": []}"#, "{}"] {
            assert!(parse(body).into_attributes().unwrap().is_none());
        }
    }

    #[test]
    fn test_feature_without_attributes_is_malformed() {
        let err = parse(r#"{"features": [{}]}"#).into_attributes().unwrap_err();
        assert!(matches!(
            err,
            LookupError::MalformedUpstreamResponse {
                service: UpstreamService::HazardLayer,
                ..
            }
        ));
    }

    #[test]
    fn test_error_envelope_is_unavailable() {
        let err = parse(r#"{"error": {"code": 500, "message": "Error performing query operation"}}"#)
            .into_attributes()
            .unwrap_err();
        assert!(matches!(err, LookupError::UpstreamUnavailable { .. }));
    }
}
