//! ArcGIS World geocoder client
//!
//! Queries `findAddressCandidates` for a single best match. The service
//! reports locations as `x` (longitude) and `y` (latitude).

use reqwest::Client;
use serde::Deserialize;

use crate::common::traits::{Geocoder, StageFuture};
use crate::error::{LookupError, Result, UpstreamService};
use crate::models::types::Coordinate;
use crate::utils::http::{ServiceError, get_json};

/// `findAddressCandidates` response body
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
    #[serde(default)]
    pub error: Option<ServiceError>,
}

/// One address candidate
#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub location: Option<Location>,
}

/// Candidate location, in the service's x/y convention
#[derive(Debug, Deserialize)]
pub struct Location {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl GeocodeResponse {
    /// Extract the top candidate's coordinate
    pub fn into_coordinate(self, address: &str) -> Result<Coordinate> {
        if let Some(error) = self.error {
            return Err(error.into_error(UpstreamService::Geocoder));
        }

        let candidate = self
            .candidates
            .and_then(|c| c.into_iter().next())
            .ok_or_else(|| LookupError::AddressNotFound(address.to_string()))?;

        match candidate.location {
            Some(Location {
                x: Some(lon),
                y: Some(lat),
            }) => Ok(Coordinate::new(lat, lon)),
            _ => Err(LookupError::malformed(
                UpstreamService::Geocoder,
                "candidate is missing location.x/location.y",
            )),
        }
    }
}

/// Geocoder backed by the ArcGIS `findAddressCandidates` endpoint
#[derive(Debug, Clone)]
pub struct ArcGisGeocoder {
    client: Client,
    url: String,
}

impl ArcGisGeocoder {
    #[must_use]
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    async fn fetch(&self, address: &str) -> Result<Coordinate> {
        let params = [("SingleLine", address), ("f", "json"), ("maxLocations", "1")];

        let response: GeocodeResponse =
            get_json(&self.client, &self.url, &params, UpstreamService::Geocoder).await?;
        let coordinate = response.into_coordinate(address)?;

        log::debug!("Geocoded {address:?} to {coordinate}");
        Ok(coordinate)
    }
}

impl Geocoder for ArcGisGeocoder {
    fn geocode<'a>(&'a self, address: &'a str) -> StageFuture<'a, Coordinate> {
        Box::pin(self.fetch(address))
    }
}
