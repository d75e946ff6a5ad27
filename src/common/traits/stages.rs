//! Pipeline stage traits
//!
//! The orchestrator is generic over these, so the HTTP-backed stages can be
//! swapped for in-process stand-ins when testing.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::Result;
use crate::models::types::{Coordinate, HazardFeatureAttributes};

/// Boxed future returned by pipeline stages
pub type StageFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// Resolves free-text addresses to coordinates
pub trait Geocoder: Send + Sync {
    /// Geocode an address
    ///
    /// The address is forwarded verbatim. Zero candidates is an
    /// `AddressNotFound` error.
    fn geocode<'a>(&'a self, address: &'a str) -> StageFuture<'a, Coordinate>;
}

/// Finds the hazard-zone feature intersecting a coordinate
pub trait HazardZoneResolver: Send + Sync {
    /// Query the hazard layer at a point
    ///
    /// `Ok(None)` means the point lies outside the dataset's coverage.
    fn query_hazard_zone<'a>(
        &'a self,
        coordinate: Coordinate,
    ) -> StageFuture<'a, Option<HazardFeatureAttributes>>;
}

impl<T: Geocoder + ?Sized> Geocoder for Arc<T> {
    fn geocode<'a>(&'a self, address: &'a str) -> StageFuture<'a, Coordinate> {
        (**self).geocode(address)
    }
}

impl<T: HazardZoneResolver + ?Sized> HazardZoneResolver for Arc<T> {
    fn query_hazard_zone<'a>(
        &'a self,
        coordinate: Coordinate,
    ) -> StageFuture<'a, Option<HazardFeatureAttributes>> {
        (**self).query_hazard_zone(coordinate)
    }
}
