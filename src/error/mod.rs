//! Error handling for the flood-risk lookup pipeline.

use std::fmt;

/// External service a failure originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamService {
    /// Address geocoding service
    Geocoder,
    /// FEMA National Flood Hazard Layer
    HazardLayer,
}

impl fmt::Display for UpstreamService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geocoder => write!(f, "geocoder"),
            Self::HazardLayer => write!(f, "hazard layer"),
        }
    }
}

/// Specialized error type for lookup stages
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The geocoder returned zero candidates
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// Non-2xx status, transport failure, timeout or service-reported error
    #[error("{service} unavailable: {message}")]
    UpstreamUnavailable {
        service: UpstreamService,
        message: String,
    },

    /// A response arrived but lacked the expected fields
    #[error("Malformed {service} response: {message}")]
    MalformedUpstreamResponse {
        service: UpstreamService,
        message: String,
    },

    /// The HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(String),
}

impl LookupError {
    /// Create an unavailable error for a service
    pub fn unavailable(service: UpstreamService, message: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            service,
            message: message.into(),
        }
    }

    /// Create a malformed-response error for a service
    pub fn malformed(service: UpstreamService, message: impl Into<String>) -> Self {
        Self::MalformedUpstreamResponse {
            service,
            message: message.into(),
        }
    }

    /// Map a transport-level `reqwest` failure to the taxonomy.
    ///
    /// Body decode failures count as malformed responses; everything else
    /// (connect, timeout, status) means the service was unavailable.
    pub fn from_transport(service: UpstreamService, error: &reqwest::Error) -> Self {
        if error.is_decode() {
            Self::malformed(service, error.to_string())
        } else if error.is_timeout() {
            Self::unavailable(service, format!("request timed out: {error}"))
        } else {
            Self::unavailable(service, error.to_string())
        }
    }
}

/// Result type for lookup operations
pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_service() {
        let err = LookupError::unavailable(UpstreamService::HazardLayer, "HTTP 503");
        assert_eq!(err.to_string(), "hazard layer unavailable: HTTP 503");

        let err = LookupError::malformed(UpstreamService::Geocoder, "missing location");
        assert_eq!(
            err.to_string(),
            "Malformed geocoder response: missing location"
        );
    }

    #[test]
    fn test_address_not_found_message() {
        let err = LookupError::AddressNotFound("nowhere".to_string());
        assert_eq!(err.to_string(), "Address not found: nowhere");
    }
}
