//! Configuration for the flood-risk lookup.

use std::time::Duration;

/// ArcGIS World geocoder `findAddressCandidates` endpoint
pub const DEFAULT_GEOCODER_URL: &str =
    "https://geocode.arcgis.com/arcgis/rest/services/World/GeocodeServer/findAddressCandidates";

/// FEMA National Flood Hazard Layer, flood hazard zones query endpoint
pub const DEFAULT_HAZARD_URL: &str =
    "https://hazards.fema.gov/arcgis/rest/services/public/NFHL/MapServer/28/query";

/// Informational link attached to every lookup result
pub const DEFAULT_LEARN_MORE_URL: &str =
    "https://agents.floodsmart.gov/articles/flood-maps-and-zones";

/// Per-request timeout for both external services
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Environment variable overriding the geocoder endpoint
pub const ENV_GEOCODER_URL: &str = "FLOOD_GEOCODER_URL";
/// Environment variable overriding the hazard layer endpoint
pub const ENV_HAZARD_URL: &str = "FLOOD_HAZARD_URL";
/// Environment variable overriding the learn-more link
pub const ENV_LEARN_MORE_URL: &str = "FLOOD_LEARN_MORE_URL";
/// Environment variable overriding the request timeout, in whole seconds
pub const ENV_TIMEOUT_SECS: &str = "FLOOD_TIMEOUT_SECS";

/// Configuration for the `FloodZoneLookup` HTTP services
#[derive(Debug, Clone)]
pub struct FloodLookupConfig {
    /// Geocoding service endpoint
    pub geocoder_url: String,
    /// Hazard layer query endpoint
    pub hazard_url: String,
    /// Reference link carried by every result
    pub learn_more_url: String,
    /// Timeout applied to each outbound request
    pub timeout: Duration,
    /// User agent sent with outbound requests
    pub user_agent: String,
}

impl Default for FloodLookupConfig {
    fn default() -> Self {
        Self {
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            hazard_url: DEFAULT_HAZARD_URL.to_string(),
            learn_more_url: DEFAULT_LEARN_MORE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FloodLookupConfig {
    /// Default configuration with any `FLOOD_*` environment overrides applied
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup function
    ///
    /// Empty values are ignored. A timeout that does not parse as whole
    /// seconds is logged and the current value is kept.
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_GEOCODER_URL) {
            self.geocoder_url = url;
        }
        if let Some(url) = get(ENV_HAZARD_URL) {
            self.hazard_url = url;
        }
        if let Some(url) = get(ENV_LEARN_MORE_URL) {
            self.learn_more_url = url;
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.timeout = Duration::from_secs(secs),
                _ => log::warn!(
                    "Ignoring invalid {ENV_TIMEOUT_SECS}={raw:?}, keeping {:?}",
                    self.timeout
                ),
            }
        }
        self
    }

    /// Set the geocoder endpoint
    #[must_use]
    pub fn with_geocoder_url(mut self, url: impl Into<String>) -> Self {
        self.geocoder_url = url.into();
        self
    }

    /// Set the hazard layer endpoint
    #[must_use]
    pub fn with_hazard_url(mut self, url: impl Into<String>) -> Self {
        self.hazard_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = FloodLookupConfig::default();
        assert_eq!(config.geocoder_url, DEFAULT_GEOCODER_URL);
        assert_eq!(config.hazard_url, DEFAULT_HAZARD_URL);
        assert_eq!(config.learn_more_url, DEFAULT_LEARN_MORE_URL);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_GEOCODER_URL, "http://localhost:1/geocode"),
            (ENV_HAZARD_URL, ""),
            (ENV_TIMEOUT_SECS, "12"),
        ]
        .into_iter()
        .collect();

        let config = FloodLookupConfig::default()
            .with_overrides(|key| vars.get(key).map(|v| (*v).to_string()));

        assert_eq!(config.geocoder_url, "http://localhost:1/geocode");
        assert_eq!(config.hazard_url, DEFAULT_HAZARD_URL);
        assert_eq!(config.timeout, Duration::from_secs(12));
    }

    #[test]
    fn test_invalid_timeout_is_ignored() {
        let config = FloodLookupConfig::default().with_overrides(|key| {
            (key == ENV_TIMEOUT_SECS).then(|| "soon".to_string())
        });
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);

        let config = FloodLookupConfig::default()
            .with_overrides(|key| (key == ENV_TIMEOUT_SECS).then(|| "0".to_string()));
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }
}
