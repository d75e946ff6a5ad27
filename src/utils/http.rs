//! HTTP helpers shared by the ArcGIS-backed stages
//!
//! Both upstream services are ArcGIS REST endpoints queried with GET and
//! `f=json`. They may report failures as HTTP 200 with an `error` object
//! in the body, which is treated the same as a non-2xx status.

use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::FloodLookupConfig;
use crate::error::{LookupError, Result, UpstreamService};

/// Error envelope returned by ArcGIS REST services
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceError {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Vec<String>,
}

impl ServiceError {
    /// Convert the envelope into an unavailable error
    #[must_use]
    pub fn into_error(self, service: UpstreamService) -> LookupError {
        let mut message = self
            .message
            .unwrap_or_else(|| "service reported an error".to_string());
        if let Some(code) = self.code {
            message = format!("{message} (code {code})");
        }
        if !self.details.is_empty() {
            message = format!("{message}: {}", self.details.join("; "));
        }
        LookupError::unavailable(service, message)
    }
}

/// Build the HTTP client shared by both stages
pub fn build_client(config: &FloodLookupConfig) -> Result<Client> {
    Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| LookupError::Client(e.to_string()))
}

/// Issue a GET and decode the JSON body
///
/// Non-2xx statuses and transport failures map to `UpstreamUnavailable`;
/// bodies that do not decode into `T` map to `MalformedUpstreamResponse`.
pub async fn get_json<T, Q>(
    client: &Client,
    url: &str,
    query: &Q,
    service: UpstreamService,
) -> Result<T>
where
    T: DeserializeOwned,
    Q: Serialize + ?Sized,
{
    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| LookupError::from_transport(service, &e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(LookupError::unavailable(service, format!("HTTP {status}")));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| LookupError::from_transport(service, &e))?;

    serde_json::from_slice(&body)
        .map_err(|e| LookupError::malformed(service, format!("invalid JSON body: {e}")))
}
