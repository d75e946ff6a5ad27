//! Test utilities: a minimal canned HTTP responder
//!
//! Each server answers every request with the same status and body and
//! records the request lines it saw.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use flood_risk::{FloodLookupConfig, FloodZoneLookup};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// A running canned-response server
pub struct CannedServer {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl CannedServer {
    /// Request lines received so far, e.g. `GET /path?query HTTP/1.1`
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Serve `body` with `status` on an ephemeral local port
pub async fn serve_json(status: u16, body: &str) -> CannedServer {
    serve(Some((status, body.to_string()))).await
}

/// Accept connections but never answer them
pub async fn serve_silence() -> CannedServer {
    serve(None).await
}

async fn serve(response: Option<(u16, String)>) -> CannedServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/query", listener.local_addr().unwrap());
    let requests = Arc::new(Mutex::new(Vec::new()));

    let seen = Arc::clone(&requests);
    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                return;
            };
            let seen = Arc::clone(&seen);
            let response = response.clone();
            tokio::spawn(async move { handle(stream, seen, response).await });
        }
    });

    CannedServer { url, requests }
}

async fn handle(
    mut stream: TcpStream,
    seen: Arc<Mutex<Vec<String>>>,
    response: Option<(u16, String)>,
) {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }

    let text = String::from_utf8_lossy(&head);
    if let Some(line) = text.lines().next() {
        seen.lock().unwrap().push(line.to_string());
    }

    let Some((status, body)) = response else {
        tokio::time::sleep(Duration::from_secs(30)).await;
        return;
    };

    let reply = format!(
        "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(reply.as_bytes()).await;
    let _ = stream.shutdown().await;
}

/// Lookup wired to the two canned servers
#[must_use]
pub fn lookup_against(geocoder: &CannedServer, hazard: &CannedServer) -> FloodZoneLookup {
    let config = FloodLookupConfig::default()
        .with_geocoder_url(geocoder.url.as_str())
        .with_hazard_url(hazard.url.as_str())
        .with_timeout(Duration::from_millis(500));
    FloodZoneLookup::from_config(&config).unwrap()
}

/// Geocoder body with one candidate at the White House
pub const WHITE_HOUSE_CANDIDATE: &str = r#"{
    "spatialReference": {"wkid": 4326, "latestWkid": 4326},
    "candidates": [{
        "address": "1600 Pennsylvania Ave NW, Washington, District of Columbia, 20500",
        "location": {"x": -77.0365, "y": 38.8977},
        "score": 100,
        "attributes": {}
    }]
}"#;

/// Hazard layer body with a single feature
#[must_use]
pub fn hazard_feature(zone: &str, sfha: &str) -> String {
    format!(
        r#"{{"displayFieldName": "", "features": [{{"attributes": {{"FLD_ZONE": "{zone}", "SFHA_TF": "{sfha}", "ZONE_SUBTY": null}}}}]}}"#
    )
}
