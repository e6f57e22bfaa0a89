use reqwest::Url;
use tracing::warn;
use wonders_shared::{Monument, WireMonument};

use crate::config::{connect_timeout, http_timeout};
use crate::error::FetchError;

/// HTTP client for the monument catalog. Holds only static configuration:
/// the endpoint and the transport handle.
#[derive(Debug, Clone)]
pub struct MonumentClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl MonumentClient {
    /// Build a client for the endpoint with the configured timeouts.
    pub fn new(endpoint: Url) -> Self {
        let request_timeout = http_timeout();
        let connect = connect_timeout();
        let http = reqwest::Client::builder()
            .user_agent("wonders-map/0.1")
            .timeout(request_timeout)
            .connect_timeout(connect)
            .build()
            .or_else(|e| {
                warn!(
                    error = %e,
                    "failed to build configured HTTP client, retrying without custom user-agent"
                );
                reqwest::Client::builder()
                    .timeout(request_timeout)
                    .connect_timeout(connect)
                    .build()
            })
            .unwrap_or_else(|e| {
                panic!("failed to build timeout-configured HTTP client: {e}");
            });
        Self { http, endpoint }
    }

    /// Reuse an existing transport handle, e.g. one shared across clients.
    pub fn with_http_client(http: reqwest::Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Single GET against the endpoint. The body must be a JSON array of
    /// wire records; records that fail validation are dropped with a
    /// warning while the rest are returned in source order.
    pub async fn fetch_monuments(&self) -> Result<Vec<Monument>, FetchError> {
        let resp = self.http.get(self.endpoint.clone()).send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                preview: body_preview(&bytes),
            });
        }

        Ok(parse_monument_payload(&bytes)?)
    }

    /// Collapse every failure to an empty list. The map treats "no data"
    /// as a legitimate terminal state, so nothing is retried or escalated.
    pub async fn fetch_monuments_or_empty(&self) -> Vec<Monument> {
        match self.fetch_monuments().await {
            Ok(monuments) => monuments,
            Err(e) => {
                warn!("failed to fetch monuments: {e}");
                Vec::new()
            }
        }
    }
}

fn body_preview(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .take(200)
        .collect::<String>()
}

/// Decode a JSON array of wire records. The array shape is mandatory;
/// each element is validated on its own so one bad record cannot take the
/// rest of the catalog down with it.
fn parse_monument_payload(bytes: &[u8]) -> Result<Vec<Monument>, serde_json::Error> {
    let raw: Vec<serde_json::Value> = serde_json::from_slice(bytes)?;
    Ok(raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<WireMonument>(value) {
            Ok(wire) => match Monument::try_from(wire) {
                Ok(monument) => Some(monument),
                Err(e) => {
                    warn!("skipping monument with bad coordinates: {e}");
                    None
                }
            },
            Err(e) => {
                warn!("skipping malformed monument record: {e}");
                None
            }
        })
        .collect())
}
