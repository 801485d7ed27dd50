//! Relay between the operator front ends and the device server: one HTTP call
//! per request, outcome flattened into a [`RelayResult`].

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use shared::{domain::Endpoint, protocol::RelayRequest};
use tracing::{debug, warn};

pub mod config;
pub mod error;

pub use config::{RelayConfig, DEFAULT_SERVER_URL};
pub use error::RelayError;
pub use shared::protocol::RelayResult;

/// The single capability the presentation side gets: hand over a request, get
/// exactly one result back. Implementations never fail the call itself.
#[async_trait]
pub trait Relay: Send + Sync {
    async fn dispatch(&self, request: RelayRequest) -> RelayResult;
}

#[derive(Debug, Clone, Default)]
pub struct HttpRelay {
    http: Client,
}

impl HttpRelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }

    async fn send(&self, request: &RelayRequest) -> Result<(u16, Value), RelayError> {
        let url = request.url();
        let builder = if request.endpoint == Endpoint::Request.as_str() {
            self.http.get(&url)
        } else {
            let body: Value = serde_json::from_str(&request.message)?;
            self.http.post(&url).json(&body)
        };

        let response = builder.send().await.map_err(RelayError::from_send)?;
        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Status {
                status: status.as_u16(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|err| RelayError::Body(err.to_string()))?;
        Ok((status.as_u16(), decode_body(text)))
    }
}

#[async_trait]
impl Relay for HttpRelay {
    async fn dispatch(&self, request: RelayRequest) -> RelayResult {
        match self.send(&request).await {
            Ok((status, data)) => {
                debug!(endpoint = %request.endpoint, status, "relay call completed");
                RelayResult::ok(status, data)
            }
            Err(err) => {
                warn!(endpoint = %request.endpoint, url = %request.url(), "relay call failed: {err}");
                RelayResult::error(err.to_string())
            }
        }
    }
}

/// JSON when the body parses as JSON, otherwise the raw text as a string.
fn decode_body(text: String) -> Value {
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
