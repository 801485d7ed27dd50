use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const CONNECTING_LINE: &str = "Connecting...";

/// Payload handed from the front end to the relay: one serialized command, the
/// endpoint it targets and the base URL of the device server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayRequest {
    pub message: String,
    pub endpoint: String,
    #[serde(rename = "serverUrl")]
    pub server_url: String,
}

impl RelayRequest {
    pub fn new(
        message: impl Into<String>,
        endpoint: impl Into<String>,
        server_url: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            endpoint: endpoint.into(),
            server_url: server_url.into(),
        }
    }

    /// Target URL, composed verbatim from the base URL and the endpoint.
    pub fn url(&self) -> String {
        format!("{}/{}", self.server_url, self.endpoint)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelayResult {
    Ok { status: u16, data: Value },
    Error { error: String },
}

impl RelayResult {
    pub fn ok(status: u16, data: Value) -> Self {
        Self::Ok { status, data }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    pub fn log_line(&self) -> String {
        match self {
            Self::Ok { data, .. } => format!("Server: {}", server_reply_text(data)),
            Self::Error { error } => format!("Error: {error}"),
        }
    }
}

pub fn unexpected_error_line(message: &str) -> String {
    format!("Unexpected Error: {message}")
}

/// Prefers a truthy `message` field, otherwise the whole payload as compact JSON.
pub fn server_reply_text(data: &Value) -> String {
    match data.get("message") {
        Some(Value::String(text)) if !text.is_empty() => text.clone(),
        Some(message) if is_truthy(message) => message.to_string(),
        _ => data.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
