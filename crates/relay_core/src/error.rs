use thiserror::Error;

/// Why a relay call failed. Only the display text crosses the relay boundary.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("invalid command message: {0}")]
    InvalidMessage(#[from] serde_json::Error),
    #[error("{0}")]
    Transport(String),
    #[error("Request failed with status code {status}")]
    Status { status: u16 },
    #[error("failed to read response body: {0}")]
    Body(String),
}

impl RelayError {
    /// Connect/DNS failures read as a plain network error to the operator.
    pub fn from_send(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_request() {
            Self::Transport(format!("Network Error: {err}"))
        } else {
            Self::Transport(err.to_string())
        }
    }
}
