//! Events flowing from the backend worker back to the UI thread.

use shared::protocol::RelayResult;

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Backend worker status for the status label.
    Info(String),
    /// The relay answered, successfully or with a relay-reported error.
    RelayCompleted(RelayResult),
    /// The call never produced a relay answer (queue failure, crashed task).
    RelayRejected(String),
}
