//! Backend commands queued from UI to backend worker.

use shared::protocol::RelayRequest;

pub enum BackendCommand {
    /// Perform one relay call; exactly one result event comes back for it.
    Relay(RelayRequest),
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Relay(_) => "relay",
        }
    }
}
