//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};
use shared::{command::Command, protocol::RelayRequest};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::reducer::MessageLog;

/// Serializes `command` and queues one relay call for it. Anything that keeps
/// the call from reaching the backend ends up in the log instead.
pub fn dispatch_relay_request(
    cmd_tx: &Sender<BackendCommand>,
    command: &Command,
    server_url: &str,
    log: &mut MessageLog,
) {
    let endpoint = command.endpoint().as_str();
    let message = match command.to_message() {
        Ok(message) => message,
        Err(err) => {
            tracing::error!(endpoint, "failed to serialize command: {err}");
            log.apply(UiEvent::RelayRejected(format!(
                "failed to serialize command: {err}"
            )));
            return;
        }
    };

    let cmd = BackendCommand::Relay(RelayRequest::new(message, endpoint, server_url));
    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(endpoint, "queued ui->backend relay request"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(endpoint, "ui->backend command queue is full");
            log.apply(UiEvent::RelayRejected(
                "UI command queue is full; please retry".to_string(),
            ));
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(endpoint, "ui->backend command queue disconnected");
            log.apply(UiEvent::RelayRejected(
                "Backend command processor disconnected".to_string(),
            ));
        }
    }
}
