//! Runtime bridge between UI command queue and backend event intake.

use std::{any::Any, sync::Arc, thread};

use crossbeam_channel::{Receiver, Sender};
use relay_core::Relay;
use tokio::task::JoinError;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Starts the backend worker thread. It runs until the UI drops its command
/// sender; every queued relay call runs as its own task so replies reach the UI
/// in the order the server answers them.
pub fn launch(
    relay: Arc<dyn Relay>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::Info(format!(
                    "Backend worker startup failure: {err}"
                )));
                while let Ok(cmd) = cmd_rx.recv() {
                    tracing::warn!(command = cmd.name(), "backend worker unavailable");
                    let _ = ui_tx.send(UiEvent::RelayRejected(format!(
                        "backend worker unavailable: {err}"
                    )));
                }
                return;
            }
        };

        runtime.block_on(async move {
            tracing::info!("backend worker ready");
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Relay(request) => {
                        let relay = Arc::clone(&relay);
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            let endpoint = request.endpoint.clone();
                            let call = tokio::spawn(async move { relay.dispatch(request).await });
                            let event = match call.await {
                                Ok(result) => UiEvent::RelayCompleted(result),
                                Err(err) => {
                                    let message = rejection_message(err);
                                    tracing::error!(%endpoint, "relay task failed: {message}");
                                    UiEvent::RelayRejected(message)
                                }
                            };
                            if ui_tx.send(event).is_err() {
                                tracing::debug!(%endpoint, "ui closed before relay result arrived");
                            }
                        });
                    }
                }
            }
            tracing::info!("ui command queue closed; backend worker stopping");
        });
    })
}

fn rejection_message(err: JoinError) -> String {
    if err.is_panic() {
        panic_message(err.into_panic())
    } else {
        err.to_string()
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "relay task panicked".to_string()
    }
}
