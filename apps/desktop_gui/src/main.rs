use std::sync::Arc;

mod backend_bridge;
mod controller;
mod ui;

use anyhow::anyhow;
use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use crossbeam_channel::bounded;
use eframe::egui;
use relay_core::{HttpRelay, RelayConfig};
use tracing_subscriber::EnvFilter;
use ui::ControlPanelApp;

const WINDOW_TITLE: &str = "Pipet Robot Control Panel";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = relay_core::config::install(RelayConfig::default());
    tracing::info!(server_url = %config.server_url, "starting control panel");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(Arc::new(HttpRelay::new()), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(ControlPanelApp::new(
                cmd_tx,
                ui_rx,
                config.server_url.clone(),
            )))
        }),
    )
    .map_err(|err| anyhow!("control panel window failed: {err}"))
}
