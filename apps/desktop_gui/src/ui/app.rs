use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::{command::Command, domain::CoordinateSystem, protocol::CONNECTING_LINE};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_relay_request;
use crate::controller::reducer::MessageLog;
use crate::ui::form::ControlForm;

const INPUT_WIDTH: f32 = 120.0;
const IDLE_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct ControlPanelApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    server_url: String,
    form: ControlForm,
    log: MessageLog,
}

impl ControlPanelApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        server_url: impl Into<String>,
    ) -> Self {
        let mut log = MessageLog::new();
        // Cosmetic only; nothing is contacted until the first button press.
        log.append(CONNECTING_LINE);

        Self {
            cmd_tx,
            ui_rx,
            server_url: server_url.into(),
            form: ControlForm::default(),
            log,
        }
    }

    pub fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.log.apply(event);
        }
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn form_mut(&mut self) -> &mut ControlForm {
        &mut self.form
    }

    pub fn click_move(&mut self) {
        let command = self.form.move_command();
        self.send(&command);
    }

    pub fn click_pipet(&mut self) {
        let command = self.form.pipet_command();
        self.send(&command);
    }

    pub fn click_request(&mut self) {
        let command = self.form.request_command();
        self.send(&command);
    }

    fn send(&mut self, command: &Command) {
        dispatch_relay_request(&self.cmd_tx, command, &self.server_url, &mut self.log);
    }

    fn show_move_controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Move");
        ui.horizontal(|ui| {
            ui.label("Coordinate system");
            egui::ComboBox::from_id_salt("coordSystem")
                .selected_text(self.form.coord_system.label())
                .show_ui(ui, |ui| {
                    for system in CoordinateSystem::ALL {
                        ui.selectable_value(&mut self.form.coord_system, system, system.label());
                    }
                });
        });

        let labels = self.form.coord_system.axis_labels();
        let form = self.form_mut();
        egui::Grid::new("axis_inputs")
            .num_columns(2)
            .show(ui, |ui| {
                for (label, value) in labels.iter().zip([&mut form.x, &mut form.y, &mut form.z]) {
                    ui.label(*label);
                    ui.add(
                        egui::TextEdit::singleline(value)
                            .hint_text("0")
                            .desired_width(INPUT_WIDTH),
                    );
                    ui.end_row();
                }
            });

        if ui.button("Move").clicked() {
            self.click_move();
        }
    }

    fn show_pipet_controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Pipet");
        ui.horizontal(|ui| {
            ui.label("Pipet level");
            ui.add(
                egui::TextEdit::singleline(&mut self.form.pipet_level)
                    .hint_text("0")
                    .desired_width(INPUT_WIDTH),
            );
            if ui.button("Set pipet").clicked() {
                self.click_pipet();
            }
        });
    }

    fn show_request_controls(&mut self, ui: &mut egui::Ui) {
        if ui.button("Request current position").clicked() {
            self.click_request();
        }
    }

    fn show_message_area(&mut self, ui: &mut egui::Ui) {
        let scroll_to_end = self.log.take_scroll_request();
        egui::ScrollArea::vertical()
            .id_salt("messageArea")
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                // Read-only: egui never edits through a `&str` buffer.
                let mut text = self.log.text();
                ui.add(
                    egui::TextEdit::multiline(&mut text)
                        .font(egui::TextStyle::Monospace)
                        .desired_width(f32::INFINITY),
                );
                if scroll_to_end {
                    ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
                }
            });
    }
}

impl eframe::App for ControlPanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::bottom("statusLabel").show(ctx, |ui| {
            ui.label(self.log().status());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_move_controls(ui);
            ui.separator();
            self.show_pipet_controls(ui);
            ui.separator();
            self.show_request_controls(ui);
            ui.separator();
            self.show_message_area(ui);
        });

        // Relay results arrive from the backend thread without any input event.
        ctx.request_repaint_after(IDLE_REPAINT_INTERVAL);
    }
}
