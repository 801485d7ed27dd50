//! UI layer for the control panel: app shell and the command form.

pub mod app;
pub mod form;

pub use app::ControlPanelApp;
