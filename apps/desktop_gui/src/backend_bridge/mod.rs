//! Backend side of the window: owns the tokio runtime and the relay, and is
//! reachable from the UI only through [`commands::BackendCommand`].

pub mod commands;
pub mod runtime;
