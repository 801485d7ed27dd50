//! Controller layer: UI events, log state transitions, and command orchestration.

pub mod events;
pub mod orchestration;
pub mod reducer;
