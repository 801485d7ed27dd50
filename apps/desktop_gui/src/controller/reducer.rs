//! Log state transitions driven by UI events.

use shared::protocol::unexpected_error_line;

use crate::controller::events::UiEvent;

/// Append-only text of the message area plus the status label.
#[derive(Debug, Default)]
pub struct MessageLog {
    text: String,
    status: String,
    scroll_pending: bool,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one newline-terminated line and asks the view to scroll to it.
    pub fn append(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push('\n');
        self.scroll_pending = true;
    }

    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => self.status = message,
            UiEvent::RelayCompleted(result) => self.append(&result.log_line()),
            UiEvent::RelayRejected(message) => self.append(&unexpected_error_line(&message)),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns true once per append burst.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }
}
