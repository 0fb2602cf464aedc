// Console tab state management.
// Collects the activity log (info and error messages) shown in the Console
// tab, with an unread-error badge for the tab bar.

use chrono::{DateTime, Utc};
use ratatui::widgets::ListState;

/// Console message level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Info,
    Error,
}

/// A console message for the activity log.
#[derive(Debug, Clone)]
pub struct ConsoleMessage {
    pub level: ConsoleLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ConsoleMessage {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: ConsoleLevel::Info,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ConsoleLevel::Error,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Complete state for the Console tab.
#[derive(Debug, Default)]
pub struct ConsoleState {
    pub messages: Vec<ConsoleMessage>,
    pub list_state: ListState,
    /// Errors logged since the console was last viewed.
    pub unread: usize,
}

impl ConsoleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an info message.
    pub fn log_info(&mut self, message: impl Into<String>) {
        self.messages.push(ConsoleMessage::info(message));
        self.scroll_to_bottom();
    }

    /// Add an error message and count it as unread.
    pub fn log_error(&mut self, message: impl Into<String>) {
        self.messages.push(ConsoleMessage::error(message));
        self.unread += 1;
        self.scroll_to_bottom();
    }

    /// Clear the unread badge (called when the console becomes visible).
    pub fn mark_viewed(&mut self) {
        self.unread = 0;
    }

    pub fn select_prev(&mut self) {
        if self.messages.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => self.messages.len() - 1,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_next(&mut self) {
        if self.messages.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= self.messages.len() - 1 {
                    i
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn scroll_to_bottom(&mut self) {
        self.list_state.select(Some(self.messages.len() - 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_count_as_unread_until_viewed() {
        let mut console = ConsoleState::new();
        console.log_info("loaded 3 todos");
        assert_eq!(console.unread, 0);

        console.log_error("request failed");
        console.log_error("request failed again");
        assert_eq!(console.unread, 2);

        console.mark_viewed();
        assert_eq!(console.unread, 0);
        assert_eq!(console.messages.len(), 3);
    }

    #[test]
    fn log_selects_newest_message() {
        let mut console = ConsoleState::new();
        console.log_info("first");
        console.log_info("second");
        assert_eq!(console.list_state.selected(), Some(1));
    }
}
