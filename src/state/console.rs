// Console tab state.
// Activity log of user-visible page edits, with an unread badge.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use ratatui::widgets::ListState;

/// Console message level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Info,
    Warn,
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

    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            level: ConsoleLevel::Warn,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Complete state for the Console tab.
#[derive(Debug, Default)]
pub struct ConsoleState {
    /// Messages, oldest first.
    pub messages: VecDeque<ConsoleMessage>,
    /// Messages added since the Console tab was last viewed.
    pub unread: usize,
    /// List state for message scrolling.
    pub list_state: ListState,
}

impl ConsoleState {
    const MAX_MESSAGES: usize = 500;

    pub fn new() -> Self {
        Self::default()
    }

    /// Add an info message.
    pub fn log_info(&mut self, message: impl Into<String>) {
        self.push(ConsoleMessage::info(message));
    }

    /// Add a warning message.
    pub fn log_warn(&mut self, message: impl Into<String>) {
        self.push(ConsoleMessage::warn(message));
    }

    fn push(&mut self, message: ConsoleMessage) {
        if self.messages.len() == Self::MAX_MESSAGES {
            self.messages.pop_front();
        }
        self.messages.push_back(message);
        self.unread += 1;
    }

    /// Badge text for the Console view title, if anything is unread.
    pub fn badge(&self) -> Option<String> {
        match self.unread {
            0 => None,
            n if n > 99 => Some("99+".to_string()),
            n => Some(n.to_string()),
        }
    }

    /// Clear the badge when the Console tab is shown.
    pub fn mark_read(&mut self) {
        self.unread = 0;
    }

    /// Select previous message in list.
    pub fn select_prev(&mut self) {
        if self.messages.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Select next message in list.
    pub fn select_next(&mut self) {
        if self.messages.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(self.messages.len() - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }
}
