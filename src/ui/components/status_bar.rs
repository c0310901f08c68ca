//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::constants::{STATUS_DISABLED, STATUS_HINT, STATUS_INVOKED};
use crate::menu::MenuAction;

/// What the status line currently reports
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusMessage {
    #[default]
    Hint,
    Invoked(String),
    Disabled(String),
}

/// Status bar component
#[derive(Debug, Default)]
pub struct StatusBar {
    message: StatusMessage,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> &StatusMessage {
        &self.message
    }

    pub fn show_invoked(&mut self, action: &MenuAction) {
        self.message = StatusMessage::Invoked(action.command_or_content().to_string());
    }

    pub fn show_disabled(&mut self, label: String) {
        self.message = StatusMessage::Disabled(label);
    }

    pub fn reset(&mut self) {
        self.message = StatusMessage::Hint;
    }

    /// Render the status bar
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let (status_text, status_color) = match &self.message {
            StatusMessage::Hint => (STATUS_HINT.to_string(), Color::Gray),
            StatusMessage::Invoked(command) => (format!("{}: {}", STATUS_INVOKED, command), Color::Green),
            StatusMessage::Disabled(label) => (format!("{}: {}", STATUS_DISABLED, label), Color::Yellow),
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
