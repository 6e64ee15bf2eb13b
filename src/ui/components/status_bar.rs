//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::theme::Theme;

/// One-line status bar showing key hints or a transient message
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, theme: &Theme, message: Option<&str>, hints: &str) {
        let (text, style) = match message {
            Some(msg) => (msg.to_string(), theme.raised()),
            None => (hints.to_string(), theme.muted()),
        };

        let status_bar = Paragraph::new(text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(style);

        f.render_widget(status_bar, area);
    }
}
