//! Scrollbar helper for components with scrollable content.
//!
//! Shared by the modal body (and any future scrollable panel) so scrollbar
//! layout and styling stay consistent.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Wraps ratatui's scrollbar state and the layout math around it.
pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl Default for ScrollbarHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarHelper {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ScrollbarState::new(0),
        }
    }

    /// Sync the scrollbar with the current content length and position.
    pub fn sync(&mut self, total_lines: usize, position: usize, viewport_height: usize) {
        self.state = self
            .state
            .content_length(total_lines)
            .viewport_content_length(viewport_height)
            .position(position);
    }

    /// Whether the content overflows the viewport and needs a scrollbar.
    #[must_use]
    pub fn needs_scrollbar(total_lines: usize, viewport_height: usize) -> bool {
        total_lines > viewport_height
    }

    /// Split a bordered rect into a content area and, when the content
    /// overflows, a one-column scrollbar area inside the right border.
    #[must_use]
    pub fn split_area(rect: Rect, total_lines: usize) -> (Rect, Option<Rect>) {
        let viewport_height = rect.height.saturating_sub(2) as usize;
        if !Self::needs_scrollbar(total_lines, viewport_height) {
            return (rect, None);
        }

        let content = Rect {
            width: rect.width.saturating_sub(1),
            ..rect
        };
        let scrollbar = Rect {
            x: rect.x + rect.width.saturating_sub(1),
            y: rect.y + 1,
            width: 1,
            height: rect.height.saturating_sub(2),
        };
        (content, Some(scrollbar))
    }

    /// Render the scrollbar into the given area, if any.
    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(Color::DarkGray))
                .thumb_style(Style::default().fg(Color::DarkGray));

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }
}
