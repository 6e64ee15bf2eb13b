//! Dashboard header: greeting, date, and store name.
//!
//! The greeting is a pure mapping from the hour of day; the clock reading
//! is passed in so rendering stays deterministic under test.

use chrono::{DateTime, Local, Timelike};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::icons::IconService;
use crate::theme::Theme;
use crate::utils::datetime::{format_long_date, greeting_for_hour};

/// Composition-only header widget
pub struct DashboardHeader {
    pub user_name: String,
    pub store_name: String,
    pub icons: IconService,
}

impl DashboardHeader {
    #[must_use]
    pub fn new(user_name: impl Into<String>, store_name: impl Into<String>, icons: IconService) -> Self {
        Self {
            user_name: user_name.into(),
            store_name: store_name.into(),
            icons,
        }
    }

    /// Display lines for the given clock reading
    #[must_use]
    pub fn lines(&self, now: DateTime<Local>, theme: &Theme) -> Vec<Line<'static>> {
        let greeting = greeting_for_hour(now.hour());
        vec![
            Line::from(Span::styled(
                format!("{greeting}, {} {}", self.user_name, self.icons.greeting()),
                theme.heading(),
            )),
            Line::from(Span::styled(
                format_long_date(now.date_naive()),
                theme.muted(),
            )),
            Line::from(Span::styled(self.store_name.clone(), theme.text())),
        ]
    }

    pub fn render(&self, f: &mut Frame, rect: Rect, theme: &Theme, now: DateTime<Local>) {
        let paragraph = Paragraph::new(self.lines(now, theme)).block(theme.block("Dashboard"));
        f.render_widget(paragraph, rect);
    }
}
