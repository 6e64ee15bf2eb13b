//! Smart alerts widget: stock alert summary plus a rotating daily tip.
//!
//! Pure mapping from a metrics summary and a weekday to display lines.
//! When both counts are zero the widget shows the all-clear branch;
//! otherwise the out-of-stock block comes first, then the low-stock block,
//! in that fixed order.

use chrono::{DateTime, Datelike, Local};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::constants::{ALERTS_ALL_CLEAR, ALERTS_LOW_STOCK_HINT, ALERTS_OUT_OF_STOCK_HINT};
use crate::icons::IconService;
use crate::theme::Theme;
use crate::ui::core::actions::NavTarget;
use crate::utils::datetime::tip_for_weekday;

/// Stock metrics consumed by the dashboard. Produced by an external data
/// layer; this widget never computes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSummary {
    pub low_stock_alerts: u32,
    pub out_of_stock_count: u32,
}

impl MetricsSummary {
    #[must_use]
    pub fn all_clear(&self) -> bool {
        self.low_stock_alerts == 0 && self.out_of_stock_count == 0
    }
}

/// Alerts widget
pub struct SmartAlerts {
    pub icons: IconService,
}

impl SmartAlerts {
    #[must_use]
    pub fn new(icons: IconService) -> Self {
        Self { icons }
    }

    /// Target screen a user lands on when following up on the alerts
    #[must_use]
    pub fn follow_up_target(metrics: &MetricsSummary) -> NavTarget {
        if metrics.all_clear() {
            NavTarget::Dashboard
        } else {
            NavTarget::Products
        }
    }

    /// Display lines for the given metrics and clock reading
    #[must_use]
    pub fn lines(&self, metrics: &MetricsSummary, now: DateTime<Local>, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        if metrics.all_clear() {
            lines.push(Line::from(Span::styled(
                format!("{} {}", self.icons.all_clear(), ALERTS_ALL_CLEAR),
                theme.text().fg(theme.emerald),
            )));
        } else {
            if metrics.out_of_stock_count > 0 {
                lines.push(Line::from(Span::styled(
                    format!(
                        "{} {} product(s) out of stock",
                        self.icons.out_of_stock(),
                        metrics.out_of_stock_count
                    ),
                    Style::default().fg(theme.badge_danger).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(
                    ALERTS_OUT_OF_STOCK_HINT.to_string(),
                    theme.muted(),
                )));
            }
            if metrics.low_stock_alerts > 0 {
                lines.push(Line::from(Span::styled(
                    format!(
                        "{} {} product(s) running low",
                        self.icons.low_stock(),
                        metrics.low_stock_alerts
                    ),
                    Style::default().fg(theme.badge_warning),
                )));
                lines.push(Line::from(Span::styled(
                    ALERTS_LOW_STOCK_HINT.to_string(),
                    theme.muted(),
                )));
            }
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            tip_for_weekday(now.weekday()).to_string(),
            theme.muted(),
        )));

        lines
    }

    pub fn render(&self, f: &mut Frame, rect: Rect, theme: &Theme, metrics: &MetricsSummary, now: DateTime<Local>) {
        let paragraph = Paragraph::new(self.lines(metrics, now, theme)).block(theme.block("Smart Alerts"));
        f.render_widget(paragraph, rect);
    }
}
