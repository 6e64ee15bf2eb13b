//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::components::modal::ModalSize;

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Calculate the main layout areas (content on top, status bar below)
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        let content_height = area.height.saturating_sub(1);
        let content_area = Rect::new(area.x, area.y, area.width, content_height);
        let status_area = Rect::new(area.x, area.y + content_height, area.width, 1);

        vec![content_area, status_area]
    }

    /// Calculate the dashboard layout (header, alerts, quick actions)
    #[must_use]
    pub fn dashboard_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(7),
                Constraint::Length(5),
            ])
            .split(area)
            .to_vec()
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate the overlay rectangle for a modal of the given size.
    ///
    /// The size controls the maximum width; height scales with it so small
    /// dialogs stay compact.
    #[must_use]
    pub fn modal_rect(size: ModalSize, area: Rect) -> Rect {
        let (percent_x, percent_y) = match size {
            ModalSize::Sm => (30, 30),
            ModalSize::Md => (45, 45),
            ModalSize::Lg => (60, 60),
            ModalSize::Xl => (80, 80),
        };
        Self::centered_rect(percent_x, percent_y, area)
    }
}
