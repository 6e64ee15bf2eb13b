use super::actions::Action;
use crate::theme::Theme;
use crossterm::event::{Event, KeyEvent};
use ratatui::{layout::Rect, Frame};

/// Contract every interactive component implements.
///
/// Components are controlled: all data arrives through the caller, key
/// events map to [`Action`]s the caller applies, and rendering is a pure
/// function of current props plus the theme.
pub trait Component {
    fn handle_events(&mut self, event: Option<Event>) -> Action {
        if let Some(Event::Key(key)) = event {
            self.handle_key_events(key)
        } else {
            Action::None
        }
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme);

    // Optional focus lifecycle
    fn on_focus(&mut self) {}
    fn on_blur(&mut self) {}
}
