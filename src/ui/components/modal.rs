//! Modal dialog component: a controlled overlay with a fixed header and an
//! independently scrolling body.
//!
//! Visibility is owned entirely by the caller: the component renders
//! nothing while closed and never flips its own `open` flag. Dismissal
//! (Esc, the close control, or a click on the backdrop) only invokes the
//! caller-supplied `on_close` callback and reports [`Action::CloseModal`];
//! the caller decides whether to actually close.
//!
//! While open, the modal consumes every key event it receives, so routing
//! input to it exclusively gives focus containment for free. The
//! `on_focus` / `on_blur` hooks let the shell restore focus to the
//! invoking element afterwards.

use crossterm::event::{Event, KeyCode, KeyEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    text::Text,
    widgets::{Block, Clear, Paragraph, Wrap},
    Frame,
};

use crate::constants::HINT_MODAL;
use crate::theme::Theme;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;

use super::scrollbar_helper::ScrollbarHelper;

/// Maximum width of a modal, as a share of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

/// Callback invoked when the user asks to dismiss the modal
pub type CloseCallback = Box<dyn Fn()>;

/// Controlled modal overlay
pub struct Modal {
    open: bool,
    title: String,
    body: Text<'static>,
    size: ModalSize,
    scroll_offset: usize,
    scrollbar: ScrollbarHelper,
    on_close: Option<CloseCallback>,
    // Set during render; used to tell backdrop clicks from modal clicks
    last_area: Option<Rect>,
}

impl Modal {
    #[must_use]
    pub fn new(title: impl Into<String>, size: ModalSize) -> Self {
        Self {
            open: false,
            title: title.into(),
            body: Text::default(),
            size,
            scroll_offset: 0,
            scrollbar: ScrollbarHelper::new(),
            on_close: None,
            last_area: None,
        }
    }

    /// Register the callback invoked on dismissal. A modal is only
    /// dismissible through this callback, so callers should always set it.
    pub fn on_close(&mut self, callback: CloseCallback) {
        self.on_close = Some(callback);
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_body(&mut self, body: Text<'static>) {
        self.body = body;
        self.scroll_offset = 0;
    }

    /// Show the modal. Caller-owned visibility; the component never calls
    /// this itself.
    pub fn open(&mut self) {
        self.open = true;
        self.scroll_offset = 0;
    }

    /// Hide the modal. Caller-owned visibility.
    pub fn close(&mut self) {
        self.open = false;
        self.last_area = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    fn fire_close(&self) -> Action {
        if let Some(callback) = &self.on_close {
            callback();
        }
        Action::CloseModal
    }

    fn scroll_by(&mut self, delta: isize) {
        let max_scroll = self.max_scroll();
        let next = if delta < 0 {
            self.scroll_offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll_offset.saturating_add(delta as usize)
        };
        self.scroll_offset = next.min(max_scroll);
    }

    fn max_scroll(&self) -> usize {
        let viewport = self
            .last_area
            .map(|a| a.height.saturating_sub(2) as usize)
            .unwrap_or(0);
        self.body.lines.len().saturating_sub(viewport.max(1))
    }
}

impl Component for Modal {
    fn handle_events(&mut self, event: Option<Event>) -> Action {
        if !self.open {
            return Action::None;
        }
        match event {
            Some(Event::Key(key)) => self.handle_key_events(key),
            Some(Event::Mouse(mouse)) => match mouse.kind {
                MouseEventKind::Down(_) => {
                    let inside = self
                        .last_area
                        .is_some_and(|area| area.contains(Position::new(mouse.column, mouse.row)));
                    if inside {
                        Action::None
                    } else {
                        // Backdrop click dismisses
                        self.fire_close()
                    }
                }
                MouseEventKind::ScrollUp => {
                    self.scroll_by(-1);
                    Action::None
                }
                MouseEventKind::ScrollDown => {
                    self.scroll_by(1);
                    Action::None
                }
                _ => Action::None,
            },
            _ => Action::None,
        }
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.open {
            return Action::None;
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.fire_close(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_by(-1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_by(1);
                Action::None
            }
            KeyCode::PageUp => {
                self.scroll_by(-10);
                Action::None
            }
            KeyCode::PageDown => {
                self.scroll_by(10);
                Action::None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                Action::None
            }
            KeyCode::End => {
                self.scroll_offset = self.max_scroll();
                Action::None
            }
            // Everything else is swallowed while the modal has focus
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        if !self.open {
            return;
        }

        let modal_area = LayoutManager::modal_rect(self.size, rect);
        self.last_area = Some(modal_area);

        let total_lines = self.body.lines.len();
        let (content_area, scrollbar_area) = ScrollbarHelper::split_area(modal_area, total_lines);
        let viewport = content_area.height.saturating_sub(2) as usize;
        self.scroll_offset = self.scroll_offset.min(total_lines.saturating_sub(viewport.max(1)));

        // Dim everything behind the overlay, then punch out the modal area
        f.render_widget(Block::default().style(theme.backdrop()), rect);
        f.render_widget(Clear, modal_area);

        let block = theme
            .block(&self.title)
            .title_bottom(HINT_MODAL)
            .style(theme.text());

        let body = Paragraph::new(self.body.clone())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0));
        f.render_widget(body, content_area);

        self.scrollbar.sync(total_lines, self.scroll_offset, viewport);
        self.scrollbar.render(f, scrollbar_area);
    }
}
