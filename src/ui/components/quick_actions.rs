//! Quick actions widget: a row of navigation shortcuts.
//!
//! Activation emits [`Action::Navigate`] with the action's target; the
//! shell owns what navigation actually means.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use crate::icons::IconService;
use crate::theme::Theme;
use crate::ui::core::{Action, Component, NavTarget};

/// One navigation shortcut
#[derive(Debug, Clone)]
pub struct QuickAction {
    pub label: String,
    pub icon: &'static str,
    pub target: NavTarget,
}

/// Horizontal strip of quick actions with a movable selection
pub struct QuickActions {
    actions: Vec<QuickAction>,
    selected: usize,
}

impl QuickActions {
    #[must_use]
    pub fn new(actions: Vec<QuickAction>) -> Self {
        Self {
            actions,
            selected: 0,
        }
    }

    /// The standard admin-panel shortcuts
    #[must_use]
    pub fn standard(icons: IconService) -> Self {
        Self::new(vec![
            QuickAction {
                label: "New Sale".to_string(),
                icon: icons.sale(),
                target: NavTarget::NewSale,
            },
            QuickAction {
                label: "Products".to_string(),
                icon: icons.product(),
                target: NavTarget::Products,
            },
            QuickAction {
                label: "Reports".to_string(),
                icon: icons.reports(),
                target: NavTarget::Reports,
            },
        ])
    }

    #[must_use]
    pub fn selected_action(&self) -> Option<&QuickAction> {
        self.actions.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.actions.is_empty() {
            self.selected = (self.selected + 1) % self.actions.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.actions.is_empty() {
            self.selected = (self.selected + self.actions.len() - 1) % self.actions.len();
        }
    }
}

impl Component for QuickActions {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
                self.select_next();
                Action::NextItem
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.select_previous();
                Action::PreviousItem
            }
            KeyCode::Enter => match self.selected_action() {
                Some(action) => Action::Navigate(action.target),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        if self.actions.is_empty() {
            return;
        }

        let n = self.actions.len() as u32;
        let areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(self.actions.iter().map(|_| Constraint::Ratio(1, n)))
            .split(rect);

        for (i, (action, area)) in self.actions.iter().zip(areas.iter()).enumerate() {
            let style = if i == self.selected {
                theme.raised()
            } else {
                theme.muted()
            };
            let paragraph = Paragraph::new(format!("{} {}", action.icon, action.label))
                .alignment(Alignment::Center)
                .style(style)
                .block(theme.block(""));
            f.render_widget(paragraph, *area);
        }
    }
}
