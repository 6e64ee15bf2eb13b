//! Demo application shell.
//!
//! Owns every piece of state the components render: the active screen, the
//! product table, the detail modal and its visibility, and the transient
//! status message. Components only report actions; this shell applies
//! them.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use chrono::Local;
use crossterm::event::{Event, KeyCode};
use ratatui::{
    text::{Line, Span, Text},
    Frame,
};

use crate::catalog::{sample_products, summarize, Product};
use crate::config::Config;
use crate::constants::{HINT_DASHBOARD, HINT_PRODUCTS, NOT_IN_DEMO};
use crate::icons::IconService;
use crate::theme::Theme;
use crate::ui::components::badge::create_stock_badge;
use crate::ui::components::{
    Column, DashboardHeader, DataTable, MetricsSummary, Modal, ModalSize, QuickActions, SmartAlerts, StatusBar,
};
use crate::ui::core::{Action, Component, NavTarget};
use crate::ui::layout::LayoutManager;

/// Application state for the demo admin panel
pub struct App {
    screen: NavTarget,
    header: DashboardHeader,
    alerts: SmartAlerts,
    quick_actions: QuickActions,
    products: DataTable<Product>,
    modal: Modal,
    // Filled by the table's row callback, drained by the shell
    activated: Rc<RefCell<Option<Product>>>,
    metrics: MetricsSummary,
    low_stock_threshold: u32,
    theme: Theme,
    status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        let theme = config.theme()?;
        let icons = IconService::new(config.ui.icon_theme);
        let threshold = config.alerts.low_stock_threshold;

        let products_data = sample_products();
        let metrics = summarize(&products_data, threshold);

        let badge_theme = theme.clone();
        let columns = vec![
            Column::new("SKU", "sku"),
            Column::new("Name", "name"),
            Column::new("Category", "category"),
            Column::new("Price", "price"),
            Column::new("Stock", "on_hand").with_render(move |p: &Product| {
                Line::from(create_stock_badge(p.on_hand, threshold, &badge_theme))
            }),
        ];

        let mut products = DataTable::new("Products", columns);
        products.set_data(products_data);

        let activated: Rc<RefCell<Option<Product>>> = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&activated);
        products.on_row_click(Box::new(move |product: &Product| {
            *sink.borrow_mut() = Some(product.clone());
        }));

        let mut modal = Modal::new("Product details", ModalSize::Md);
        modal.on_close(Box::new(|| log::debug!("product modal dismissed")));

        Ok(Self {
            screen: NavTarget::Dashboard,
            header: DashboardHeader::new(&config.ui.user_name, &config.ui.store_name, icons),
            alerts: SmartAlerts::new(icons),
            quick_actions: QuickActions::standard(icons),
            products,
            modal,
            activated,
            metrics,
            low_stock_threshold: threshold,
            theme,
            status_message: None,
            should_quit: false,
        })
    }

    fn product_detail(&self, product: &Product) -> Text<'static> {
        Text::from(vec![
            Line::from(Span::styled(product.name.clone(), self.theme.heading())),
            Line::default(),
            Line::from(format!("SKU:       {}", product.sku)),
            Line::from(format!("Category:  {}", product.category)),
            Line::from(format!("Price:     {}", product.display_price())),
            Line::from(format!("On hand:   {}", product.on_hand)),
            Line::default(),
            Line::from(create_stock_badge(
                product.on_hand,
                self.low_stock_threshold,
                &self.theme,
            )),
        ])
    }

    /// Route an input event to whichever component has focus
    pub fn handle_events(&mut self, event: Option<Event>) {
        // While the modal is open it gets every event: focus stays inside
        if self.modal.is_open() {
            let action = self.modal.handle_events(event);
            self.update(action);
            return;
        }

        let action = match event {
            Some(Event::Key(key)) => {
                self.status_message = None;
                match key.code {
                    KeyCode::Char('q') => Action::Quit,
                    KeyCode::Char('1') => Action::Navigate(NavTarget::Dashboard),
                    KeyCode::Char('2') => Action::Navigate(NavTarget::Products),
                    _ => match self.screen {
                        NavTarget::Products => {
                            let action = self.products.handle_key_events(key);
                            self.open_activated_product();
                            action
                        }
                        _ => self.quick_actions.handle_key_events(key),
                    },
                }
            }
            Some(Event::Mouse(_)) if self.screen == NavTarget::Products => {
                let action = self.products.handle_events(event);
                self.open_activated_product();
                action
            }
            _ => return,
        };
        self.update(action);
    }

    /// Open the detail modal for a row the table just activated, if any
    fn open_activated_product(&mut self) {
        if let Some(product) = self.activated.borrow_mut().take() {
            let detail = self.product_detail(&product);
            self.modal.set_title(product.name.clone());
            self.modal.set_body(detail);
            self.products.on_blur();
            self.modal.open();
            self.modal.on_focus();
        }
    }

    fn update(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Navigate(NavTarget::Dashboard) => self.screen = NavTarget::Dashboard,
            Action::Navigate(NavTarget::Products) => self.screen = NavTarget::Products,
            Action::Navigate(target) => {
                log::info!("navigation requested: {target:?}");
                self.status_message = Some(NOT_IN_DEMO.to_string());
            }
            Action::CloseModal => {
                // The modal reported the close request; visibility is ours
                self.modal.on_blur();
                self.modal.close();
                self.products.on_focus();
            }
            _ => {}
        }
    }

    /// Render the current screen
    pub fn render(&mut self, f: &mut Frame) {
        let areas = LayoutManager::main_layout(f.area());
        let (content, status) = (areas[0], areas[1]);
        let now = Local::now();

        match self.screen {
            NavTarget::Products => {
                let theme = self.theme.clone();
                self.products.render(f, content, &theme);
            }
            _ => {
                let rows = LayoutManager::dashboard_layout(content);
                let theme = self.theme.clone();
                self.header.render(f, rows[0], &theme, now);
                self.alerts.render(f, rows[1], &theme, &self.metrics, now);
                self.quick_actions.render(f, rows[2], &theme);
            }
        }

        let hints = if self.modal.is_open() {
            crate::constants::HINT_MODAL
        } else if self.screen == NavTarget::Products {
            HINT_PRODUCTS
        } else {
            HINT_DASHBOARD
        };
        StatusBar::render(f, status, &self.theme, self.status_message.as_deref(), hints);

        // Overlay goes last so it sits on top of the screen content
        let theme = self.theme.clone();
        self.modal.render(f, content, &theme);
    }
}
