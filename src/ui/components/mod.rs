//! Reusable UI components

pub mod badge;
pub mod dashboard_header;
pub mod modal;
pub mod quick_actions;
pub mod scrollbar_helper;
pub mod smart_alerts;
pub mod status_bar;
pub mod table;

// Component exports
pub use dashboard_header::DashboardHeader;
pub use modal::{Modal, ModalSize};
pub use quick_actions::{QuickAction, QuickActions};
pub use smart_alerts::{MetricsSummary, SmartAlerts};
pub use status_bar::StatusBar;
pub use table::{Column, DataTable, RowRecord};
