//! Constants used throughout the application
//!
//! This module centralizes UI text and other constant values to improve
//! maintainability and consistency.

// Greetings selected by hour of day
pub const GREETING_MORNING: &str = "Good Morning";
pub const GREETING_AFTERNOON: &str = "Good Afternoon";
pub const GREETING_EVENING: &str = "Good Evening";

// Daily tips shown by the smart alerts widget
pub const TIP_MONDAY: &str = "💡 Tip: review last week's sales and restock your best sellers";
pub const TIP_FRIDAY: &str = "💡 Tip: stock up before the weekend rush";
pub const TIP_GENERIC: &str = "💡 Tip: keep an eye on low-stock items to avoid missed sales";

// Smart alerts text
pub const ALERTS_ALL_CLEAR: &str = "All good! No stock alerts right now";
pub const ALERTS_OUT_OF_STOCK_HINT: &str = "Restock now to avoid missed sales";
pub const ALERTS_LOW_STOCK_HINT: &str = "Running low, consider reordering soon";

// Table defaults
pub const TABLE_EMPTY_MESSAGE: &str = "No data available";

// Status bar hints
pub const HINT_DASHBOARD: &str = "1: dashboard • 2: products • ←/→: actions • Enter: open • q: quit";
pub const HINT_PRODUCTS: &str = "↑/↓: move • Enter: details • 1: dashboard • q: quit";
pub const HINT_MODAL: &str = "↑/↓: scroll • Esc: close";

// Config messages
pub const CONFIG_GENERATED: &str = "✅ Configuration file generated";

// Navigation stubs used by the demo panel
pub const NOT_IN_DEMO: &str = "That screen is not part of this demo";
