//! Inventorist - a terminal admin panel for point-of-sale inventory
//!
//! This library provides the reusable building blocks of the admin panel:
//! a badge, a modal dialog, a generic data table, and the dashboard widgets
//! (header, quick actions, smart alerts), all rendered with Ratatui and
//! styled through a TOML-configurable theme. The binary in `main.rs` wires
//! them into a small demo panel over sample catalog data.
//!
//! # Modules
//!
//! * [`config`] - Application and theme configuration management
//! * [`catalog`] - Sample product data used by the demo panel
//! * [`theme`] - Resolved style tokens consumed by every component
//! * [`ui`] - Terminal user interface components and rendering
//! * [`utils`] - Date/time and color helpers

/// Sample product catalog for the demo panel
pub mod catalog;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default UI text
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging setup (file-backed, never stdout while the TUI is up)
pub mod logger;

/// Theme tokens resolved into ratatui styles
pub mod theme;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;
