//! Utility modules for the Inventorist application.
//!
//! This module contains common helpers used throughout the application:
//!
//! - [`color`] - Color token parsing for the theme layer
//! - [`datetime`] - Greeting, tip, and date formatting helpers
//!
//! All utilities here are pure functions with no side effects, so they are
//! easy to unit test and safe to call from render code.

pub mod color;
pub mod datetime;
