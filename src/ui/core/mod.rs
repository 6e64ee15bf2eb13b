//! Core UI functionality for the Inventorist application.
//!
//! The fundamental building blocks every component builds on:
//!
//! - [`actions`] - Action definitions and navigation targets
//! - [`component`] - Base component trait and rendering contract

pub mod actions;
pub mod component;

pub use actions::{Action, NavTarget};
pub use component::Component;
