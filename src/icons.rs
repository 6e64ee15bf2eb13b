//! Icon service for managing different icon themes
//!
//! Centralizes the symbols used by the dashboard widgets, with an ASCII
//! fallback for terminals without emoji support.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    #[default]
    Emoji,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Icon lookup for the configured theme
#[derive(Debug, Clone, Copy, Default)]
pub struct IconService {
    theme: IconTheme,
}

impl IconService {
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { theme }
    }

    #[must_use]
    pub fn greeting(&self) -> &'static str {
        match self.theme {
            IconTheme::Emoji => "👋",
            IconTheme::Ascii => "~",
        }
    }

    #[must_use]
    pub fn all_clear(&self) -> &'static str {
        match self.theme {
            IconTheme::Emoji => "✅",
            IconTheme::Ascii => "[ok]",
        }
    }

    #[must_use]
    pub fn out_of_stock(&self) -> &'static str {
        match self.theme {
            IconTheme::Emoji => "🚨",
            IconTheme::Ascii => "[!!]",
        }
    }

    #[must_use]
    pub fn low_stock(&self) -> &'static str {
        match self.theme {
            IconTheme::Emoji => "⚠️",
            IconTheme::Ascii => "[!]",
        }
    }

    #[must_use]
    pub fn sale(&self) -> &'static str {
        match self.theme {
            IconTheme::Emoji => "🛒",
            IconTheme::Ascii => "$",
        }
    }

    #[must_use]
    pub fn product(&self) -> &'static str {
        match self.theme {
            IconTheme::Emoji => "📦",
            IconTheme::Ascii => "#",
        }
    }

    #[must_use]
    pub fn reports(&self) -> &'static str {
        match self.theme {
            IconTheme::Emoji => "📊",
            IconTheme::Ascii => "%",
        }
    }
}
