//! Badge component: a short inline label with a semantic color variant
//! and size.
//!
//! Variants and sizes parse from free-form strings and fall back to
//! `Default` / `Md` on unrecognized input, so a typo in caller data can
//! never produce an unstyled element.

use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::theme::Theme;

/// Semantic color variant of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Success,
    Warning,
    Danger,
    Info,
}

impl BadgeVariant {
    /// Parse a variant name; anything unrecognized resolves to `Default`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "danger" => Self::Danger,
            "info" => Self::Info,
            _ => Self::Default,
        }
    }
}

/// Size of a badge, controlling padding and emphasis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl BadgeSize {
    /// Parse a size name; anything unrecognized resolves to `Md`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "sm" => Self::Sm,
            "lg" => Self::Lg,
            _ => Self::Md,
        }
    }

    fn padding(self) -> &'static str {
        match self {
            Self::Sm => "",
            Self::Md => " ",
            Self::Lg => "  ",
        }
    }
}

/// An inline label styled per variant and size
#[derive(Debug, Clone)]
pub struct Badge {
    text: String,
    variant: BadgeVariant,
    size: BadgeSize,
}

impl Badge {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            variant: BadgeVariant::default(),
            size: BadgeSize::default(),
        }
    }

    #[must_use]
    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn size(mut self, size: BadgeSize) -> Self {
        self.size = size;
        self
    }

    /// Render the badge as a styled span
    #[must_use]
    pub fn to_span(&self, theme: &Theme) -> Span<'static> {
        let pad = self.size.padding();
        let mut style = Style::default()
            .bg(theme.badge_color(self.variant))
            .fg(theme.text_primary);
        if self.size == BadgeSize::Lg {
            style = style.add_modifier(Modifier::BOLD);
        }
        Span::styled(format!("{pad}{}{pad}", self.text), style)
    }
}

/// Create a stock-status badge for an on-hand quantity
#[must_use]
pub fn create_stock_badge(on_hand: u32, low_stock_threshold: u32, theme: &Theme) -> Span<'static> {
    let (text, variant) = if on_hand == 0 {
        ("Out of stock".to_string(), BadgeVariant::Danger)
    } else if on_hand <= low_stock_threshold {
        (format!("Low ({on_hand})"), BadgeVariant::Warning)
    } else {
        (format!("In stock ({on_hand})"), BadgeVariant::Success)
    };
    Badge::new(text).variant(variant).to_span(theme)
}

/// Create a small count badge, e.g. for alert totals
#[must_use]
pub fn create_count_badge(count: u32, variant: BadgeVariant, theme: &Theme) -> Span<'static> {
    Badge::new(count.to_string())
        .variant(variant)
        .size(BadgeSize::Sm)
        .to_span(theme)
}
