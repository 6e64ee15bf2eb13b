//! Theme tokens resolved into ratatui styles
//!
//! The configuration file enumerates named color tokens as strings; this
//! module resolves them once into concrete [`Color`]s and [`Style`]s that
//! every component consumes. Components never hard-code palette colors, so
//! an unstyled element cannot appear by accident: an unknown token fails
//! configuration validation up front instead of degrading silently at
//! render time.

use once_cell::sync::Lazy;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use thiserror::Error;

use crate::config::ThemeConfig;
use crate::ui::components::badge::BadgeVariant;
use crate::utils::color::parse_color;

static FALLBACK: Lazy<Theme> = Lazy::new(Theme::default);

/// Errors produced while resolving theme configuration
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid color '{value}' for token '{token}': expected #rrggbb or a palette name")]
    InvalidColor { token: String, value: String },
    #[error("unknown border style '{0}': expected rounded, plain, thick, or double")]
    UnknownBorder(String),
    #[error("unknown emphasis '{0}': expected dim, bold, or none")]
    UnknownEmphasis(String),
}

/// Resolved theme: every color and style token the components use
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Named palette colors
    pub navy: Color,
    pub slate: Color,
    pub cyan: Color,
    pub emerald: Color,

    // Background and text tones
    pub background: Color,
    pub surface: Color,
    pub text_primary: Color,
    pub text_secondary: Color,

    // Badge variant colors
    pub badge_default: Color,
    pub badge_success: Color,
    pub badge_warning: Color,
    pub badge_danger: Color,
    pub badge_info: Color,

    // Shadow-analogue emphasis tokens
    pub backdrop_emphasis: Modifier,
    pub raised_emphasis: Modifier,

    /// Border shape used by every block (the terminal stand-in for a
    /// border-radius token)
    pub border_type: BorderType,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            navy: Color::Rgb(30, 58, 95),
            slate: Color::Rgb(100, 116, 139),
            cyan: Color::Rgb(6, 182, 212),
            emerald: Color::Rgb(16, 185, 129),
            background: Color::Rgb(15, 23, 42),
            surface: Color::Rgb(30, 41, 59),
            text_primary: Color::Rgb(226, 232, 240),
            text_secondary: Color::Rgb(148, 163, 184),
            badge_default: Color::Rgb(100, 116, 139),
            badge_success: Color::Rgb(16, 185, 129),
            badge_warning: Color::Rgb(245, 158, 11),
            badge_danger: Color::Rgb(239, 68, 68),
            badge_info: Color::Rgb(6, 182, 212),
            backdrop_emphasis: Modifier::DIM,
            raised_emphasis: Modifier::BOLD,
            border_type: BorderType::Rounded,
        }
    }
}

impl Theme {
    /// Resolve a theme from its configuration section.
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ThemeError> {
        let resolve = |token: &str, value: &str| {
            parse_color(value).ok_or_else(|| ThemeError::InvalidColor {
                token: token.to_string(),
                value: value.to_string(),
            })
        };

        Ok(Self {
            navy: resolve("navy", &config.navy)?,
            slate: resolve("slate", &config.slate)?,
            cyan: resolve("cyan", &config.cyan)?,
            emerald: resolve("emerald", &config.emerald)?,
            background: resolve("background", &config.background)?,
            surface: resolve("surface", &config.surface)?,
            text_primary: resolve("text_primary", &config.text_primary)?,
            text_secondary: resolve("text_secondary", &config.text_secondary)?,
            badge_default: resolve("badge_default", &config.badge_default)?,
            badge_success: resolve("badge_success", &config.badge_success)?,
            badge_warning: resolve("badge_warning", &config.badge_warning)?,
            badge_danger: resolve("badge_danger", &config.badge_danger)?,
            badge_info: resolve("badge_info", &config.badge_info)?,
            backdrop_emphasis: parse_emphasis(&config.backdrop_dim)?,
            raised_emphasis: parse_emphasis(&config.raised_bold)?,
            border_type: parse_border(&config.border)?,
        })
    }

    /// Shared default theme for callers that render without loading a
    /// configuration file (demos, tests).
    #[must_use]
    pub fn fallback() -> &'static Theme {
        &FALLBACK
    }

    /// Background color for a badge variant
    #[must_use]
    pub fn badge_color(&self, variant: BadgeVariant) -> Color {
        match variant {
            BadgeVariant::Default => self.badge_default,
            BadgeVariant::Success => self.badge_success,
            BadgeVariant::Warning => self.badge_warning,
            BadgeVariant::Danger => self.badge_danger,
            BadgeVariant::Info => self.badge_info,
        }
    }

    /// Primary text style
    #[must_use]
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Secondary (muted) text style
    #[must_use]
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Section heading style
    #[must_use]
    pub fn heading(&self) -> Style {
        Style::default().fg(self.cyan).add_modifier(Modifier::BOLD)
    }

    /// Style applied behind a modal to dim the screen (the terminal
    /// analogue of a drop shadow)
    #[must_use]
    pub fn backdrop(&self) -> Style {
        Style::default()
            .fg(self.text_secondary)
            .add_modifier(self.backdrop_emphasis)
    }

    /// Emphasis style for raised surfaces like the selected quick action
    #[must_use]
    pub fn raised(&self) -> Style {
        Style::default().fg(self.cyan).add_modifier(self.raised_emphasis)
    }

    /// Table header row style
    #[must_use]
    pub fn table_header(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .bg(self.navy)
            .add_modifier(Modifier::BOLD)
    }

    /// Highlight style for the selected interactive table row
    #[must_use]
    pub fn row_highlight(&self) -> Style {
        Style::default().bg(self.surface).add_modifier(Modifier::BOLD)
    }

    /// Standard bordered block with this theme's border shape
    #[must_use]
    pub fn block<'a>(&self, title: &'a str) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(self.border_type)
            .border_style(Style::default().fg(self.slate))
            .title(title)
            .title_style(self.heading())
    }
}

fn parse_emphasis(token: &str) -> Result<Modifier, ThemeError> {
    match token.to_lowercase().as_str() {
        "dim" => Ok(Modifier::DIM),
        "bold" => Ok(Modifier::BOLD),
        "none" => Ok(Modifier::empty()),
        other => Err(ThemeError::UnknownEmphasis(other.to_string())),
    }
}

fn parse_border(token: &str) -> Result<BorderType, ThemeError> {
    match token.to_lowercase().as_str() {
        "rounded" => Ok(BorderType::Rounded),
        "plain" => Ok(BorderType::Plain),
        "thick" => Ok(BorderType::Thick),
        "double" => Ok(BorderType::Double),
        other => Err(ThemeError::UnknownBorder(other.to_string())),
    }
}
