use inventorist::config::ThemeConfig;
use inventorist::theme::{Theme, ThemeError};
use inventorist::ui::components::badge::BadgeVariant;
use inventorist::utils::color::parse_color;
use ratatui::style::{Color, Modifier};
use ratatui::widgets::BorderType;

#[test]
fn test_parse_hex_colors() {
    assert_eq!(parse_color("#06b6d4"), Some(Color::Rgb(6, 182, 212)));
    assert_eq!(parse_color("#FFFFFF"), Some(Color::Rgb(255, 255, 255)));
    assert_eq!(parse_color(" #000000 "), Some(Color::Rgb(0, 0, 0)));
}

#[test]
fn test_parse_named_palette_colors() {
    assert_eq!(parse_color("navy"), Some(Color::Rgb(30, 58, 95)));
    assert_eq!(parse_color("Emerald"), Some(Color::Rgb(16, 185, 129)));
    assert_eq!(parse_color("slate"), Some(Color::Rgb(100, 116, 139)));
}

#[test]
fn test_invalid_colors_rejected() {
    assert_eq!(parse_color("#fff"), None); // short form not accepted
    assert_eq!(parse_color("#gggggg"), None);
    assert_eq!(parse_color("cornflower"), None);
    assert_eq!(parse_color(""), None);
}

#[test]
fn test_default_config_resolves_to_default_theme() {
    let theme = Theme::from_config(&ThemeConfig::default()).unwrap();
    assert_eq!(theme, Theme::default());
}

#[test]
fn test_enumerated_tokens_exist_and_resolve() {
    let theme = Theme::default();
    // The enumerated palette tokens are all distinct, resolved colors
    let tokens = [
        theme.navy,
        theme.cyan,
        theme.emerald,
        theme.background,
        theme.text_primary,
    ];
    for token in tokens {
        assert!(matches!(token, Color::Rgb(_, _, _)));
    }

    // Badge variants all map to a defined color
    for variant in [
        BadgeVariant::Default,
        BadgeVariant::Success,
        BadgeVariant::Warning,
        BadgeVariant::Danger,
        BadgeVariant::Info,
    ] {
        assert!(matches!(theme.badge_color(variant), Color::Rgb(_, _, _)));
    }
}

#[test]
fn test_emphasis_tokens_resolve() {
    let theme = Theme::default();
    assert!(theme.backdrop().add_modifier.contains(Modifier::DIM));
    assert!(theme.raised().add_modifier.contains(Modifier::BOLD));

    // "none" switches an emphasis off without touching anything else
    let config = ThemeConfig {
        backdrop_dim: "none".to_string(),
        ..ThemeConfig::default()
    };
    let theme = Theme::from_config(&config).unwrap();
    assert!(theme.backdrop().add_modifier.is_empty());
    assert!(theme.raised().add_modifier.contains(Modifier::BOLD));
}

#[test]
fn test_unknown_emphasis_is_an_error() {
    let config = ThemeConfig {
        raised_bold: "glow".to_string(),
        ..ThemeConfig::default()
    };
    assert!(matches!(
        Theme::from_config(&config),
        Err(ThemeError::UnknownEmphasis(_))
    ));
}

#[test]
fn test_invalid_color_token_is_an_error() {
    let config = ThemeConfig {
        navy: "not-a-color".to_string(),
        ..ThemeConfig::default()
    };
    let err = Theme::from_config(&config).unwrap_err();
    match err {
        ThemeError::InvalidColor { token, value } => {
            assert_eq!(token, "navy");
            assert_eq!(value, "not-a-color");
        }
        other => panic!("expected InvalidColor, got {other:?}"),
    }
}

#[test]
fn test_border_styles() {
    for (token, expected) in [
        ("rounded", BorderType::Rounded),
        ("plain", BorderType::Plain),
        ("thick", BorderType::Thick),
        ("double", BorderType::Double),
    ] {
        let config = ThemeConfig {
            border: token.to_string(),
            ..ThemeConfig::default()
        };
        assert_eq!(Theme::from_config(&config).unwrap().border_type, expected);
    }

    let config = ThemeConfig {
        border: "dotted".to_string(),
        ..ThemeConfig::default()
    };
    assert!(matches!(
        Theme::from_config(&config),
        Err(ThemeError::UnknownBorder(_))
    ));
}
