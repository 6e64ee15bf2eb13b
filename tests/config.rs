use inventorist::config::Config;
use inventorist::icons::IconTheme;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.user_name, "Manager");
    assert_eq!(config.ui.store_name, "Main Street Store");
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.alerts.low_stock_threshold, 5);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Zero threshold should fail
    config.alerts.low_stock_threshold = 0;
    assert!(config.validate().is_err());

    // Reset and test an invalid theme color
    config.alerts.low_stock_threshold = 5;
    config.theme.cyan = "#zzzzzz".to_string();
    assert!(config.validate().is_err());

    // Reset and test an empty user name
    config.theme.cyan = "#06b6d4".to_string();
    config.ui.user_name = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization_includes_theme_tokens() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();

    assert!(toml_str.contains("user_name = \"Manager\""));
    assert!(toml_str.contains("low_stock_threshold = 5"));
    // Every enumerated theme token round-trips through the config file
    for token in [
        "navy", "slate", "cyan", "emerald", "background", "surface", "text_primary",
        "text_secondary", "badge_success", "badge_danger", "backdrop_dim", "raised_bold",
        "border",
    ] {
        assert!(toml_str.contains(token), "missing theme token: {token}");
    }
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
user_name = "Sam"
icon_theme = "ascii"

[alerts]
low_stock_threshold = 10
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Specified values are used
    assert_eq!(config.ui.user_name, "Sam");
    assert_eq!(config.ui.icon_theme, IconTheme::Ascii);
    assert_eq!(config.alerts.low_stock_threshold, 10);

    // Unspecified values fall back to defaults
    assert_eq!(config.ui.store_name, "Main Street Store");
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.theme.border, "rounded");
    assert!(!config.logging.enabled);

    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.user_name, default_config.ui.user_name);
    assert_eq!(
        config.alerts.low_stock_threshold,
        default_config.alerts.low_stock_threshold
    );
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.theme.navy, default_config.theme.navy);
}

#[test]
fn test_theme_resolution_from_config() {
    let config = Config::default();
    let theme = config.theme().unwrap();
    assert_eq!(theme, inventorist::theme::Theme::default());
}
