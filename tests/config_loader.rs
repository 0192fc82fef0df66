mod common;

use common::temp_file;
use sitenav::config::{Config, ConfigError, ConfigStore, DisplayConfig, MIN_BREAKPOINT};
use sitenav::menu::{CtaToggle, Justify};
use sitenav::ui::navbar::NavbarVariant;

const TOML_CONFIG: &str = r#"
[display]
variant = "classic"
breakpoint = 90

[navbar]
logo = "/images/logo.svg"
isCtaButton = "on"
justifyContent = "center"

[[navbar.menuList]]
title = "Home"
href = "/"

[[navbar.menuList]]
title = "Products"

[[navbar.menuList.subLinks]]
title = "A"
href = "/a"

[[navbar.menuList.subLinks]]
title = "B"
href = "/b"

[[navbar.buttons]]
label = "Get started"
href = "/signup"
"#;

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.display, DisplayConfig::default());
    assert_eq!(config.display.breakpoint, 100);
    assert_eq!(config.display.variant, NavbarVariant::Classic);
    assert_eq!(config.navbar.menu_list.len(), 1);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("sitenav/navbar.toml"));
}

#[test]
fn test_load_toml() {
    let (_dir, path) = temp_file("navbar.toml", TOML_CONFIG);
    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.display.breakpoint, 90);
    assert_eq!(config.navbar.is_cta_button, CtaToggle::On);
    assert_eq!(config.navbar.justify(), Justify::Center);
    assert_eq!(config.navbar.menu_list.len(), 2);
    let products = &config.navbar.menu_list[1];
    assert_eq!(products.sub_links.as_ref().unwrap().len(), 2);
    assert_eq!(config.navbar.buttons[0].label, "Get started");
    assert!(!config.navbar.buttons[0].new_tab);
}

#[test]
fn test_load_json_by_extension() {
    let json = r#"{
        "display": {"breakpoint": 80},
        "navbar": {
            "logo": "/logo.png",
            "menuList": [{"title": "Home", "href": "/"}]
        }
    }"#;
    let (_dir, path) = temp_file("navbar.json", json);
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.display.breakpoint, 80);
    assert_eq!(config.navbar.justify(), Justify::Start);
    assert_eq!(config.navbar.is_cta_button, CtaToggle::Off);
}

#[test]
fn test_missing_sections_take_defaults() {
    let (_dir, path) = temp_file("navbar.toml", "[navbar]\nlogo = \"/l.png\"\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.display, DisplayConfig::default());
    assert!(config.navbar.menu_list.is_empty());
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_file("navbar.toml", "[navbar\nlogo = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_invalid_json_is_json_error() {
    let (_dir, path) = temp_file("navbar.json", "{ not json");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::JsonError { .. }));
}

#[test]
fn test_unknown_alignment_token_is_rejected() {
    let (_dir, path) = temp_file(
        "navbar.toml",
        "[navbar]\nlogo = \"/l.png\"\njustifyContent = \"diagonal\"\n",
    );
    assert!(matches!(
        Config::load_from(&path).unwrap_err(),
        ConfigError::ParseError { .. }
    ));
}

#[test]
fn test_validation_rejects_tiny_breakpoint() {
    let mut config = Config::default();
    config.display.breakpoint = MIN_BREAKPOINT - 1;
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("Breakpoint"));
}

#[test]
fn test_validation_rejects_empty_logo() {
    let mut config = Config::default();
    config.navbar.logo = "  ".into();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_malformed_menu_still_loads() {
    let content = r#"
[navbar]
logo = "/l.png"

[[navbar.menuList]]
title = "Label only"
"#;
    let (_dir, path) = temp_file("navbar.toml", content);
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.navbar.diagnostics().len(), 1);
}

#[test]
fn test_store_reload_detects_changes() {
    let (_dir, path) = temp_file("navbar.toml", TOML_CONFIG);
    let store = ConfigStore::new(Config::load_from(&path).unwrap(), Some(path.clone()));

    assert!(!store.reload().unwrap());

    std::fs::write(&path, TOML_CONFIG.replace("breakpoint = 90", "breakpoint = 70")).unwrap();
    assert!(store.reload().unwrap());
    assert_eq!(store.get().display.breakpoint, 70);
}

#[test]
fn test_store_keeps_old_config_on_failed_reload() {
    let (_dir, path) = temp_file("navbar.toml", TOML_CONFIG);
    let store = ConfigStore::new(Config::load_from(&path).unwrap(), Some(path.clone()));

    std::fs::write(&path, "not = [valid").unwrap();
    assert!(store.reload().is_err());
    assert_eq!(store.get().display.breakpoint, 90);
    assert_eq!(store.path(), Some(path.as_path()));
}
