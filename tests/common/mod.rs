//! Shared fixtures for navbar tests.

#![allow(dead_code, unused_imports)]

use sitenav::menu::{ButtonSpec, CtaToggle, MenuEntry, NavbarConfig};
use sitenav::ui::navbar::{compose, Navbar, NavbarVariant};
use std::path::PathBuf;
use tempfile::TempDir;

/// `[Home -> /, Products { A -> /a, B -> /b }]`
pub fn products_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::leaf("Home", "/"),
        MenuEntry::group(
            "Products",
            vec![MenuEntry::leaf("A", "/a"), MenuEntry::leaf("B", "/b")],
        ),
    ]
}

/// A larger menu with several groups, an inert label and a deep group.
pub fn site_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::leaf("Home", "/"),
        MenuEntry::group(
            "Products",
            vec![MenuEntry::leaf("A", "/a"), MenuEntry::leaf("B", "/b")],
        ),
        MenuEntry::inert("Coming soon"),
        MenuEntry::group(
            "Resources",
            vec![
                MenuEntry::leaf("Docs", "/docs"),
                MenuEntry::group("Guides", vec![MenuEntry::leaf("Setup", "/guides/setup")]),
            ],
        ),
        MenuEntry::leaf("Pricing", "/pricing"),
    ]
}

pub fn buttons() -> Vec<ButtonSpec> {
    vec![ButtonSpec {
        label: "Get started".into(),
        href: "/signup".into(),
        new_tab: true,
    }]
}

pub fn navbar_config(menu: Vec<MenuEntry>, cta: CtaToggle) -> NavbarConfig {
    let mut config = NavbarConfig::new("/images/logo.svg", menu);
    config.is_cta_button = cta;
    config.buttons = buttons();
    config
}

pub fn navbar(menu: Vec<MenuEntry>) -> Navbar {
    compose(NavbarVariant::Classic, navbar_config(menu, CtaToggle::On))
}

/// Writes `content` to `name` inside a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}
