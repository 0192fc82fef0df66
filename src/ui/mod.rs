//! Navbar state engine and its terminal front end.
//!
//! The core (`mvi`, `disclosure`, `overlay`, `menu_view`, `navbar`,
//! `action`) is pure and single-threaded: every transition happens
//! synchronously inside one event callback. The remaining modules are the
//! presentation layer that paints the view tree and feeds input back in.

pub mod action;
pub mod app;
pub mod disclosure;
pub mod events;
pub mod focus;
pub mod footer;
pub mod input;
pub mod layout;
pub mod menu_view;
pub mod mvi;
pub mod navbar;
pub mod overlay;
pub mod paint;
pub mod panel;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
