//! Responsive site navigation bar: menu composition and disclosure state.

pub mod config;
pub mod logging;
pub mod menu;
pub mod shutdown;
pub mod ui;
