use serde::{Deserialize, Serialize};

use crate::menu::NavbarConfig;
use crate::ui::navbar::NavbarVariant;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub navbar: NavbarConfig,
}

/// Presentation settings that are not part of the menu description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Visual treatment of the navbar (default: "classic").
    #[serde(default)]
    pub variant: NavbarVariant,
    /// Terminal width, in columns, at and above which the desktop bar is
    /// shown (default: 100).
    #[serde(default = "default_breakpoint")]
    pub breakpoint: u16,
}

fn default_breakpoint() -> u16 {
    100
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            variant: NavbarVariant::default(),
            breakpoint: default_breakpoint(),
        }
    }
}
