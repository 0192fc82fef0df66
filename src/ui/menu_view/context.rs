use serde::Serialize;

use crate::menu::Justify;

/// Which presentation a menu is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderContext {
    /// Inline horizontal bar with popover groups.
    Desktop,
    /// Full-height slide-over panel with accordion groups.
    Mobile,
}

/// How a group's disclosure control behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupAffordance {
    /// Floating panel positioned relative to the trigger.
    Popover,
    /// Section that expands in place, full-width tap target.
    Accordion,
}

/// Container the items are laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum MenuLayout {
    Row { justify: Justify },
    Stack,
}

impl RenderContext {
    pub fn group_affordance(self) -> GroupAffordance {
        match self {
            Self::Desktop => GroupAffordance::Popover,
            Self::Mobile => GroupAffordance::Accordion,
        }
    }

    pub fn layout(self, justify: Justify) -> MenuLayout {
        match self {
            Self::Desktop => MenuLayout::Row { justify },
            Self::Mobile => MenuLayout::Stack,
        }
    }

    /// Selecting a leaf in the mobile panel closes it.
    pub fn leaf_dismisses_overlay(self) -> bool {
        self == Self::Mobile
    }
}
