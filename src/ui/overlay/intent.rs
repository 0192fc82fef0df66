use serde::Serialize;

use crate::menu::GroupId;
use crate::ui::mvi::Intent;

/// What caused the overlay to be dismissed. All triggers share one
/// dismissal path; the trigger is carried for logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissTrigger {
    CloseButton,
    Backdrop,
    Escape,
    /// A leaf link inside the panel was selected.
    LinkSelected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayIntent {
    Open,
    Dismiss(DismissTrigger),
    /// Toggle a group of the mounted mobile menu.
    ToggleGroup(GroupId),
}

impl Intent for OverlayIntent {}
