//! Per-context "is this group expanded" state.
//!
//! Desktop and mobile each own a separate `ExpansionState`; nothing here is
//! keyed by context, so a toggle in one can never reach the other.

mod intent;
mod reducer;
mod state;

pub use intent::DisclosureIntent;
pub use reducer::DisclosureReducer;
pub use state::ExpansionState;

use crate::menu::GroupId;
use crate::ui::mvi::dispatch_mvi;

/// Owns the expansion flags of the desktop menu for the navbar's lifetime.
///
/// The mobile menu has no controller of its own: its `ExpansionState` lives
/// inside `OverlayState::Open` and goes through the same reducer.
#[derive(Debug, Clone, Default)]
pub struct DisclosureController {
    expansion: ExpansionState,
}

impl DisclosureController {
    /// A freshly mounted controller: every group collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, group: GroupId) {
        dispatch_mvi!(self, expansion, DisclosureReducer, DisclosureIntent::Toggle(group));
        tracing::debug!(
            context = "desktop",
            %group,
            expanded = self.expansion.is_expanded(group),
            "group toggled"
        );
    }

    pub fn is_expanded(&self, group: GroupId) -> bool {
        self.expansion.is_expanded(group)
    }

    pub fn state(&self) -> &ExpansionState {
        &self.expansion
    }
}
