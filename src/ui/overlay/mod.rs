//! Open/closed state of the mobile slide-over panel.

mod intent;
mod reducer;
mod state;

pub use intent::{DismissTrigger, OverlayIntent};
pub use reducer::OverlayReducer;
pub use state::OverlayState;

use crate::menu::GroupId;
use crate::ui::disclosure::ExpansionState;
use crate::ui::mvi::dispatch_mvi;

#[derive(Debug, Clone, Default)]
pub struct OverlayController {
    state: OverlayState,
}

impl OverlayController {
    /// Starts closed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        let was_open = self.state.is_open();
        dispatch_mvi!(self, state, OverlayReducer, OverlayIntent::Open);
        if !was_open {
            tracing::info!("mobile menu opened");
        }
    }

    /// Single dismissal entry point for every trigger.
    pub fn close(&mut self, trigger: DismissTrigger) {
        let was_open = self.state.is_open();
        dispatch_mvi!(self, state, OverlayReducer, OverlayIntent::Dismiss(trigger));
        if was_open {
            tracing::info!(?trigger, "mobile menu dismissed");
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Toggles a group of the mobile menu. No-op while closed.
    pub fn toggle_group(&mut self, group: GroupId) {
        dispatch_mvi!(self, state, OverlayReducer, OverlayIntent::ToggleGroup(group));
        if let Some(menu) = self.state.mobile_menu() {
            tracing::debug!(
                context = "mobile",
                %group,
                expanded = menu.is_expanded(group),
                "group toggled"
            );
        }
    }

    pub fn mobile_menu(&self) -> Option<&ExpansionState> {
        self.state.mobile_menu()
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }
}
