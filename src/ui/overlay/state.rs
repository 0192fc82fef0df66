use crate::ui::disclosure::ExpansionState;
use crate::ui::mvi::UiState;

/// Mobile slide-over panel state.
///
/// The mobile menu's `ExpansionState` lives inside `Open`: it is created on
/// open and dropped on dismiss, so every session starts all collapsed.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open {
        menu: ExpansionState,
    },
}

impl UiState for OverlayState {}

impl OverlayState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Expansion state of the mounted mobile menu, if any.
    pub fn mobile_menu(&self) -> Option<&ExpansionState> {
        match self {
            Self::Open { menu } => Some(menu),
            Self::Closed => None,
        }
    }
}
