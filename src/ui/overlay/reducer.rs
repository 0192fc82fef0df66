use crate::ui::disclosure::{DisclosureIntent, DisclosureReducer, ExpansionState};
use crate::ui::mvi::Reducer;
use crate::ui::overlay::intent::OverlayIntent;
use crate::ui::overlay::state::OverlayState;

pub struct OverlayReducer;

impl Reducer for OverlayReducer {
    type State = OverlayState;
    type Intent = OverlayIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            OverlayIntent::Open => match state {
                // Already open: keep the current session.
                open @ OverlayState::Open { .. } => open,
                OverlayState::Closed => OverlayState::Open {
                    menu: ExpansionState::default(),
                },
            },
            OverlayIntent::Dismiss(_) => OverlayState::Closed,
            OverlayIntent::ToggleGroup(group) => match state {
                OverlayState::Open { menu } => OverlayState::Open {
                    menu: DisclosureReducer::reduce(menu, DisclosureIntent::Toggle(group)),
                },
                closed => closed,
            },
        }
    }
}
