use crate::ui::disclosure::intent::DisclosureIntent;
use crate::ui::disclosure::state::ExpansionState;
use crate::ui::mvi::Reducer;

pub struct DisclosureReducer;

impl Reducer for DisclosureReducer {
    type State = ExpansionState;
    type Intent = DisclosureIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // No exclusivity: other groups keep their flags.
            DisclosureIntent::Toggle(group) => state.flip(group),
        }
    }
}
