use super::intent::Intent;
use super::state::UiState;

/// The only place a state transition happens.
///
/// Must be total: every `(State, Intent)` pair yields a state, no errors.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
