use sitenav::menu::GroupId;
use sitenav::ui::disclosure::{DisclosureController, DisclosureIntent, DisclosureReducer, ExpansionState};
use sitenav::ui::mvi::Reducer;

fn toggle(state: ExpansionState, group: usize) -> ExpansionState {
    DisclosureReducer::reduce(state, DisclosureIntent::Toggle(GroupId(group)))
}

#[test]
fn toggle_expands_a_collapsed_group() {
    let state = toggle(ExpansionState::default(), 1);
    assert!(state.is_expanded(GroupId(1)));
}

#[test]
fn toggle_twice_restores_prior_value() {
    let initial = toggle(ExpansionState::default(), 4);
    let state = toggle(toggle(initial.clone(), 2), 2);
    assert_eq!(state, initial);
}

#[test]
fn multiple_groups_may_be_expanded_together() {
    let state = toggle(toggle(ExpansionState::default(), 0), 3);
    assert!(state.is_expanded(GroupId(0)));
    assert!(state.is_expanded(GroupId(3)));
    assert_eq!(state.expanded().collect::<Vec<_>>(), vec![GroupId(0), GroupId(3)]);
}

#[test]
fn unseen_ids_read_as_collapsed() {
    let state = toggle(ExpansionState::default(), 0);
    assert!(!state.is_expanded(GroupId(1_000)));
}

#[test]
fn controllers_do_not_share_state() {
    let mut first = DisclosureController::new();
    let second = DisclosureController::new();
    first.toggle(GroupId(1));
    assert!(first.is_expanded(GroupId(1)));
    assert!(!second.is_expanded(GroupId(1)));
    assert!(second.state().is_all_collapsed());
}

#[test]
fn controller_state_matches_the_reducer() {
    let mut controller = DisclosureController::new();
    controller.toggle(GroupId(2));
    controller.toggle(GroupId(5));
    assert_eq!(controller.state(), &toggle(toggle(ExpansionState::default(), 2), 5));
}
