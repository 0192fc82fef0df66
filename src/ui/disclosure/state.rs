use std::collections::BTreeSet;

use crate::menu::GroupId;
use crate::ui::mvi::UiState;

/// Which top-level groups are expanded in one rendering context.
///
/// Unseen ids read as collapsed. The default value is "all collapsed".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpansionState {
    expanded: BTreeSet<GroupId>,
}

impl UiState for ExpansionState {}

impl ExpansionState {
    pub fn is_expanded(&self, group: GroupId) -> bool {
        self.expanded.contains(&group)
    }

    pub fn is_all_collapsed(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Expanded groups in index order.
    pub fn expanded(&self) -> impl Iterator<Item = GroupId> + '_ {
        self.expanded.iter().copied()
    }

    pub(super) fn flip(mut self, group: GroupId) -> Self {
        if !self.expanded.remove(&group) {
            self.expanded.insert(group);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_collapsed() {
        let state = ExpansionState::default();
        assert!(state.is_all_collapsed());
        assert!(!state.is_expanded(GroupId(0)));
        assert!(!state.is_expanded(GroupId(99)));
    }

    #[test]
    fn flip_adds_then_removes() {
        let state = ExpansionState::default().flip(GroupId(2));
        assert!(state.is_expanded(GroupId(2)));
        assert_eq!(state.expanded().collect::<Vec<_>>(), vec![GroupId(2)]);
        let state = state.flip(GroupId(2));
        assert!(state.is_all_collapsed());
    }
}
