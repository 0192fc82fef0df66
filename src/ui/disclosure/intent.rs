use crate::menu::GroupId;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclosureIntent {
    /// User activated the disclosure control of a group.
    Toggle(GroupId),
}

impl Intent for DisclosureIntent {}
