use serde::Serialize;

use crate::menu::GroupId;
use crate::ui::action::NavAction;
use crate::ui::menu_view::context::{GroupAffordance, MenuLayout, RenderContext};

/// Rendered menu for one context. `items` follows `menu_list` order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuView {
    pub context: RenderContext,
    #[serde(flatten)]
    pub layout: MenuLayout,
    pub items: Vec<MenuItemView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuItemView {
    Link(LinkView),
    Group(GroupView),
    Inert(InertView),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    pub title: String,
    pub href: String,
    pub on_select: NavAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupView {
    pub id: GroupId,
    pub title: String,
    pub affordance: GroupAffordance,
    pub expanded: bool,
    pub on_toggle: NavAction,
    /// Nested rows, only populated while expanded. Never contains groups:
    /// deeper groups appear as inert header rows.
    pub links: Vec<MenuItemView>,
}

/// Non-interactive label for an entry that is neither leaf nor group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InertView {
    pub title: String,
}

impl MenuItemView {
    pub fn title(&self) -> &str {
        match self {
            Self::Link(link) => &link.title,
            Self::Group(group) => &group.title,
            Self::Inert(inert) => &inert.title,
        }
    }

    pub fn as_group(&self) -> Option<&GroupView> {
        match self {
            Self::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_link(&self) -> Option<&LinkView> {
        match self {
            Self::Link(link) => Some(link),
            _ => None,
        }
    }

    /// The action activating this row triggers; `None` for inert rows.
    pub fn action(&self) -> Option<&NavAction> {
        match self {
            Self::Link(link) => Some(&link.on_select),
            Self::Group(group) => Some(&group.on_toggle),
            Self::Inert(_) => None,
        }
    }
}

impl MenuView {
    /// Top-level titles in render order.
    pub fn titles(&self) -> Vec<&str> {
        self.items.iter().map(MenuItemView::title).collect()
    }

    pub fn group(&self, id: GroupId) -> Option<&GroupView> {
        self.items
            .iter()
            .filter_map(MenuItemView::as_group)
            .find(|group| group.id == id)
    }
}
