use serde::Serialize;

use crate::menu::GroupId;
use crate::ui::menu_view::RenderContext;
use crate::ui::overlay::DismissTrigger;

/// What an interactive affordance in the view tree does when activated.
///
/// Views only describe actions; `Navbar::dispatch` performs them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NavAction {
    /// Follow a leaf link. Mobile links also dismiss the overlay since the
    /// destination page replaces the view.
    Navigate { href: String, dismiss_overlay: bool },
    ToggleGroup { context: RenderContext, group: GroupId },
    OpenOverlay,
    DismissOverlay { trigger: DismissTrigger },
}

/// A destination handed to whoever owns routing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub href: String,
}
