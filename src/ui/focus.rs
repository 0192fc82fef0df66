//! Keyboard focus over the interactive affordances of the active
//! presentation.

use crate::menu::GroupId;
use crate::ui::action::NavAction;
use crate::ui::layout::Presentation;
use crate::ui::menu_view::{MenuView, RenderContext};
use crate::ui::navbar::{ButtonListSlot, NavbarView};

/// Where a focusable affordance sits in the painted navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusSlot {
    MenuToggle,
    OverlayClose,
    Item { context: RenderContext, index: usize },
    SubItem { context: RenderContext, group: GroupId, index: usize },
    Button { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTarget {
    pub slot: FocusSlot,
    pub action: NavAction,
}

/// Focusable affordances in visual order.
///
/// Desktop: menu row (with expanded popover links after their group), then
/// buttons. Mobile: the menu toggle while closed; close control, menu and
/// buttons while the panel is open.
pub fn focus_targets(view: &NavbarView, presentation: Presentation) -> Vec<FocusTarget> {
    let mut targets = Vec::new();
    match presentation {
        Presentation::Desktop => {
            push_menu(&mut targets, &view.desktop);
            push_buttons(&mut targets, view.buttons.as_ref(), false);
        }
        Presentation::Mobile => match &view.overlay {
            Some(overlay) => {
                targets.push(FocusTarget {
                    slot: FocusSlot::OverlayClose,
                    action: overlay.close.clone(),
                });
                push_menu(&mut targets, &overlay.menu);
                push_buttons(&mut targets, overlay.buttons.as_ref(), true);
            }
            None => targets.push(FocusTarget {
                slot: FocusSlot::MenuToggle,
                action: view.menu_toggle.clone(),
            }),
        },
    }
    targets
}

fn push_menu(targets: &mut Vec<FocusTarget>, menu: &MenuView) {
    let context = menu.context;
    for (index, item) in menu.items.iter().enumerate() {
        if let Some(action) = item.action() {
            targets.push(FocusTarget {
                slot: FocusSlot::Item { context, index },
                action: action.clone(),
            });
        }
        let Some(group) = item.as_group() else {
            continue;
        };
        for (index, link) in group.links.iter().enumerate() {
            if let Some(action) = link.action() {
                targets.push(FocusTarget {
                    slot: FocusSlot::SubItem {
                        context,
                        group: group.id,
                        index,
                    },
                    action: action.clone(),
                });
            }
        }
    }
}

fn push_buttons(targets: &mut Vec<FocusTarget>, slot: Option<&ButtonListSlot>, dismiss_overlay: bool) {
    let Some(slot) = slot else {
        return;
    };
    for (index, button) in slot.buttons.iter().enumerate() {
        targets.push(FocusTarget {
            slot: FocusSlot::Button { index },
            action: NavAction::Navigate {
                href: button.href.clone(),
                dismiss_overlay,
            },
        });
    }
}
