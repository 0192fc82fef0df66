//! Pure rendering of a menu description into a per-context view.

mod context;
mod view;

pub use context::{GroupAffordance, MenuLayout, RenderContext};
pub use view::{GroupView, InertView, LinkView, MenuItemView, MenuView};

use crate::menu::{flatten_sub_links, EntryKind, GroupId, Justify, MenuEntry};
use crate::ui::action::NavAction;
use crate::ui::disclosure::ExpansionState;

/// Renders `menu_list` for `context`.
///
/// Item order is exactly `menu_list` order. Groups are bound to their index
/// as `GroupId` and only list their links while `expansion` says so.
pub fn render_menu(
    menu_list: &[MenuEntry],
    context: RenderContext,
    justify: Justify,
    expansion: &ExpansionState,
) -> MenuView {
    let items = menu_list
        .iter()
        .enumerate()
        .map(|(index, entry)| render_entry(GroupId(index), entry, context, expansion))
        .collect();

    MenuView {
        context,
        layout: context.layout(justify),
        items,
    }
}

fn render_entry(
    id: GroupId,
    entry: &MenuEntry,
    context: RenderContext,
    expansion: &ExpansionState,
) -> MenuItemView {
    match entry.kind() {
        EntryKind::Leaf { href } => MenuItemView::Link(link_view(&entry.title, href, context)),
        EntryKind::Group { links } => {
            let expanded = expansion.is_expanded(id);
            let links = if expanded {
                flatten_sub_links(links)
                    .into_iter()
                    .map(|link| render_nested(link, context))
                    .collect()
            } else {
                Vec::new()
            };
            MenuItemView::Group(GroupView {
                id,
                title: entry.title.clone(),
                affordance: context.group_affordance(),
                expanded,
                on_toggle: NavAction::ToggleGroup { context, group: id },
                links,
            })
        }
        EntryKind::Inert => MenuItemView::Inert(InertView {
            title: entry.title.clone(),
        }),
    }
}

// A nested group is not toggleable; it shows as a header label.
fn render_nested(entry: &MenuEntry, context: RenderContext) -> MenuItemView {
    match entry.kind() {
        EntryKind::Leaf { href } => MenuItemView::Link(link_view(&entry.title, href, context)),
        EntryKind::Group { .. } | EntryKind::Inert => MenuItemView::Inert(InertView {
            title: entry.title.clone(),
        }),
    }
}

fn link_view(title: &str, href: &str, context: RenderContext) -> LinkView {
    LinkView {
        title: title.to_string(),
        href: href.to_string(),
        on_select: NavAction::Navigate {
            href: href.to_string(),
            dismiss_overlay: context.leaf_dismisses_overlay(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products_menu() -> Vec<MenuEntry> {
        vec![
            MenuEntry::leaf("Home", "/"),
            MenuEntry::group(
                "Products",
                vec![MenuEntry::leaf("A", "/a"), MenuEntry::leaf("B", "/b")],
            ),
        ]
    }

    #[test]
    fn collapsed_group_has_no_links() {
        let view = render_menu(
            &products_menu(),
            RenderContext::Desktop,
            Justify::Start,
            &ExpansionState::default(),
        );
        let group = view.group(GroupId(1)).unwrap();
        assert!(!group.expanded);
        assert!(group.links.is_empty());
        assert_eq!(group.affordance, GroupAffordance::Popover);
    }

    #[test]
    fn mobile_links_dismiss_the_overlay() {
        let view = render_menu(
            &products_menu(),
            RenderContext::Mobile,
            Justify::Start,
            &ExpansionState::default(),
        );
        assert_eq!(view.layout, MenuLayout::Stack);
        assert_eq!(
            view.items[0].action(),
            Some(&NavAction::Navigate {
                href: "/".into(),
                dismiss_overlay: true
            })
        );
    }

    #[test]
    fn inert_entry_renders_label_without_action() {
        let view = render_menu(
            &[MenuEntry::inert("Soon")],
            RenderContext::Desktop,
            Justify::Center,
            &ExpansionState::default(),
        );
        assert!(matches!(&view.items[0], MenuItemView::Inert(InertView { title }) if title == "Soon"));
        assert!(view.items[0].action().is_none());
        assert_eq!(
            view.layout,
            MenuLayout::Row {
                justify: Justify::Center
            }
        );
    }
}
