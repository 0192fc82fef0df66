mod common;

use common::{products_menu, site_menu};
use sitenav::menu::{GroupId, Justify, MenuEntry};
use sitenav::ui::action::NavAction;
use sitenav::ui::disclosure::{DisclosureIntent, DisclosureReducer, ExpansionState};
use sitenav::ui::menu_view::{render_menu, GroupAffordance, MenuItemView, MenuLayout, RenderContext};
use sitenav::ui::mvi::Reducer;

fn expanded(groups: &[usize]) -> ExpansionState {
    groups.iter().fold(ExpansionState::default(), |state, group| {
        DisclosureReducer::reduce(state, DisclosureIntent::Toggle(GroupId(*group)))
    })
}

#[test]
fn order_matches_menu_list_in_both_contexts() {
    let menu = site_menu();
    for context in [RenderContext::Desktop, RenderContext::Mobile] {
        let view = render_menu(&menu, context, Justify::Start, &expanded(&[1, 3]));
        assert_eq!(
            view.titles(),
            vec!["Home", "Products", "Coming soon", "Resources", "Pricing"]
        );
    }
}

#[test]
fn expanded_group_lists_its_links_in_order() {
    let view = render_menu(&products_menu(), RenderContext::Desktop, Justify::Start, &expanded(&[1]));
    let group = view.group(GroupId(1)).unwrap();
    assert!(group.expanded);
    let titles: Vec<_> = group.links.iter().map(MenuItemView::title).collect();
    assert_eq!(titles, vec!["A", "B"]);
}

#[test]
fn group_toggle_is_bound_to_its_index_and_context() {
    let view = render_menu(&site_menu(), RenderContext::Mobile, Justify::Start, &ExpansionState::default());
    let group = view.group(GroupId(3)).unwrap();
    assert_eq!(
        group.on_toggle,
        NavAction::ToggleGroup {
            context: RenderContext::Mobile,
            group: GroupId(3)
        }
    );
    assert_eq!(group.affordance, GroupAffordance::Accordion);
}

#[test]
fn deep_groups_are_flattened_not_dropped() {
    let view = render_menu(&site_menu(), RenderContext::Desktop, Justify::Start, &expanded(&[3]));
    let group = view.group(GroupId(3)).unwrap();
    let titles: Vec<_> = group.links.iter().map(MenuItemView::title).collect();
    assert_eq!(titles, vec!["Docs", "Guides", "Setup"]);
    assert!(group.links.iter().all(|link| link.as_group().is_none()));
    assert!(matches!(group.links[1], MenuItemView::Inert(_)));
}

#[test]
fn empty_nested_group_keeps_its_title() {
    let menu = vec![MenuEntry::group(
        "Products",
        vec![MenuEntry::leaf("A", "/a"), MenuEntry::group("Guides", vec![])],
    )];
    for context in [RenderContext::Desktop, RenderContext::Mobile] {
        let view = render_menu(&menu, context, Justify::Start, &expanded(&[0]));
        let group = view.group(GroupId(0)).unwrap();
        let titles: Vec<_> = group.links.iter().map(MenuItemView::title).collect();
        assert_eq!(titles, vec!["A", "Guides"]);
        assert!(group.links[1].action().is_none());
    }
}

#[test]
fn desktop_links_do_not_dismiss_the_overlay() {
    let view = render_menu(&products_menu(), RenderContext::Desktop, Justify::Start, &expanded(&[1]));
    let nested = view.group(GroupId(1)).unwrap().links[0].as_link().unwrap();
    assert_eq!(
        nested.on_select,
        NavAction::Navigate {
            href: "/a".into(),
            dismiss_overlay: false
        }
    );
}

#[test]
fn desktop_row_carries_the_alignment() {
    let view = render_menu(&products_menu(), RenderContext::Desktop, Justify::End, &ExpansionState::default());
    assert_eq!(view.layout, MenuLayout::Row { justify: Justify::End });
}

#[test]
fn inert_entries_keep_their_position() {
    let view = render_menu(&site_menu(), RenderContext::Mobile, Justify::Start, &ExpansionState::default());
    assert!(matches!(view.items[2], MenuItemView::Inert(_)));
    assert!(view.items[2].action().is_none());
}

#[test]
fn view_serializes_with_tags() {
    let view = render_menu(&products_menu(), RenderContext::Desktop, Justify::Start, &expanded(&[1]));
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["context"], "desktop");
    assert_eq!(json["layout"], "row");
    assert_eq!(json["justify"], "start");
    assert_eq!(json["items"][0]["kind"], "link");
    assert_eq!(json["items"][1]["kind"], "group");
    assert_eq!(json["items"][1]["on_toggle"]["action"], "toggle_group");
    assert_eq!(json["items"][1]["links"][1]["href"], "/b");
}
