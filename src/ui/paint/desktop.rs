use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::{
    button_label, button_style, clip, is_focused, item_style, logo_span, search_span,
    SEARCH_PLACEHOLDER,
};
use crate::menu::Justify;
use crate::ui::focus::FocusSlot;
use crate::ui::layout::justify_offsets;
use crate::ui::menu_view::{MenuItemView, MenuLayout, MenuView, RenderContext};
use crate::ui::navbar::NavbarView;
use crate::ui::theme::{BAR_BORDER, PANEL_BORDER};

const ITEM_GAP: u16 = 3;
const BUTTON_GAP: u16 = 1;

struct BarAreas {
    logo: Rect,
    menu: Rect,
    search: Rect,
    buttons: Rect,
}

pub(super) fn draw_bar(
    frame: &mut Frame<'_>,
    bar: Rect,
    view: &NavbarView,
    focused: Option<FocusSlot>,
) {
    frame.render_widget(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(BAR_BORDER)),
        bar,
    );
    let areas = bar_areas(bar, view);

    frame.render_widget(Paragraph::new(Line::from(logo_span(&view.logo))), areas.logo);

    for (index, (item, rect)) in view
        .desktop
        .items
        .iter()
        .zip(item_rects(&view.desktop, areas.menu))
        .enumerate()
    {
        if rect.is_empty() {
            continue;
        }
        let slot = FocusSlot::Item {
            context: RenderContext::Desktop,
            index,
        };
        let style = item_style(item, is_focused(focused, slot));
        frame.render_widget(Paragraph::new(Span::styled(desktop_label(item), style)), rect);
    }

    frame.render_widget(Paragraph::new(Line::from(search_span())), areas.search);

    if let Some(slot) = &view.buttons {
        let mut spans = Vec::new();
        for (index, button) in slot.buttons.iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw(" ".repeat(BUTTON_GAP as usize)));
            }
            let focused = is_focused(focused, FocusSlot::Button { index });
            spans.push(Span::styled(button_label(button), button_style(focused)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), areas.buttons);
    }
}

/// Popover panels under every expanded group trigger.
pub(super) fn draw_popovers(
    frame: &mut Frame<'_>,
    screen: Rect,
    bar: Rect,
    view: &NavbarView,
    focused: Option<FocusSlot>,
) {
    let areas = bar_areas(bar, view);
    let rects = item_rects(&view.desktop, areas.menu);

    for (item, trigger) in view.desktop.items.iter().zip(rects) {
        let Some(group) = item.as_group() else {
            continue;
        };
        if !group.expanded || trigger.is_empty() {
            continue;
        }

        let lines: Vec<Line> = group
            .links
            .iter()
            .enumerate()
            .map(|(index, link)| {
                let slot = FocusSlot::SubItem {
                    context: RenderContext::Desktop,
                    group: group.id,
                    index,
                };
                Line::from(Span::styled(
                    format!(" {} ", link.title()),
                    item_style(link, is_focused(focused, slot)),
                ))
            })
            .collect();

        let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let popover = clip(
            Rect {
                x: trigger.x,
                y: bar.y + bar.height,
                width: content_width.max(trigger.width).saturating_add(2),
                height: (lines.len() as u16).saturating_add(2),
            },
            screen,
        );
        if popover.is_empty() {
            continue;
        }

        frame.render_widget(Clear, popover);
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(PANEL_BORDER)),
            ),
            popover,
        );
    }
}

fn bar_areas(bar: Rect, view: &NavbarView) -> BarAreas {
    let row = Rect {
        x: bar.x + 1,
        y: bar.y + 1.min(bar.height),
        width: bar.width.saturating_sub(2),
        height: 1.min(bar.height.saturating_sub(1)),
    };
    let logo_width = logo_span(&view.logo).width() as u16 + 2;
    let search_width = Span::raw(SEARCH_PLACEHOLDER).width() as u16 + 2;
    let buttons_width = view
        .buttons
        .as_ref()
        .map(|slot| {
            let labels: u16 = slot
                .buttons
                .iter()
                .map(|button| Span::raw(button_label(button)).width() as u16)
                .sum();
            labels + BUTTON_GAP * (slot.buttons.len().saturating_sub(1) as u16)
        })
        .unwrap_or(0);

    let [logo, menu, search, buttons] = Layout::horizontal([
        Constraint::Length(logo_width),
        Constraint::Min(0),
        Constraint::Length(search_width),
        Constraint::Length(buttons_width),
    ])
    .areas(row);

    BarAreas {
        logo,
        menu,
        search,
        buttons,
    }
}

/// One rect per menu item, placed by the row's justify policy and clipped
/// to the menu area. Items past the edge get an empty rect.
fn item_rects(menu: &MenuView, row: Rect) -> Vec<Rect> {
    let widths: Vec<u16> = menu
        .items
        .iter()
        .map(|item| Span::raw(desktop_label(item)).width() as u16)
        .collect();
    let justify = match menu.layout {
        MenuLayout::Row { justify } => justify,
        MenuLayout::Stack => Justify::Start,
    };

    justify_offsets(&widths, row.width, justify, ITEM_GAP)
        .into_iter()
        .zip(widths)
        .map(|(offset, width)| {
            clip(
                Rect {
                    x: row.x.saturating_add(offset),
                    y: row.y,
                    width,
                    height: row.height,
                },
                row,
            )
        })
        .collect()
}

fn desktop_label(item: &MenuItemView) -> String {
    match item {
        MenuItemView::Group(group) => {
            let marker = if group.expanded { "▴" } else { "▾" };
            format!("{} {marker}", group.title)
        }
        other => other.title().to_string(),
    }
}
