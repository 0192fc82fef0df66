use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::{button_label, button_style, is_focused, item_style, logo_span, search_span};
use crate::ui::focus::FocusSlot;
use crate::ui::layout::slide_over_rect;
use crate::ui::menu_view::MenuItemView;
use crate::ui::navbar::{NavbarView, OverlayView};
use crate::ui::panel::{panel_inner, panel_rows, scroll_offset, PanelRow};
use crate::ui::theme::{BACKDROP, BAR_BORDER, FOCUS_HIGHLIGHT, MENU_TEXT, PANEL_BORDER};

const MENU_ICON: &str = " ☰ ";
const CLOSE_ICON: &str = " ✕ ";

pub(super) fn draw_bar(
    frame: &mut Frame<'_>,
    bar: Rect,
    view: &NavbarView,
    focused: Option<FocusSlot>,
) {
    let inner_width = bar.width.saturating_sub(2) as usize;
    let logo = logo_span(&view.logo);
    let padding = inner_width
        .saturating_sub(logo.width())
        .saturating_sub(Span::raw(MENU_ICON).width());

    let line = Line::from(vec![
        logo,
        Span::raw(" ".repeat(padding)),
        Span::styled(MENU_ICON, icon_style(is_focused(focused, FocusSlot::MenuToggle))),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BAR_BORDER)),
        ),
        bar,
    );
}

/// Backdrop over the whole screen plus the slide-over panel, scrolled so
/// the focused row stays visible.
pub(super) fn draw_overlay(
    frame: &mut Frame<'_>,
    screen: Rect,
    overlay: &OverlayView,
    focused: Option<FocusSlot>,
) {
    frame.render_widget(Clear, screen);
    frame.render_widget(Block::default().style(Style::default().bg(BACKDROP)), screen);

    let panel = slide_over_rect(screen);
    frame.render_widget(Clear, panel);

    let inner_width = panel_inner(panel).width as usize;
    let rows = panel_rows(overlay);
    let offset = scroll_offset(&rows, focused, panel_inner(panel).height);

    let lines: Vec<Line> = rows
        .iter()
        .map(|row| {
            let highlighted = row.slot().is_some_and(|slot| is_focused(focused, slot));
            match *row {
                PanelRow::Header => {
                    let logo = logo_span(&overlay.logo);
                    let padding = inner_width
                        .saturating_sub(logo.width())
                        .saturating_sub(Span::raw(CLOSE_ICON).width());
                    Line::from(vec![
                        logo,
                        Span::raw(" ".repeat(padding)),
                        Span::styled(CLOSE_ICON, icon_style(highlighted)),
                    ])
                }
                PanelRow::Blank => Line::from(""),
                PanelRow::Item { item, .. } => {
                    full_width_row(accordion_label(item), item, highlighted, inner_width)
                }
                PanelRow::SubItem { link, .. } => {
                    full_width_row(format!("    {}", link.title()), link, highlighted, inner_width)
                }
                PanelRow::Search => Line::from(search_span()),
                PanelRow::Button { button, .. } => {
                    Line::from(Span::styled(button_label(button), button_style(highlighted)))
                }
            }
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines)
            .scroll((offset, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(PANEL_BORDER)),
            ),
        panel,
    );
}

fn accordion_label(item: &MenuItemView) -> String {
    match item {
        MenuItemView::Group(group) => {
            let marker = if group.expanded { "▾" } else { "▸" };
            format!("{marker} {}", group.title)
        }
        other => format!("  {}", other.title()),
    }
}

/// Full-width row so the whole line acts as the tap target.
fn full_width_row(label: String, item: &MenuItemView, focused: bool, width: usize) -> Line<'static> {
    let padding = width.saturating_sub(Span::raw(label.as_str()).width());
    Line::from(vec![
        Span::styled(label, item_style(item, focused)),
        Span::styled(" ".repeat(padding), item_style(item, focused)),
    ])
}

fn icon_style(focused: bool) -> Style {
    let style = Style::default().fg(MENU_TEXT);
    if focused {
        style.bg(FOCUS_HIGHLIGHT)
    } else {
        style
    }
}
