//! Paints a `NavbarView` with ratatui.
//!
//! This is the presentation layer: it decides which presentation the
//! terminal width selects and lays the view tree out accordingly. It never
//! changes navbar state.

mod desktop;
mod mobile;

use std::path::Path;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::menu::ButtonSpec;
use crate::ui::app::App;
use crate::ui::focus::FocusSlot;
use crate::ui::footer::Footer;
use crate::ui::layout::{layout_regions, Presentation};
use crate::ui::menu_view::MenuItemView;
use crate::ui::navbar::LogoSlot;
use crate::ui::theme::{BRAND, CTA_BACKGROUND, CTA_TEXT, FOCUS_HIGHLIGHT, MENU_TEXT, MUTED_TEXT};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (bar, body, footer) = layout_regions(area);
    let view = app.view();
    let focused = app.focused_slot();

    frame.render_widget(page_body(app), body);
    frame.render_widget(Footer::new().widget(app, footer), footer);

    match app.presentation() {
        Presentation::Desktop => {
            desktop::draw_bar(frame, bar, &view, focused);
            desktop::draw_popovers(frame, area, bar, &view, focused);
        }
        Presentation::Mobile => {
            mobile::draw_bar(frame, bar, &view, focused);
            if let Some(overlay) = &view.overlay {
                mobile::draw_overlay(frame, area, overlay, focused);
            }
        }
    }
}

fn page_body(app: &App) -> Paragraph<'static> {
    let href = app
        .last_navigation()
        .map(|navigation| navigation.href.clone())
        .unwrap_or_else(|| "/".to_string());
    Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Page: ", Style::default().fg(MUTED_TEXT)),
            Span::styled(href, Style::default().fg(MENU_TEXT)),
        ]),
    ])
}

/// Logo slot rendered as a home link label built from the image name.
fn logo_span(logo: &LogoSlot) -> Span<'static> {
    let name = Path::new(&logo.image)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .unwrap_or("home");
    Span::styled(
        format!("◆ {name}"),
        Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
    )
}

fn button_label(button: &ButtonSpec) -> String {
    format!(" ⚡ {} ", button.label)
}

fn button_style(focused: bool) -> Style {
    let style = Style::default()
        .fg(CTA_TEXT)
        .bg(CTA_BACKGROUND)
        .add_modifier(Modifier::BOLD);
    if focused {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

const SEARCH_PLACEHOLDER: &str = "⌕ Search for";

fn search_span() -> Span<'static> {
    Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(MUTED_TEXT))
}

fn item_style(item: &MenuItemView, focused: bool) -> Style {
    let base = match item {
        MenuItemView::Inert(_) => Style::default().fg(MUTED_TEXT),
        MenuItemView::Link(_) | MenuItemView::Group(_) => {
            Style::default().fg(MENU_TEXT).add_modifier(Modifier::BOLD)
        }
    };
    if focused {
        base.bg(FOCUS_HIGHLIGHT).fg(BRAND)
    } else {
        base
    }
}

fn is_focused(focused: Option<FocusSlot>, slot: FocusSlot) -> bool {
    focused == Some(slot)
}

fn clip(rect: Rect, bounds: Rect) -> Rect {
    rect.intersection(bounds)
}
