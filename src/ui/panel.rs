//! Row model of the mobile slide-over panel.
//!
//! Painting and mouse hit-testing both walk `panel_rows`, so a click on a
//! painted row always lands on the affordance drawn there.

use ratatui::layout::Rect;

use crate::menu::{ButtonSpec, GroupId};
use crate::ui::focus::FocusSlot;
use crate::ui::menu_view::{MenuItemView, RenderContext};
use crate::ui::navbar::OverlayView;

/// Columns at the right edge of a bar or panel header that hit its icon.
pub const ICON_HIT_WIDTH: u16 = 3;

/// One painted line of the panel, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelRow<'a> {
    /// Logo and close icon.
    Header,
    Blank,
    Item {
        index: usize,
        item: &'a MenuItemView,
    },
    SubItem {
        group: GroupId,
        index: usize,
        link: &'a MenuItemView,
    },
    Search,
    Button {
        index: usize,
        button: &'a ButtonSpec,
    },
}

impl PanelRow<'_> {
    /// Focus slot of the affordance on this row, if any.
    pub fn slot(&self) -> Option<FocusSlot> {
        match *self {
            Self::Header => Some(FocusSlot::OverlayClose),
            Self::Item { index, .. } => Some(FocusSlot::Item {
                context: RenderContext::Mobile,
                index,
            }),
            Self::SubItem { group, index, .. } => Some(FocusSlot::SubItem {
                context: RenderContext::Mobile,
                group,
                index,
            }),
            Self::Button { index, .. } => Some(FocusSlot::Button { index }),
            Self::Blank | Self::Search => None,
        }
    }
}

pub fn panel_rows(overlay: &OverlayView) -> Vec<PanelRow<'_>> {
    let mut rows = vec![PanelRow::Header, PanelRow::Blank];

    for (index, item) in overlay.menu.items.iter().enumerate() {
        rows.push(PanelRow::Item { index, item });
        if let Some(group) = item.as_group() {
            rows.extend(group.links.iter().enumerate().map(|(index, link)| {
                PanelRow::SubItem {
                    group: group.id,
                    index,
                    link,
                }
            }));
        }
    }

    rows.push(PanelRow::Blank);
    rows.push(PanelRow::Search);

    if let Some(slot) = &overlay.buttons {
        rows.push(PanelRow::Blank);
        rows.extend(
            slot.buttons
                .iter()
                .enumerate()
                .map(|(index, button)| PanelRow::Button { index, button }),
        );
    }
    rows
}

/// Area inside the panel border.
pub fn panel_inner(panel: Rect) -> Rect {
    Rect {
        x: panel.x.saturating_add(1),
        y: panel.y.saturating_add(1),
        width: panel.width.saturating_sub(2),
        height: panel.height.saturating_sub(2),
    }
}

/// First row to paint so the focused row fits in `visible` rows.
///
/// Scrolls only as far as needed; zero while the focused row is already on
/// the first screen.
pub fn scroll_offset(rows: &[PanelRow<'_>], focused: Option<FocusSlot>, visible: u16) -> u16 {
    let Some(focused) = focused else {
        return 0;
    };
    let Some(line) = rows.iter().position(|row| row.slot() == Some(focused)) else {
        return 0;
    };
    let visible = usize::from(visible.max(1));
    let offset = (line + 1).saturating_sub(visible);
    u16::try_from(offset).unwrap_or(u16::MAX)
}
