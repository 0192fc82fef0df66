use ratatui::layout::Rect;

use crate::menu::Justify;

pub const BAR_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;
/// Panel width once the terminal is wide enough not to need a full-width one.
pub const PANEL_MAX_WIDTH: u16 = 40;
/// Below this width the panel covers the whole terminal.
pub const PANEL_FULL_WIDTH_BELOW: u16 = 64;

/// Which presentation the terminal width selects. Decided by the
/// breakpoint only, never by overlay state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Desktop,
    Mobile,
}

impl Presentation {
    pub fn for_width(width: u16, breakpoint: u16) -> Self {
        if width >= breakpoint {
            Self::Desktop
        } else {
            Self::Mobile
        }
    }
}

/// Splits the screen into navbar, page body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let bar_height = area.height.min(BAR_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(bar_height));
    let bar = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: bar_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + bar_height,
        width: area.width,
        height: area.height.saturating_sub(bar_height + footer_height),
    };
    (bar, body, footer)
}

/// Full-height panel anchored to the right edge.
pub fn slide_over_rect(area: Rect) -> Rect {
    let width = if area.width < PANEL_FULL_WIDTH_BELOW {
        area.width
    } else {
        PANEL_MAX_WIDTH
    };
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height: area.height,
    }
}

/// X offsets, relative to the row start, for items of `widths` laid out in
/// `available` columns with at least `gap` between neighbours.
///
/// Items that do not fit simply overflow past `available`; the caller clips.
pub fn justify_offsets(widths: &[u16], available: u16, justify: Justify, gap: u16) -> Vec<u16> {
    let count = widths.len() as u32;
    if count == 0 {
        return Vec::new();
    }

    let content: u32 = widths.iter().map(|w| u32::from(*w)).sum::<u32>()
        + u32::from(gap) * (count - 1);
    let free = u32::from(available).saturating_sub(content);

    let (lead, extra) = match justify {
        Justify::Start => (0, 0),
        Justify::End => (free, 0),
        Justify::Center => (free / 2, 0),
        Justify::Between if count > 1 => (0, free / (count - 1)),
        Justify::Between => (0, 0),
        Justify::Around => {
            let space = free / count;
            (space / 2, space)
        }
        Justify::Evenly => {
            let space = free / (count + 1);
            (space, space)
        }
    };

    let mut offsets = Vec::with_capacity(widths.len());
    let mut x = lead;
    for width in widths {
        offsets.push(x.min(u32::from(u16::MAX)) as u16);
        x += u32::from(*width) + u32::from(gap) + extra;
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive_for_desktop() {
        assert_eq!(Presentation::for_width(100, 100), Presentation::Desktop);
        assert_eq!(Presentation::for_width(99, 100), Presentation::Mobile);
    }

    #[test]
    fn start_packs_items_from_the_left() {
        assert_eq!(justify_offsets(&[4, 8], 40, Justify::Start, 2), vec![0, 6]);
    }

    #[test]
    fn end_and_center_shift_the_block() {
        assert_eq!(justify_offsets(&[4, 8], 40, Justify::End, 2), vec![26, 32]);
        assert_eq!(justify_offsets(&[4, 8], 40, Justify::Center, 2), vec![13, 19]);
    }

    #[test]
    fn between_spreads_free_space_between_items() {
        assert_eq!(justify_offsets(&[4, 4, 4], 20, Justify::Between, 0), vec![0, 8, 16]);
        assert_eq!(justify_offsets(&[4], 20, Justify::Between, 0), vec![0]);
    }

    #[test]
    fn around_and_evenly() {
        assert_eq!(justify_offsets(&[2, 2], 12, Justify::Around, 0), vec![2, 8]);
        assert_eq!(justify_offsets(&[2, 2], 11, Justify::Evenly, 0), vec![2, 6]);
    }

    #[test]
    fn overflow_keeps_start_order() {
        assert_eq!(justify_offsets(&[10, 10], 5, Justify::Center, 1), vec![0, 11]);
    }

    #[test]
    fn panel_is_full_width_on_narrow_terminals() {
        let narrow = Rect::new(0, 0, 50, 20);
        assert_eq!(slide_over_rect(narrow), narrow);
        let wide = Rect::new(0, 0, 80, 20);
        assert_eq!(slide_over_rect(wide), Rect::new(40, 0, 40, 20));
    }
}
