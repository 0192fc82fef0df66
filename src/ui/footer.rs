use crate::ui::app::App;
use crate::ui::layout::Presentation;
use crate::ui::theme::{BAR_BORDER, MENU_TEXT, MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App, area: Rect) -> Paragraph<'static> {
        let hints = match app.presentation() {
            Presentation::Desktop => " ←/→: Move │ Enter: Select │ r: Reload │ q: Quit",
            Presentation::Mobile => " ↑/↓: Move │ Enter: Select │ m: Menu │ Esc: Close │ q: Quit",
        };
        let version = format!("v{} ", VERSION);

        let text_style = Style::default().fg(MENU_TEXT).add_modifier(Modifier::DIM);
        let mut spans = vec![Span::styled(hints, text_style)];
        let mut used = hints.chars().count();

        if let Some(status) = app.status() {
            let color = if status.is_error { STATUS_ERROR } else { MUTED_TEXT };
            let message = format!("  {}", status.message);
            used += message.chars().count();
            spans.push(Span::styled(message, Style::default().fg(color)));
        }

        // Char count, not byte count, for the box-drawing separators.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(version.chars().count());
        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans))
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(BAR_BORDER)),
            )
    }
}
