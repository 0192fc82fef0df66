use std::sync::Arc;

use crate::config::ConfigStore;
use crate::ui::action::{NavAction, Navigation};
use crate::ui::focus::{focus_targets, FocusSlot, FocusTarget};
use crate::ui::layout::{slide_over_rect, Presentation, BAR_HEIGHT};
use crate::ui::navbar::{Navbar, NavbarView};
use crate::ui::panel::{panel_inner, panel_rows, scroll_offset, PanelRow, ICON_HIT_WIDTH};
use ratatui::layout::{Position, Rect};

/// One-line message shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub is_error: bool,
}

impl Status {
    fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

/// Terminal front end state around one `Navbar`.
///
/// Supplies what the navbar core treats as given: the viewport width (and
/// so the presentation), keyboard focus, and the routing collaborator that
/// receives `Navigation`s.
pub struct App {
    navbar: Navbar,
    config: ConfigStore,
    breakpoint: u16,
    size: (u16, u16),
    focus: usize,
    should_quit: bool,
    last_navigation: Option<Navigation>,
    status: Option<Status>,
}

impl App {
    pub fn new(config: ConfigStore, size: (u16, u16)) -> Self {
        let current = config.get();
        let navbar = Navbar::new(current.display.variant, Arc::new(current.navbar));
        Self {
            navbar,
            config,
            breakpoint: current.display.breakpoint,
            size,
            focus: 0,
            should_quit: false,
            last_navigation: None,
            status: None,
        }
    }

    pub fn navbar(&self) -> &Navbar {
        &self.navbar
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    pub fn presentation(&self) -> Presentation {
        Presentation::for_width(self.size.0, self.breakpoint)
    }

    pub fn view(&self) -> NavbarView {
        self.navbar.view()
    }

    pub fn focus_targets(&self) -> Vec<FocusTarget> {
        focus_targets(&self.view(), self.presentation())
    }

    pub fn focused_slot(&self) -> Option<FocusSlot> {
        self.focus_targets().get(self.focus).map(|target| target.slot)
    }

    pub fn last_navigation(&self) -> Option<&Navigation> {
        self.last_navigation.as_ref()
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        let before = self.presentation();
        self.size = (cols, rows);
        if self.presentation() != before {
            tracing::debug!(?before, after = ?self.presentation(), "presentation changed");
            self.focus = 0;
        }
    }

    /// Moves focus by `delta`, wrapping at both ends.
    pub fn move_focus(&mut self, delta: i32) {
        let len = self.focus_targets().len();
        if len == 0 {
            self.focus = 0;
            return;
        }
        let current = self.focus.min(len - 1) as i64;
        let next = (current + i64::from(delta)).rem_euclid(len as i64);
        self.focus = next as usize;
    }

    pub fn activate_focused(&mut self) {
        let Some(target) = self.focus_targets().into_iter().nth(self.focus) else {
            return;
        };
        self.dispatch(&target.action);
    }

    /// Runs an action through the navbar and keeps focus valid afterwards.
    pub fn dispatch(&mut self, action: &NavAction) {
        let was_open = self.navbar.is_overlay_open();
        if let Some(navigation) = self.navbar.dispatch(action) {
            self.last_navigation = Some(navigation);
        }
        if self.navbar.is_overlay_open() != was_open {
            self.focus = 0;
        }
        self.clamp_focus();
    }

    /// Opens the mobile panel. Only meaningful below the breakpoint, where
    /// the menu toggle is visible.
    pub fn open_menu(&mut self) {
        if self.presentation() == Presentation::Mobile {
            let toggle = self.view().menu_toggle;
            self.dispatch(&toggle);
        }
    }

    /// Escape gesture: dismisses the panel if one is mounted.
    pub fn escape(&mut self) {
        if let Some(overlay) = self.view().overlay {
            self.dispatch(&overlay.escape);
        }
    }

    /// Left click at a terminal cell, mobile presentation only.
    ///
    /// Closed: a click on the menu icon opens the panel. Open: a click
    /// outside the panel is a backdrop dismissal, a click on a panel row
    /// focuses and activates that row, a click on the close icon closes.
    pub fn click(&mut self, column: u16, row: u16) {
        if self.presentation() != Presentation::Mobile {
            return;
        }
        let (width, height) = self.size;
        let view = self.view();
        let Some(overlay) = &view.overlay else {
            let on_icon = column >= width.saturating_sub(ICON_HIT_WIDTH + 1);
            if row < BAR_HEIGHT.min(height) && on_icon {
                self.open_menu();
            }
            return;
        };

        let position = Position::new(column, row);
        let panel = slide_over_rect(Rect::new(0, 0, width, height));
        if !panel.contains(position) {
            self.dispatch(&overlay.backdrop);
            return;
        }
        let inner = panel_inner(panel);
        if !inner.contains(position) {
            return;
        }

        let rows = panel_rows(overlay);
        let offset = scroll_offset(&rows, self.focused_slot(), inner.height);
        let line = usize::from(row - inner.y) + usize::from(offset);
        let Some(slot) = rows.get(line).and_then(PanelRow::slot) else {
            return;
        };
        if slot == FocusSlot::OverlayClose && column < inner.right().saturating_sub(ICON_HIT_WIDTH) {
            // Header row outside the close icon.
            return;
        }
        let Some(index) = self.focus_targets().iter().position(|target| target.slot == slot) else {
            return;
        };
        self.focus = index;
        self.activate_focused();
    }

    /// Re-reads the config file. The navbar is rebuilt only when its menu
    /// description or variant changed; a display-only change keeps the
    /// expansion and overlay state.
    pub fn reload_config(&mut self) {
        match self.config.reload() {
            Ok(false) => {
                self.status = Some(Status::info("Config unchanged"));
            }
            Ok(true) => {
                let current = self.config.get();
                let before = self.presentation();
                self.breakpoint = current.display.breakpoint;

                let navbar_changed = current.navbar != *self.navbar.config()
                    || current.display.variant != self.navbar.variant();
                if navbar_changed {
                    self.navbar = Navbar::new(current.display.variant, Arc::new(current.navbar));
                }
                if navbar_changed || self.presentation() != before {
                    self.focus = 0;
                }
                tracing::info!(navbar_changed, breakpoint = self.breakpoint, "config reloaded");
                self.status = Some(Status::info("Config reloaded"));
            }
            Err(err) => {
                tracing::warn!(error = %err, "config reload failed");
                self.status = Some(Status::error(err.to_string()));
            }
        }
    }

    fn clamp_focus(&mut self) {
        let len = self.focus_targets().len();
        if self.focus >= len {
            self.focus = len.saturating_sub(1);
        }
    }
}
