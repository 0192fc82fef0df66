//! Top-level navbar composition.
//!
//! `Navbar` is the only owner of the overlay state and of the desktop
//! expansion state. `view()` turns the read-only config plus that state
//! into a `NavbarView`; `dispatch()` applies the action of whatever
//! affordance the user activated.

mod variant;
mod view;

pub use variant::NavbarVariant;
pub use view::{ButtonListSlot, LogoSlot, NavbarView, OverlayView, SearchSlot};

use std::sync::Arc;

use crate::menu::{GroupId, NavbarConfig};
use crate::ui::action::{NavAction, Navigation};
use crate::ui::disclosure::{DisclosureController, ExpansionState};
use crate::ui::menu_view::{render_menu, RenderContext};
use crate::ui::overlay::{DismissTrigger, OverlayController};

const HOME_HREF: &str = "/";

/// Composition entry point: a navbar in `variant` over `config`, overlay
/// closed and every group collapsed.
pub fn compose(variant: NavbarVariant, config: NavbarConfig) -> Navbar {
    Navbar::new(variant, Arc::new(config))
}

#[derive(Debug, Clone)]
pub struct Navbar {
    variant: NavbarVariant,
    config: Arc<NavbarConfig>,
    desktop: DisclosureController,
    overlay: OverlayController,
}

impl Navbar {
    pub fn new(variant: NavbarVariant, config: Arc<NavbarConfig>) -> Self {
        Self {
            variant,
            config,
            desktop: DisclosureController::new(),
            overlay: OverlayController::new(),
        }
    }

    pub fn variant(&self) -> NavbarVariant {
        self.variant
    }

    pub fn config(&self) -> &NavbarConfig {
        &self.config
    }

    pub fn open_overlay(&mut self) {
        self.overlay.open();
    }

    pub fn close_overlay(&mut self, trigger: DismissTrigger) {
        self.overlay.close(trigger);
    }

    pub fn is_overlay_open(&self) -> bool {
        self.overlay.is_open()
    }

    pub fn toggle(&mut self, context: RenderContext, group: GroupId) {
        match context {
            RenderContext::Desktop => self.desktop.toggle(group),
            RenderContext::Mobile => self.overlay.toggle_group(group),
        }
    }

    pub fn is_expanded(&self, context: RenderContext, group: GroupId) -> bool {
        match context {
            RenderContext::Desktop => self.desktop.is_expanded(group),
            RenderContext::Mobile => self
                .overlay
                .mobile_menu()
                .is_some_and(|menu| menu.is_expanded(group)),
        }
    }

    pub fn desktop_expansion(&self) -> &ExpansionState {
        self.desktop.state()
    }

    /// `None` while the overlay is closed.
    pub fn mobile_expansion(&self) -> Option<&ExpansionState> {
        self.overlay.mobile_menu()
    }

    /// Applies an action from the view tree. Returns the destination when a
    /// link was followed.
    pub fn dispatch(&mut self, action: &NavAction) -> Option<Navigation> {
        match action {
            NavAction::Navigate {
                href,
                dismiss_overlay,
            } => {
                if *dismiss_overlay {
                    self.overlay.close(DismissTrigger::LinkSelected);
                }
                tracing::info!(%href, "navigating");
                Some(Navigation { href: href.clone() })
            }
            NavAction::ToggleGroup { context, group } => {
                self.toggle(*context, *group);
                None
            }
            NavAction::OpenOverlay => {
                self.overlay.open();
                None
            }
            NavAction::DismissOverlay { trigger } => {
                self.overlay.close(*trigger);
                None
            }
        }
    }

    pub fn view(&self) -> NavbarView {
        let config = &*self.config;
        let justify = config.justify();
        let logo = LogoSlot {
            image: config.logo.clone(),
            home_href: HOME_HREF.to_string(),
        };
        let buttons = config.is_cta_button.is_on().then(|| ButtonListSlot {
            buttons: config.buttons.clone(),
        });

        let overlay = self.overlay.mobile_menu().map(|expansion| OverlayView {
            logo: logo.clone(),
            close: dismiss(DismissTrigger::CloseButton),
            backdrop: dismiss(DismissTrigger::Backdrop),
            escape: dismiss(DismissTrigger::Escape),
            menu: render_menu(&config.menu_list, RenderContext::Mobile, justify, expansion),
            search: SearchSlot,
            buttons: buttons.clone(),
        });

        NavbarView {
            variant: self.variant,
            logo,
            desktop: render_menu(
                &config.menu_list,
                RenderContext::Desktop,
                justify,
                self.desktop.state(),
            ),
            menu_toggle: NavAction::OpenOverlay,
            search: SearchSlot,
            buttons,
            overlay,
        }
    }
}

fn dismiss(trigger: DismissTrigger) -> NavAction {
    NavAction::DismissOverlay { trigger }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuEntry;

    fn navbar() -> Navbar {
        compose(
            NavbarVariant::Classic,
            NavbarConfig::new(
                "/logo.png",
                vec![
                    MenuEntry::leaf("Home", "/"),
                    MenuEntry::group("Products", vec![MenuEntry::leaf("A", "/a")]),
                ],
            ),
        )
    }

    #[test]
    fn starts_closed_and_collapsed() {
        let navbar = navbar();
        assert!(!navbar.is_overlay_open());
        assert!(navbar.desktop_expansion().is_all_collapsed());
        assert!(navbar.view().overlay.is_none());
    }

    #[test]
    fn mobile_link_navigation_closes_overlay() {
        let mut navbar = navbar();
        navbar.open_overlay();
        let view = navbar.view();
        let action = view.overlay.unwrap().menu.items[0].action().cloned().unwrap();
        let navigation = navbar.dispatch(&action);
        assert_eq!(navigation, Some(Navigation { href: "/".into() }));
        assert!(!navbar.is_overlay_open());
    }

    #[test]
    fn desktop_link_navigation_leaves_state_alone() {
        let mut navbar = navbar();
        navbar.toggle(RenderContext::Desktop, GroupId(1));
        let action = navbar.view().desktop.items[0].action().cloned().unwrap();
        assert!(navbar.dispatch(&action).is_some());
        assert!(navbar.is_expanded(RenderContext::Desktop, GroupId(1)));
        assert!(!navbar.is_overlay_open());
    }
}
