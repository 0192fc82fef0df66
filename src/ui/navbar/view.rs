use serde::Serialize;

use crate::menu::ButtonSpec;
use crate::ui::action::NavAction;
use crate::ui::menu_view::MenuView;
use crate::ui::navbar::variant::NavbarVariant;

/// Slot for the logo renderer: a home link wrapped around an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoSlot {
    pub image: String,
    pub home_href: String,
}

/// Slot for the self-contained search widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchSlot;

/// Slot for the call-to-action button list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonListSlot {
    pub buttons: Vec<ButtonSpec>,
}

/// The whole navbar surface for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavbarView {
    pub variant: NavbarVariant,
    pub logo: LogoSlot,
    /// Always present; hidden below the breakpoint by the presentation layer.
    pub desktop: MenuView,
    /// Shown only below the breakpoint.
    pub menu_toggle: NavAction,
    pub search: SearchSlot,
    pub buttons: Option<ButtonListSlot>,
    /// Mounted only while the overlay is open.
    pub overlay: Option<OverlayView>,
}

/// The mobile slide-over panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayView {
    pub logo: LogoSlot,
    pub close: NavAction,
    pub backdrop: NavAction,
    pub escape: NavAction,
    pub menu: MenuView,
    pub search: SearchSlot,
    pub buttons: Option<ButtonListSlot>,
}
