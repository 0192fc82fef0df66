use ratatui::style::Color;

pub const BRAND: Color = Color::Rgb(0xca, 0x8a, 0x04);
pub const BAR_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const MENU_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const PANEL_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const BACKDROP: Color = Color::Rgb(0x17, 0x17, 0x17);
pub const CTA_BACKGROUND: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const CTA_TEXT: Color = Color::Rgb(0x0a, 0x0a, 0x0a);
pub const FOCUS_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
