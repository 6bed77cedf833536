use ratatui::style::Color;

pub const TITLE_ACCENT: Color = Color::Rgb(0x4b, 0x9e, 0xff);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const CARD_BACKGROUND: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const CARD_TEXT: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
