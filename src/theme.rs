// Color theme definitions for the TUI chrome and cards.

use ratatui::style::Color;

pub const THEME_DARK: &str = "dark";
pub const THEME_LIGHT: &str = "light";

/// Named color slots used by the UI (borders, text, cards, overlays).
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary accent color (selected card, active thumbnail, titles).
    pub primary: Color,
    /// Secondary accent, used for links.
    pub secondary: Color,
    /// Normal text color.
    pub text: Color,
    /// Dimmed / inactive text color.
    pub text_dim: Color,
    /// Key hints and the "grabbing" border while dragging.
    pub accent: Color,
    /// Background color for the selected card.
    pub selection_bg: Color,
    /// Border and divider color.
    pub border: Color,
    /// Error indicators.
    pub error: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Magenta,
            text: Color::White,
            text_dim: Color::DarkGray,
            accent: Color::Yellow,
            selection_bg: Color::Rgb(30, 30, 40),
            border: Color::DarkGray,
            error: Color::Red,
        }
    }

    pub fn light() -> Self {
        Self {
            primary: Color::Blue,
            secondary: Color::Magenta,
            text: Color::Black,
            text_dim: Color::DarkGray,
            accent: Color::Rgb(180, 120, 0),
            selection_bg: Color::Rgb(220, 225, 235),
            border: Color::Rgb(180, 180, 180),
            error: Color::Red,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            THEME_LIGHT => Self::light(),
            _ => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
