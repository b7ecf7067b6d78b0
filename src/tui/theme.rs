//! Light and dark color schemes.

use crate::games::tictactoe::Mark;
use ratatui::style::Color;

/// Active color scheme, toggled at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

impl Theme {
    /// Returns the other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Default background color.
    pub fn background(self) -> Color {
        match self {
            Theme::Light => Color::Rgb(0xff, 0xff, 0xff),
            Theme::Dark => Color::Rgb(0x1a, 0x1a, 0x1a),
        }
    }

    /// Default text color.
    pub fn foreground(self) -> Color {
        match self {
            Theme::Light => Color::Rgb(0x21, 0x21, 0x21),
            Theme::Dark => Color::Rgb(0xee, 0xee, 0xee),
        }
    }

    /// Primary UI color, used for titles and borders.
    pub fn primary(self) -> Color {
        Color::Rgb(0x19, 0x76, 0xd2)
    }

    /// Accent color, used for highlights and the restart hint.
    pub fn accent(self) -> Color {
        Color::Rgb(0xff, 0xc1, 0x07)
    }

    /// Color for advisory error text.
    pub fn error(self) -> Color {
        Color::Rgb(0xdd, 0x22, 0x22)
    }

    /// Dimmed color for empty cells and help text.
    pub fn dim(self) -> Color {
        match self {
            Theme::Light => Color::Rgb(0x88, 0x88, 0x88),
            Theme::Dark => Color::Rgb(0x66, 0x66, 0x66),
        }
    }

    /// Color for a mark on the board and in the score line.
    pub fn mark(self, mark: Mark) -> Color {
        match mark {
            Mark::X => Color::Rgb(0x15, 0x65, 0xc0),
            Mark::O => self.accent(),
        }
    }
}
