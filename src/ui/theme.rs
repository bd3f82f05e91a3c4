//! Color theme for the UI.

use ratatui::style::{Color, Modifier, Style};

/// Deep navy used as the primary color.
pub const ANCHOR_NAVY: Color = Color::Rgb(29, 43, 83);

/// Grey-blue screen surface.
pub const SLATE_GREY: Color = Color::Rgb(112, 128, 144);

/// Theme color palette.
///
/// A primary color and the foreground drawn on top of it. Everything that
/// is not a screen surface is styled from these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    /// Primary color (top bar, status bar, highlights).
    pub primary: Color,
    /// Text and icons drawn on the primary color.
    pub on_primary: Color,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: ANCHOR_NAVY,
            on_primary: Color::White,
        }
    }
}

impl ThemeColors {
    /// Style for content drawn on the primary color.
    pub fn primary_style(&self) -> Style {
        Style::default().fg(self.on_primary).bg(self.primary)
    }

    /// Style for the highlighted drawer entry.
    pub fn highlight_style(&self) -> Style {
        self.primary_style().add_modifier(Modifier::BOLD)
    }

    /// Style for borders and accents on the default background.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.primary)
    }
}
