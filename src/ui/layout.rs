//! Screen layout shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use unicode_width::UnicodeWidthStr;

use crate::drawer::MENU;

/// Columns taken by the menu toggle at the left of the top bar.
const MENU_BUTTON_WIDTH: u16 = 3;

/// Borders, icon, spacing and margins around the longest menu label.
const DRAWER_CHROME: u16 = 8;

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    /// Top app bar.
    pub top_bar: Rect,
    /// Menu toggle inside the top bar.
    pub menu_button: Rect,
    /// Area of the active screen.
    pub content: Rect,
    /// Panel area when fully open.
    pub drawer_full: Rect,
    /// Part of the panel currently on screen (empty when hidden).
    pub drawer: Rect,
    /// Status line.
    pub status: Rect,
    /// Key help line.
    pub keymap: Rect,
}

impl ShellLayout {
    /// Lay out `area` with a drawer of `drawer_width` columns, `fraction` shown.
    pub fn new(area: Rect, drawer_width: u16, fraction: f32) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let top_bar = chunks[0];
        let content = chunks[1];

        let menu_button = Rect {
            width: MENU_BUTTON_WIDTH.min(top_bar.width),
            ..top_bar
        };

        let full_width = drawer_width.max(min_drawer_width()).min(content.width);
        let drawer_full = Rect {
            width: full_width,
            ..content
        };

        let visible = (f32::from(full_width) * fraction.clamp(0.0, 1.0)).round() as u16;
        let drawer = Rect {
            width: visible,
            ..content
        };

        Self {
            top_bar,
            menu_button,
            content,
            drawer_full,
            drawer,
            status: chunks[2],
            keymap: chunks[3],
        }
    }

    /// Whether `(column, row)` is on the menu toggle.
    pub fn hits_menu_button(&self, column: u16, row: u16) -> bool {
        self.menu_button.contains(Position::new(column, row))
    }

    /// Whether `(column, row)` is on the visible part of the drawer.
    pub fn hits_drawer(&self, column: u16, row: u16) -> bool {
        self.drawer.contains(Position::new(column, row))
    }

    /// Index of the menu entry at `(column, row)`, if any.
    ///
    /// Entries occupy one row each, directly below the drawer's top border.
    pub fn menu_entry_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.hits_drawer(column, row) {
            return None;
        }
        let first = self.drawer.y + 1;
        let index = usize::from(row.checked_sub(first)?);
        (index < MENU.len()).then_some(index)
    }
}

/// Narrowest drawer that still fits every label.
pub fn min_drawer_width() -> u16 {
    let longest = MENU
        .iter()
        .map(|entry| entry.label.width())
        .max()
        .unwrap_or(0);
    u16::try_from(longest).unwrap_or(u16::MAX).saturating_add(DRAWER_CHROME)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    #[test]
    fn rows_are_stacked() {
        let layout = ShellLayout::new(area(), 30, 0.0);
        assert_eq!(layout.top_bar, Rect::new(0, 0, 80, 1));
        assert_eq!(layout.content, Rect::new(0, 1, 80, 21));
        assert_eq!(layout.status.y, 22);
        assert_eq!(layout.keymap.y, 23);
    }

    #[test]
    fn drawer_width_tracks_fraction() {
        assert_eq!(ShellLayout::new(area(), 30, 0.0).drawer.width, 0);
        assert_eq!(ShellLayout::new(area(), 30, 0.5).drawer.width, 15);
        assert_eq!(ShellLayout::new(area(), 30, 1.0).drawer.width, 30);
    }

    #[test]
    fn drawer_never_narrower_than_labels_or_wider_than_screen() {
        let narrow = ShellLayout::new(area(), 2, 1.0);
        assert_eq!(narrow.drawer.width, min_drawer_width());

        let wide = ShellLayout::new(Rect::new(0, 0, 20, 10), 200, 1.0);
        assert_eq!(wide.drawer.width, 20);
    }

    #[test]
    fn hit_testing() {
        let layout = ShellLayout::new(area(), 30, 1.0);
        assert!(layout.hits_menu_button(1, 0));
        assert!(!layout.hits_menu_button(10, 0));

        // Row 1 is the drawer's top border.
        assert_eq!(layout.menu_entry_at(5, 1), None);
        assert_eq!(layout.menu_entry_at(5, 2), Some(0));
        assert_eq!(layout.menu_entry_at(5, 5), Some(3));
        assert_eq!(layout.menu_entry_at(5, 6), None);
        assert_eq!(layout.menu_entry_at(40, 2), None);
    }

    #[test]
    fn hidden_drawer_has_no_entries() {
        let layout = ShellLayout::new(area(), 30, 0.0);
        assert_eq!(layout.menu_entry_at(5, 2), None);
    }
}
