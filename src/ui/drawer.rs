//! Drawer panel rendering.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Widget},
};

use super::ThemeColors;
use crate::drawer::{MenuCursor, MENU};
use crate::router::Route;

/// The drawer panel, sliding in from the left edge.
#[derive(Debug)]
pub struct DrawerPanel<'a> {
    cursor: MenuCursor,
    active: Route,
    /// Size of the panel when fully open.
    full: Rect,
    colors: &'a ThemeColors,
}

impl<'a> DrawerPanel<'a> {
    /// Panel of size `full`, highlighting `cursor` and marking `active`.
    pub fn new(cursor: MenuCursor, active: Route, full: Rect, colors: &'a ThemeColors) -> Self {
        Self {
            cursor,
            active,
            full,
            colors,
        }
    }

    fn render_full(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem<'_>> = MENU
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let marker = if entry.route == self.active { "•" } else { " " };
                let line = Line::from(vec![
                    Span::raw(format!(" {} ", entry.icon.glyph())),
                    Span::raw(entry.label),
                    Span::raw(format!(" {}", marker)),
                ]);

                let style = if idx == self.cursor.index() {
                    self.colors.highlight_style()
                } else {
                    Style::default()
                };

                ListItem::new(line).style(style)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(Span::styled(" Menu ", Style::default().add_modifier(Modifier::BOLD)))
                .borders(Borders::ALL)
                .border_style(self.colors.accent_style()),
        );

        list.render(area, buf);
    }
}

impl Widget for DrawerPanel<'_> {
    /// Renders only the rightmost `area.width` columns of the full panel,
    /// so a partly open drawer looks pushed in from the edge.
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let full = Rect::new(0, 0, self.full.width.max(area.width), area.height);
        let mut panel = Buffer::empty(full);
        self.render_full(full, &mut panel);

        Clear.render(area, buf);
        let skip = full.width - area.width;
        for y in 0..area.height {
            for x in 0..area.width {
                let src = panel.cell((skip + x, y));
                let dst = buf.cell_mut((area.x + x, area.y + y));
                if let (Some(src), Some(dst)) = (src, dst) {
                    *dst = src.clone();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|cell| cell.symbol().to_string()))
            .collect()
    }

    fn render(width: u16, cursor: MenuCursor) -> Buffer {
        let colors = ThemeColors::default();
        let full = Rect::new(0, 0, 20, 7);
        let area = Rect::new(0, 0, width, 7);
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 7));
        DrawerPanel::new(cursor, Route::Profile, full, &colors).render(area, &mut buf);
        buf
    }

    #[test]
    fn lists_entries_in_order() {
        let buf = render(20, MenuCursor::default());
        assert!(row_text(&buf, 0).contains("Menu"));
        for (row, entry) in MENU.iter().enumerate() {
            assert!(row_text(&buf, row as u16 + 1).contains(entry.label));
        }
    }

    #[test]
    fn marks_active_route() {
        let buf = render(20, MenuCursor::default());
        assert!(row_text(&buf, 2).contains("Profile •"));
        assert!(!row_text(&buf, 1).contains('•'));
    }

    #[test]
    fn highlights_cursor_row() {
        let mut cursor = MenuCursor::default();
        cursor.down();
        let buf = render(20, cursor);
        let colors = ThemeColors::default();
        assert_eq!(buf.cell((5, 2)).map(|cell| cell.bg), Some(colors.primary));
        assert_ne!(buf.cell((5, 1)).map(|cell| cell.bg), Some(colors.primary));
    }

    #[test]
    fn partial_panel_shows_right_edge() {
        let buf = render(4, MenuCursor::default());
        // The right border is the last column of the visible slice.
        assert_eq!(buf.cell((3, 3)).map(|cell| cell.symbol()), Some("│"));
        // Nothing is drawn past the visible slice.
        assert_eq!(buf.cell((4, 3)).map(|cell| cell.symbol()), Some(" "));
    }
}
