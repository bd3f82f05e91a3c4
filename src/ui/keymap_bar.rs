//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, widgets::Paragraph, Frame};

/// Key help for the current drawer state.
pub fn keymap_text(drawer_open: bool) -> &'static str {
    if drawer_open {
        "jk/↑↓:move | Enter/l:open | 1-4:go | m/Tab/Esc:close | q:quit"
    } else {
        "m/Tab:menu | 1-4:go | ?:help | q:quit"
    }
}

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, drawer_open: bool, colors: &ThemeColors) {
    let paragraph = Paragraph::new(keymap_text(drawer_open)).style(colors.accent_style());

    f.render_widget(paragraph, area);
}
