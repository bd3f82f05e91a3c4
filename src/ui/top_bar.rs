//! Top app bar UI component.

use crate::drawer::Icon;
use crate::ui::{ShellLayout, ThemeColors};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the top bar with the menu toggle and title.
pub(super) fn draw_top_bar(
    f: &mut Frame<'_>,
    layout: &ShellLayout,
    title: &str,
    colors: &ThemeColors,
) {
    let line = Line::from(vec![
        Span::raw(format!(" {} ", Icon::Menu.glyph())),
        Span::raw(" "),
        Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
    ]);

    let paragraph = Paragraph::new(line).style(colors.primary_style());

    f.render_widget(paragraph, layout.top_bar);
}
