//! Placeholder screen rendering.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Padding, Paragraph, Widget},
};

use crate::router::ScreenConfig;

/// A full-bleed surface with one label.
#[derive(Debug, Clone, Copy)]
pub struct Screen<'a> {
    config: &'a ScreenConfig,
}

impl<'a> Screen<'a> {
    /// Screen widget for `config`.
    pub fn new(config: &'a ScreenConfig) -> Self {
        Self { config }
    }
}

impl Widget for Screen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .padding(Padding::new(2, 2, 1, 1))
            .style(Style::default().bg(self.config.background));

        Paragraph::new(self.config.label)
            .style(Style::default().fg(Color::Black))
            .block(block)
            .render(area, buf);
    }
}
