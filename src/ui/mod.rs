//! User interface rendering.

mod drawer;
mod keymap_bar;
mod layout;
mod screen;
mod status_bar;
pub mod theme;
mod top_bar;

use crate::app::App;
use crate::error::{Result, ShellError};
use ratatui::{backend::TestBackend, Frame, Terminal};

pub use drawer::DrawerPanel;
pub use keymap_bar::keymap_text;
pub use layout::{min_drawer_width, ShellLayout};
pub use screen::Screen;
pub use theme::ThemeColors;

/// Draw the UI and return the layout used, for hit-testing input.
pub fn draw(f: &mut Frame<'_>, app: &App) -> ShellLayout {
    let colors = app.colors;
    let layout = ShellLayout::new(
        f.area(),
        app.config.drawer.width,
        app.drawer.visible_fraction(),
    );

    top_bar::draw_top_bar(f, &layout, &app.config.title, &colors);

    f.render_widget(Screen::new(app.router.screen()), layout.content);

    f.render_widget(
        DrawerPanel::new(app.cursor, app.router.active(), layout.drawer_full, &colors),
        layout.drawer,
    );

    status_bar::draw_status(f, layout.status, &app.status, &colors);
    keymap_bar::draw_keymap(f, layout.keymap, app.drawer.is_open(), &colors);

    layout
}

/// Render one frame off-screen and return its text, one line per row.
pub fn render_to_string(app: &App, cols: u16, rows: u16) -> Result<String> {
    if cols == 0 || rows == 0 {
        return Err(ShellError::Terminal(format!(
            "cannot render a {}x{} frame",
            cols, rows
        )));
    }

    let mut terminal = Terminal::new(TestBackend::new(cols, rows))?;
    terminal.draw(|f| {
        draw(f, app);
    })?;

    let buffer = terminal.backend().buffer();
    let lines: Vec<String> = buffer
        .content()
        .chunks(usize::from(cols))
        .map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect();

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ShellConfig, APP_TITLE};
    use crate::router::Route;

    fn app() -> App {
        App::new(ShellConfig::default())
    }

    #[test]
    fn initial_frame_shows_home() {
        let text = render_to_string(&app(), 80, 24).unwrap();
        assert!(text.contains(APP_TITLE));
        assert!(text.contains("Home Screen"));
        assert!(!text.contains("Menu"));
    }

    #[test]
    fn each_route_renders_only_its_label() {
        for route in Route::ALL {
            let mut app = app();
            app.router.navigate(route);
            let text = render_to_string(&app, 80, 24).unwrap();

            for other in Route::ALL {
                let label = other.screen().label;
                // "Profile Screen" is not a substring of "Profile2 Screen".
                assert_eq!(text.contains(label), other == route, "{route}: {label}");
            }
        }
    }

    #[test]
    fn open_drawer_overlays_content() {
        let mut app = app();
        let _ = app.drawer.open();
        app.drawer.settle();

        let text = render_to_string(&app, 80, 24).unwrap();
        assert!(text.contains("Menu"));
        assert!(text.contains("Settings"));
        assert!(text.contains(keymap_text(true)));
    }

    #[test]
    fn empty_frame_is_an_error() {
        assert!(matches!(
            render_to_string(&app(), 0, 10),
            Err(ShellError::Terminal(_))
        ));
    }
}
