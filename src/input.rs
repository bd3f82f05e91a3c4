//! Mapping terminal input to shell actions.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::ui::ShellLayout;

/// Something the user asked the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the application.
    Quit,
    /// Press the top bar menu toggle.
    ToggleDrawer,
    /// Dismiss the drawer.
    CloseDrawer,
    /// Move the menu cursor up.
    CursorUp,
    /// Move the menu cursor down.
    CursorDown,
    /// Activate the entry under the menu cursor.
    ActivateCursor,
    /// Activate the menu entry at this index.
    Activate(usize),
    /// Show key help in the status bar.
    Help,
}

/// Map a key press to an action.
pub fn key_action(key: KeyEvent, drawer_open: bool) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let action = match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::Char('q')) => Action::Quit,
        (_, KeyCode::Char('m')) | (_, KeyCode::Tab) => Action::ToggleDrawer,
        (_, KeyCode::Char('?')) => Action::Help,
        (_, KeyCode::Char(c @ '1'..='4')) => Action::Activate(digit_index(c)),

        // Drawer navigation only applies while it is open.
        (_, KeyCode::Esc) | (_, KeyCode::Char('h')) | (_, KeyCode::Left) if drawer_open => {
            Action::CloseDrawer
        },
        (_, KeyCode::Up) | (_, KeyCode::Char('k')) if drawer_open => Action::CursorUp,
        (_, KeyCode::Down) | (_, KeyCode::Char('j')) if drawer_open => Action::CursorDown,
        (_, KeyCode::Enter) | (_, KeyCode::Char('l')) | (_, KeyCode::Right) if drawer_open => {
            Action::ActivateCursor
        },

        _ => return None,
    };

    Some(action)
}

/// Map a mouse click to an action using the last drawn layout.
pub fn mouse_action(mouse: MouseEvent, layout: &ShellLayout, drawer_open: bool) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    let (column, row) = (mouse.column, mouse.row);
    if layout.hits_menu_button(column, row) {
        return Some(Action::ToggleDrawer);
    }

    if !drawer_open {
        return None;
    }

    match layout.menu_entry_at(column, row) {
        Some(index) => Some(Action::Activate(index)),
        None if layout.hits_drawer(column, row) => None,
        // Clicking beside an open drawer dismisses it.
        None => Some(Action::CloseDrawer),
    }
}

/// Menu index for a number key; callers only pass `'1'..='4'`.
fn digit_index(c: char) -> usize {
    usize::from(c as u8 - b'1')
}
