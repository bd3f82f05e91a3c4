//! Drawer menu entries.

use crate::router::Route;

/// Icon shown next to a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// House.
    Home,
    /// Person in a circle.
    AccountCircle,
    /// Gear.
    Settings,
    /// Hamburger menu, used by the top bar toggle.
    Menu,
}

impl Icon {
    /// Single-column glyph for the terminal.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Home => "⌂",
            Icon::AccountCircle => "☺",
            Icon::Settings => "⚙",
            Icon::Menu => "≡",
        }
    }
}

/// A destination listed in the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    /// Leading icon.
    pub icon: Icon,
    /// Entry label.
    pub label: &'static str,
    /// Where activating the entry navigates.
    pub route: Route,
}

/// The drawer's entries, in display order.
pub static MENU: [MenuEntry; 4] = [
    MenuEntry {
        icon: Icon::Home,
        label: "Home",
        route: Route::Home,
    },
    MenuEntry {
        icon: Icon::AccountCircle,
        label: "Profile",
        route: Route::Profile,
    },
    MenuEntry {
        icon: Icon::AccountCircle,
        label: "Profile2",
        route: Route::Profile2,
    },
    MenuEntry {
        icon: Icon::Settings,
        label: "Settings",
        route: Route::Settings,
    },
];

/// Keyboard cursor over [`MENU`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuCursor {
    index: usize,
}

impl MenuCursor {
    /// Highlighted entry index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Highlighted entry.
    pub fn entry(&self) -> &'static MenuEntry {
        &MENU[self.index]
    }

    /// Move the cursor up one entry.
    pub fn up(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Move the cursor down one entry.
    pub fn down(&mut self) {
        if self.index + 1 < MENU.len() {
            self.index += 1;
        }
    }

    /// Put the cursor on the entry for `route`.
    pub fn select_route(&mut self, route: Route) {
        if let Some(index) = MENU.iter().position(|entry| entry.route == route) {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_covers_every_route_once_in_order() {
        let routes: Vec<Route> = MENU.iter().map(|entry| entry.route).collect();
        assert_eq!(routes, Route::ALL.to_vec());
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut cursor = MenuCursor::default();
        cursor.up();
        assert_eq!(cursor.index(), 0);

        for _ in 0..10 {
            cursor.down();
        }
        assert_eq!(cursor.index(), MENU.len() - 1);
        assert_eq!(cursor.entry().label, "Settings");
    }

    #[test]
    fn cursor_follows_route() {
        let mut cursor = MenuCursor::default();
        cursor.select_route(Route::Profile2);
        assert_eq!(cursor.entry().route, Route::Profile2);
    }
}
