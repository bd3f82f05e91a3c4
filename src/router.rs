//! Routing between the shell's destinations.
//!
//! Destinations form a closed set, so an unknown route cannot reach the
//! router. String keys only exist at the command-line boundary.

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;

use crate::error::ShellError;
use crate::ui::theme::SLATE_GREY;

/// A navigation destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// The start destination.
    #[default]
    Home,
    /// First profile screen.
    Profile,
    /// Second profile screen.
    Profile2,
    /// Settings screen.
    Settings,
}

/// Static configuration of a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenConfig {
    /// The single label the screen displays.
    pub label: &'static str,
    /// Full-bleed background color.
    pub background: Color,
}

static HOME_SCREEN: ScreenConfig = ScreenConfig {
    label: "Home Screen",
    background: SLATE_GREY,
};

static PROFILE_SCREEN: ScreenConfig = ScreenConfig {
    label: "Profile Screen",
    background: SLATE_GREY,
};

static PROFILE2_SCREEN: ScreenConfig = ScreenConfig {
    label: "Profile2 Screen",
    background: SLATE_GREY,
};

static SETTINGS_SCREEN: ScreenConfig = ScreenConfig {
    label: "Settings Screen",
    background: SLATE_GREY,
};

impl Route {
    /// All routes in declaration order.
    pub const ALL: [Route; 4] = [Route::Home, Route::Profile, Route::Profile2, Route::Settings];

    /// The route's string key.
    pub fn key(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Profile => "profile",
            Route::Profile2 => "profile2",
            Route::Settings => "settings",
        }
    }

    /// The screen bound to this route.
    pub fn screen(self) -> &'static ScreenConfig {
        match self {
            Route::Home => &HOME_SCREEN,
            Route::Profile => &PROFILE_SCREEN,
            Route::Profile2 => &PROFILE2_SCREEN,
            Route::Settings => &SETTINGS_SCREEN,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Route {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::ALL
            .into_iter()
            .find(|route| route.key() == s)
            .ok_or_else(|| ShellError::unknown_route(s))
    }
}

/// Router state: which destination is active.
#[derive(Debug, Clone, Default)]
pub struct Router {
    active: Route,
}

impl Router {
    /// Create a router at the start destination.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active route.
    pub fn active(&self) -> Route {
        self.active
    }

    /// The screen of the active route.
    pub fn screen(&self) -> &'static ScreenConfig {
        self.active.screen()
    }

    /// Switch to `route`.
    pub fn navigate(&mut self, route: Route) {
        if self.active != route {
            tracing::debug!(from = %self.active, to = %route, "navigate");
        }
        self.active = route;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_home() {
        let router = Router::new();
        assert_eq!(router.active(), Route::Home);
        assert_eq!(router.screen().label, "Home Screen");
    }

    #[test]
    fn navigate_selects_matching_screen() {
        let expected = [
            (Route::Home, "Home Screen"),
            (Route::Profile, "Profile Screen"),
            (Route::Profile2, "Profile2 Screen"),
            (Route::Settings, "Settings Screen"),
        ];
        let mut router = Router::new();
        for (route, label) in expected {
            router.navigate(route);
            assert_eq!(router.active(), route);
            assert_eq!(router.screen().label, label);
        }
    }

    #[test]
    fn keys_parse_back_to_routes() {
        for route in Route::ALL {
            assert_eq!(route.key().parse::<Route>().ok(), Some(route));
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = "about".parse::<Route>().unwrap_err();
        assert!(matches!(err, ShellError::UnknownRoute { ref key } if key == "about"));
        assert!("Home".parse::<Route>().is_err());
    }

    #[test]
    fn profiles_stay_distinct() {
        assert_ne!(Route::Profile.screen(), Route::Profile2.screen());
    }
}
