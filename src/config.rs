//! Shell configuration.

use std::time::Duration;

/// Title shown in the top bar.
pub const APP_TITLE: &str = "Navigation Drawer Sample";

/// Configuration for the drawer panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerConfig {
    /// Requested width of the open drawer in columns.
    pub width: u16,
    /// Number of ticks a full slide takes (0 disables the animation).
    pub transition_frames: u16,
    /// Time between ticks while a slide is in flight.
    pub frame_interval: Duration,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            width: 30,
            transition_frames: 8,
            frame_interval: Duration::from_millis(16),
        }
    }
}

/// Combined configuration for the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Drawer configuration.
    pub drawer: DrawerConfig,
    /// Event poll timeout while nothing animates.
    pub idle_poll: Duration,
    /// Top bar title.
    pub title: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            drawer: DrawerConfig::default(),
            idle_poll: Duration::from_millis(100),
            title: APP_TITLE.to_string(),
        }
    }
}

impl ShellConfig {
    /// Set the drawer width.
    pub fn with_drawer_width(mut self, width: u16) -> Self {
        self.drawer.width = width;
        self
    }

    /// Disable the drawer slide.
    pub fn without_animation(mut self) -> Self {
        self.drawer.transition_frames = 0;
        self
    }

    /// Poll timeout for the event loop given whether a slide is in flight.
    pub fn poll_interval(&self, animating: bool) -> Duration {
        if animating {
            self.drawer.frame_interval
        } else {
            self.idle_poll
        }
    }
}
