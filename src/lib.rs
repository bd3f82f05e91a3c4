//! Navdrawer - a terminal application shell with a navigation drawer.
//!
//! A top bar with a menu toggle, a drawer that slides in from the left and
//! lists four destinations, and a content area showing the active screen.
//!
//! # Features
//!
//! - Closed set of routes, so an unknown destination cannot be requested
//! - Drawer slides that hand back a future resolving when they settle
//! - Keyboard and mouse input
//! - Headless snapshots of a single frame
//!
//! # Example
//!
//! ```
//! use navdrawer::app::App;
//! use navdrawer::config::ShellConfig;
//! use navdrawer::router::Route;
//!
//! let mut app = App::new(ShellConfig::default());
//! app.toggle_drawer();
//! app.activate(3);
//!
//! assert_eq!(app.router.active(), Route::Settings);
//! assert!(app.drawer.is_closed());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod drawer;
pub mod error;
pub mod input;
pub mod router;
pub mod ui;

pub use error::{Result, ShellError};
