//! Application state and logic.

use crate::config::ShellConfig;
use crate::drawer::{DrawerState, DrawerValue, MenuCursor, Transition, MENU};
use crate::input::Action;
use crate::router::{Route, Router};
use crate::ui::ThemeColors;

/// Application state.
///
/// Owns the drawer and router for one UI root; nothing here is global, so
/// several shells can coexist.
#[derive(Debug)]
pub struct App {
    /// Shell configuration.
    pub config: ShellConfig,
    /// Theme colors.
    pub colors: ThemeColors,
    /// Drawer open/closed state.
    pub drawer: DrawerState,
    /// Active destination.
    pub router: Router,
    /// Keyboard cursor in the drawer menu.
    pub cursor: MenuCursor,
    /// Status message.
    pub status: String,
    /// Drawer slides whose completion has not been reported yet.
    transitions: Vec<Transition>,
    /// Set once the user asked to quit.
    should_quit: bool,
}

impl App {
    /// Create a new application instance: drawer closed, at home.
    pub fn new(config: ShellConfig) -> Self {
        let drawer = DrawerState::new(config.drawer.transition_frames);
        Self {
            config,
            colors: ThemeColors::default(),
            drawer,
            router: Router::new(),
            cursor: MenuCursor::default(),
            status: "Ready".to_string(),
            transitions: Vec::new(),
            should_quit: false,
        }
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether the UI needs ticking at the animation rate.
    pub fn is_animating(&self) -> bool {
        self.drawer.is_animating()
    }

    /// Apply one input action.
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleDrawer => self.toggle_drawer(),
            Action::CloseDrawer => self.close_drawer(),
            Action::CursorUp => self.cursor.up(),
            Action::CursorDown => self.cursor.down(),
            Action::ActivateCursor => self.activate(self.cursor.index()),
            Action::Activate(index) => self.activate(index),
            Action::Help => {
                self.status =
                    "Help: m/Tab=menu, 1-4=go to screen, j/k=move, Enter=open, Esc=close, q=quit"
                        .to_string();
            },
        }
    }

    /// Flip the drawer from the top bar toggle.
    pub fn toggle_drawer(&mut self) {
        if self.drawer.is_closed() {
            self.cursor.select_route(self.router.active());
        }
        let transition = self.drawer.toggle();
        self.track(transition);
    }

    /// Close the drawer.
    pub fn close_drawer(&mut self) {
        if self.drawer.is_open() {
            let transition = self.drawer.close();
            self.track(transition);
        }
    }

    /// Activate menu entry `index`: close the drawer and navigate to its route.
    ///
    /// Indices past the end of the menu are ignored.
    pub fn activate(&mut self, index: usize) {
        let Some(entry) = MENU.get(index) else {
            return;
        };

        self.close_drawer();
        self.navigate(entry.route);
    }

    /// Navigate to `route`.
    pub fn navigate(&mut self, route: Route) {
        self.router.navigate(route);
        self.cursor.select_route(route);
        self.status = route.screen().label.to_string();
    }

    /// Advance the drawer slide and report settled transitions.
    pub fn on_tick(&mut self) {
        if self.drawer.is_animating() {
            self.drawer.tick();
        }
        self.poll_transitions();
    }

    /// Number of drawer slides not yet reported as settled.
    pub fn pending_transitions(&self) -> usize {
        self.transitions.len()
    }

    fn track(&mut self, mut transition: Transition) {
        match transition.try_settle() {
            Some(value) => self.report_settled(value),
            None => self.transitions.push(transition),
        }
    }

    fn poll_transitions(&mut self) {
        let mut settled = None;
        self.transitions.retain_mut(|transition| match transition.try_settle() {
            Some(value) => {
                settled = Some(value);
                false
            },
            None => true,
        });

        if let Some(value) = settled {
            self.report_settled(value);
        }
    }

    fn report_settled(&mut self, value: DrawerValue) {
        tracing::info!(drawer = value.name(), "drawer settled");
        if value == DrawerValue::Open {
            self.status = "Menu open".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(ShellConfig::default())
    }

    fn tick_to_rest(app: &mut App) {
        while app.is_animating() {
            app.on_tick();
        }
        app.on_tick();
    }

    #[test]
    fn initial_state() {
        let app = app();
        assert!(app.drawer.is_closed());
        assert_eq!(app.router.active(), Route::Home);
        assert_eq!(app.router.screen().label, "Home Screen");
        assert!(!app.should_quit());
    }

    #[test]
    fn activating_any_entry_closes_and_navigates() {
        for (index, entry) in MENU.iter().enumerate() {
            for start_open in [false, true] {
                for start in Route::ALL {
                    let mut app = app();
                    app.navigate(start);
                    if start_open {
                        app.toggle_drawer();
                    }

                    app.handle(Action::Activate(index));

                    assert_eq!(app.router.active(), entry.route);
                    assert!(app.drawer.is_closed());
                }
            }
        }
    }

    #[test]
    fn activating_from_the_cursor() {
        let mut app = app();
        app.handle(Action::ToggleDrawer);
        app.handle(Action::CursorDown);
        app.handle(Action::CursorDown);
        app.handle(Action::ActivateCursor);

        assert_eq!(app.router.active(), Route::Profile2);
        assert!(app.drawer.is_closed());
        assert_eq!(app.status, "Profile2 Screen");
    }

    #[test]
    fn out_of_range_activation_is_ignored() {
        let mut app = app();
        app.handle(Action::ToggleDrawer);
        app.handle(Action::Activate(MENU.len()));

        assert!(app.drawer.is_open());
        assert_eq!(app.router.active(), Route::Home);
    }

    #[test]
    fn opening_selects_active_route() {
        let mut app = app();
        app.navigate(Route::Settings);
        app.cursor = MenuCursor::default();
        app.toggle_drawer();
        assert_eq!(app.cursor.entry().route, Route::Settings);
    }

    #[test]
    fn slide_completion_is_reported() {
        let mut app = app();
        app.handle(Action::ToggleDrawer);
        assert!(app.is_animating());
        assert_eq!(app.pending_transitions(), 1);

        tick_to_rest(&mut app);
        assert_eq!(app.pending_transitions(), 0);
        assert_eq!(app.status, "Menu open");
    }

    #[test]
    fn close_when_closed_changes_nothing() {
        let mut app = app();
        app.handle(Action::CloseDrawer);
        assert!(app.drawer.is_closed());
        assert!(!app.is_animating());
        assert_eq!(app.pending_transitions(), 0);
        assert_eq!(app.status, "Ready");
    }

    #[test]
    fn without_animation_settles_at_once() {
        let mut app = App::new(ShellConfig::default().without_animation());
        app.handle(Action::ToggleDrawer);
        assert!(!app.is_animating());
        assert_eq!(app.pending_transitions(), 0);
        assert_eq!(app.drawer.visible_fraction(), 1.0);
    }

    #[test]
    fn shells_are_independent() {
        let mut first = app();
        let second = app();
        first.handle(Action::Activate(3));
        first.handle(Action::ToggleDrawer);

        assert_eq!(second.router.active(), Route::Home);
        assert!(second.drawer.is_closed());
    }

    #[test]
    fn quit() {
        let mut app = app();
        app.handle(Action::Quit);
        assert!(app.should_quit());
    }
}
