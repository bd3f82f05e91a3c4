//! Drawer open/closed state and its slide transition.
//!
//! The logical value flips as soon as an operation is invoked. The visual
//! slide is advanced by [`DrawerState::tick`] from the UI loop, and each
//! operation hands back a [`Transition`] that resolves once the slide settles.

pub mod menu;
mod transition;

use futures::channel::oneshot;

pub use menu::{Icon, MenuCursor, MenuEntry, MENU};
pub use transition::Transition;

/// Whether the drawer is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerValue {
    /// Panel visible.
    Open,
    /// Panel hidden.
    #[default]
    Closed,
}

impl DrawerValue {
    /// The opposite value.
    pub fn flipped(self) -> Self {
        match self {
            DrawerValue::Open => DrawerValue::Closed,
            DrawerValue::Closed => DrawerValue::Open,
        }
    }

    /// Lowercase name for status and log messages.
    pub fn name(self) -> &'static str {
        match self {
            DrawerValue::Open => "open",
            DrawerValue::Closed => "closed",
        }
    }
}

/// Drawer state owned by the shell.
#[derive(Debug)]
pub struct DrawerState {
    value: DrawerValue,
    /// Slide position in ticks, `0` fully hidden, `frames` fully shown.
    offset: u16,
    frames: u16,
    waiters: Vec<oneshot::Sender<DrawerValue>>,
}

impl DrawerState {
    /// Create a closed drawer whose slide takes `frames` ticks.
    pub fn new(frames: u16) -> Self {
        Self {
            value: DrawerValue::Closed,
            offset: 0,
            frames,
            waiters: Vec::new(),
        }
    }

    /// The logical value.
    pub fn value(&self) -> DrawerValue {
        self.value
    }

    /// Whether the drawer is open.
    pub fn is_open(&self) -> bool {
        self.value == DrawerValue::Open
    }

    /// Whether the drawer is closed.
    pub fn is_closed(&self) -> bool {
        self.value == DrawerValue::Closed
    }

    /// Flip between open and closed.
    pub fn toggle(&mut self) -> Transition {
        self.animate_to(self.value.flipped())
    }

    /// Open the drawer.
    pub fn open(&mut self) -> Transition {
        self.animate_to(DrawerValue::Open)
    }

    /// Close the drawer. Closing a closed drawer changes nothing.
    pub fn close(&mut self) -> Transition {
        self.animate_to(DrawerValue::Closed)
    }

    /// Advance the slide by one tick.
    ///
    /// Returns `true` while the slide is still in flight.
    pub fn tick(&mut self) -> bool {
        let target = self.target_offset();
        if self.offset < target {
            self.offset += 1;
        } else if self.offset > target {
            self.offset -= 1;
        }

        if self.offset == target {
            self.notify_settled();
            false
        } else {
            true
        }
    }

    /// Jump the slide to its end.
    pub fn settle(&mut self) {
        self.offset = self.target_offset();
        self.notify_settled();
    }

    /// Whether a slide is in flight.
    pub fn is_animating(&self) -> bool {
        self.offset != self.target_offset()
    }

    /// How much of the panel is shown, from `0.0` to `1.0`.
    pub fn visible_fraction(&self) -> f32 {
        if self.frames == 0 {
            return match self.value {
                DrawerValue::Open => 1.0,
                DrawerValue::Closed => 0.0,
            };
        }
        f32::from(self.offset) / f32::from(self.frames)
    }

    fn target_offset(&self) -> u16 {
        match self.value {
            DrawerValue::Open => self.frames,
            DrawerValue::Closed => 0,
        }
    }

    fn animate_to(&mut self, value: DrawerValue) -> Transition {
        if self.value != value {
            tracing::debug!(from = self.value.name(), to = value.name(), "drawer");
            self.value = value;
        }

        if !self.is_animating() {
            self.notify_settled();
            return Transition::settled(value);
        }

        let (transition, tx) = Transition::pending(value);
        self.waiters.push(tx);
        transition
    }

    fn notify_settled(&mut self) {
        for tx in self.waiters.drain(..) {
            // A dropped transition has nobody left to tell.
            let _ = tx.send(self.value);
        }
    }
}
