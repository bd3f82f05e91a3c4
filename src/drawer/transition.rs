//! Completion handle for a drawer slide.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::channel::oneshot;
use futures::{ready, FutureExt};

use super::DrawerValue;

/// A drawer slide in flight.
///
/// Resolves with the value the drawer settles on. When the slide is reversed
/// before it completes, this is the final value rather than [`target`].
/// If the drawer state is dropped first, it resolves with [`target`].
///
/// [`target`]: Transition::target
#[derive(Debug)]
#[must_use = "a transition does nothing unless polled or awaited"]
pub struct Transition {
    target: DrawerValue,
    rx: oneshot::Receiver<DrawerValue>,
    /// Value received once the slide settled.
    settled: Option<DrawerValue>,
}

impl Transition {
    /// A transition still waiting on the slide, with the sender that completes it.
    pub(super) fn pending(target: DrawerValue) -> (Self, oneshot::Sender<DrawerValue>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                target,
                rx,
                settled: None,
            },
            tx,
        )
    }

    /// A transition that has already settled.
    pub(super) fn settled(value: DrawerValue) -> Self {
        let (transition, tx) = Self::pending(value);
        // The receiver is alive, so this cannot fail.
        let _ = tx.send(value);
        transition
    }

    /// The value requested when the transition started.
    pub fn target(&self) -> DrawerValue {
        self.target
    }

    /// Check for completion without blocking.
    pub fn try_settle(&mut self) -> Option<DrawerValue> {
        if self.settled.is_none() {
            self.settled = match self.rx.try_recv() {
                Ok(value) => value,
                Err(oneshot::Canceled) => Some(self.target),
            };
        }
        self.settled
    }
}

impl Future for Transition {
    type Output = DrawerValue;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if let Some(value) = self.settled {
            return Poll::Ready(value);
        }

        let target = self.target;
        let value = ready!(self.rx.poll_unpin(cx)).unwrap_or(target);
        self.settled = Some(value);
        Poll::Ready(value)
    }
}
