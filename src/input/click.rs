//! Single/double click disambiguation.
//!
//! A single click is only reported once no second click has arrived within
//! the click window. A double click is reported immediately and suppresses
//! the pending single click.
//!
//! The deferred single-click check is a deadline owned by the
//! [`ClickDisambiguator`] itself. The host awaits [`ClickDisambiguator::expired`]
//! from its event loop; no task or thread is spawned, so dropping the
//! disambiguator drops the deadline with it and the handler can never be
//! called afterwards.

use std::future;
use std::pin::Pin;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::time::{Instant, Sleep, sleep_until};

/// How long a single click waits for a following double click.
pub const DEFAULT_CLICK_WINDOW: Duration = Duration::from_millis(300);

/// A pointer press with the click count reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    pub click_count: u32,
    pub timestamp: Instant,
}

impl ClickEvent {
    pub fn new(click_count: u32, timestamp: Instant) -> Self {
        Self {
            click_count,
            timestamp,
        }
    }

    /// A click stamped with the current time.
    #[cfg(test)]
    pub fn now(click_count: u32) -> Self {
        Self::new(click_count, Instant::now())
    }
}

/// Disambiguated click notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    SingleClick,
    DoubleClick,
}

/// Receiver of disambiguated clicks.
pub trait ClickHandler {
    fn single_click(&mut self);
    fn double_click(&mut self);
}

/// Forward gestures into the host event loop. A closed channel means the
/// host is shutting down, so the notification is dropped.
impl ClickHandler for UnboundedSender<Gesture> {
    fn single_click(&mut self) {
        let _ = self.send(Gesture::SingleClick);
    }

    fn double_click(&mut self) {
        let _ = self.send(Gesture::DoubleClick);
    }
}

/// Turns raw clicks into exactly one single or double click notification.
pub struct ClickDisambiguator<H: ClickHandler> {
    handler: H,
    window: Duration,
    /// 1 while a single click decision is deferred, otherwise 0
    pending_count: u8,
    /// Set iff `pending_count == 1`
    pending_timer: Option<Pin<Box<Sleep>>>,
}

impl<H: ClickHandler> ClickDisambiguator<H> {
    /// Create a disambiguator; hosts without a configured window use
    /// [`DEFAULT_CLICK_WINDOW`].
    pub fn with_window(handler: H, window: Duration) -> Self {
        Self {
            handler,
            window,
            pending_count: 0,
            pending_timer: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    #[cfg(test)]
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Whether a single click is waiting for its window to elapse.
    pub fn is_pending(&self) -> bool {
        self.pending_count == 1
    }

    /// Feed a raw click.
    ///
    /// Double clicks are reported synchronously. Single clicks (re)start the
    /// window; only the most recent one is honoured. Other counts are ignored.
    pub fn on_click(&mut self, event: ClickEvent) {
        match event.click_count {
            0 => {}
            1 => {
                self.cancel();
                self.pending_count = 1;
                self.pending_timer = Some(Box::pin(sleep_until(event.timestamp + self.window)));
            }
            _ => {
                self.cancel();
                self.handler.double_click();
            }
        }
    }

    /// Resolves once the pending single-click deadline passes and the handler
    /// has been notified. Pends forever while nothing is scheduled.
    ///
    /// Cancel safe: if dropped before completion (e.g. another `select!`
    /// branch won) the deadline stays scheduled.
    pub async fn expired(&mut self) {
        match self.pending_timer.as_mut() {
            Some(timer) => timer.as_mut().await,
            None => future::pending::<()>().await,
        }
        self.fire();
    }

    /// Drop any pending single click without notifying the handler.
    pub fn cancel(&mut self) {
        self.pending_timer = None;
        self.pending_count = 0;
    }

    fn fire(&mut self) {
        self.pending_timer = None;
        if self.pending_count == 1 {
            self.handler.single_click();
        }
        self.pending_count = 0;
    }
}

impl<H: ClickHandler> Drop for ClickDisambiguator<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}
