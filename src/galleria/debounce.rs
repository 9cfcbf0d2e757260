//! # Debouncing
//!
//! Live search must not re-scan the whole collection on every keystroke. A
//! [`Debouncer`] keeps at most one pending payload together with a deadline.
//! Scheduling again replaces the payload and pushes the deadline out, so the
//! only payload that ever fires is the one scheduled last before the window
//! went quiet.
//!
//! Time comes from a [`Clock`]. The engine never sleeps; hosts call
//! [`Debouncer::fire_due`] (through `GalleryEngine::tick`) from their own
//! event loop or timer callback. Tests and scripted sessions use
//! [`ManualClock`] to step virtual time without waiting.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Default quiescence window for search input.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(300);

/// Source of monotonic time, measured from the clock's own origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall-clock time since construction.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Virtual time that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Moves to `to`. Virtual time never runs backwards.
    pub fn set(&self, to: Duration) {
        if to > self.now.get() {
            self.now.set(to);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

#[derive(Debug, Clone)]
struct Pending<T> {
    payload: T,
    deadline: Duration,
}

/// Cancel-and-reschedule timer holding a single payload.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Arms the timer for `payload`, discarding whatever was pending.
    pub fn schedule(&mut self, payload: T, now: Duration) {
        let deadline = now + self.window;
        if self.pending.is_some() {
            tracing::trace!(?deadline, "rescheduled pending evaluation");
        } else {
            tracing::trace!(?deadline, "armed debounce timer");
        }
        self.pending = Some(Pending { payload, deadline });
    }

    /// Drops the pending payload, if any. Returns whether one was armed.
    pub fn cancel_pending(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Takes the payload if its deadline has been reached.
    pub fn fire_due(&mut self, now: Duration) -> Option<T> {
        match &self.pending {
            Some(p) if now >= p.deadline => self.pending.take().map(|p| p.payload),
            _ => None,
        }
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}
