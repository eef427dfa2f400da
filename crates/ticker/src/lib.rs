//! Cancellable periodic tick loop.
//!
//! [`TickScheduler::start`] builds the loop but does not spawn it: the host
//! drives it by awaiting [`TickHandle::run`] on its own task, so every step
//! is delivered on that task's thread.  The loop walks a
//! [`countdown_core::Countdown`], hands every [`Step`] to a [`TickSink`] and
//! sleeps one interval between steps.  The sleep is the only suspension
//! point, and [`TickHandle::cancel`] drops the suspended loop, so no step is
//! delivered after it returns.

use countdown_core::{Countdown, Step};
use std::{
    cell::{Cell, RefCell},
    fmt,
    future::Future,
    pin::Pin,
    rc::Rc,
    time::Duration,
};
use tracing::{debug, warn};

/// Default time between ticks.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1_000);

type Ticks = Pin<Box<dyn Future<Output = ()>>>;

/// Receives the steps of a running countdown.
pub trait TickSink {
    fn on_step(&mut self, step: Step);
}

impl<T: TickSink + ?Sized> TickSink for Rc<RefCell<T>> {
    fn on_step(&mut self, step: Step) {
        self.borrow_mut().on_step(step);
    }
}

/// Lifecycle of a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    /// No countdown started yet.  A [`TickHandle`] is never `Idle`; hosts
    /// report this while they hold no handle.
    Idle,
    Running,
    /// The final [`Step::Finish`] was delivered.
    Finished,
    /// Stopped by [`TickHandle::cancel`], or no Tokio runtime was available.
    Cancelled,
}

/// Starts countdowns with a fixed tick interval.
#[derive(Debug, Clone, Copy)]
pub struct TickScheduler {
    interval: Duration,
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

impl TickScheduler {
    /// An `interval` below one millisecond is treated as one millisecond.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Count down from `initial_ms`, delivering every step to `sink` while
    /// the returned handle is [run](TickHandle::run).
    ///
    /// A non-positive `initial_ms` delivers [`Step::Finish`] synchronously and
    /// returns an already finished handle.  Without a Tokio runtime nothing is
    /// delivered and the handle is returned cancelled.
    pub fn start<S>(&self, initial_ms: i64, mut sink: S) -> TickHandle
    where
        S: TickSink + 'static,
    {
        if initial_ms <= 0 {
            debug!(initial_ms, "countdown started at or below zero; finishing");
            sink.on_step(Step::Finish);
            return TickHandle::detached(TickStatus::Finished);
        }

        if tokio::runtime::Handle::try_current().is_err() {
            warn!("no tokio runtime available; countdown not scheduled");
            return TickHandle::detached(TickStatus::Cancelled);
        }

        let status = Rc::new(Cell::new(TickStatus::Running));
        let steps = Countdown::new(initial_ms, self.interval);
        let ticks: Ticks = Box::pin(tick_loop(steps, sink, Rc::clone(&status)));

        debug!(initial_ms, interval_ms = self.interval.as_millis() as u64, "countdown started");
        TickHandle {
            status,
            ticks: Some(ticks),
        }
    }
}

async fn tick_loop<S: TickSink>(steps: Countdown, mut sink: S, status: Rc<Cell<TickStatus>>) {
    let interval = steps.interval();
    for step in steps {
        if status.get() != TickStatus::Running {
            return;
        }
        sink.on_step(step);
        if step.is_finish() {
            status.set(TickStatus::Finished);
            debug!("countdown finished");
            return;
        }
        tokio::time::sleep(interval).await;
    }
}

/// Owns one countdown.  Dropping the handle cancels it.
pub struct TickHandle {
    status: Rc<Cell<TickStatus>>,
    ticks:  Option<Ticks>,
}

impl fmt::Debug for TickHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickHandle")
            .field("status", &self.status.get())
            .finish_non_exhaustive()
    }
}

impl TickHandle {
    fn detached(status: TickStatus) -> Self {
        Self {
            status: Rc::new(Cell::new(status)),
            ticks:  None,
        }
    }

    pub fn status(&self) -> TickStatus {
        self.status.get()
    }

    /// Drive the countdown until it finishes or is cancelled.
    ///
    /// Steps are only delivered while this future is polled.  Dropping it
    /// mid-wait pauses the countdown in place; the next `run` resumes the
    /// pending wait.
    pub async fn run(&mut self) {
        if let Some(ticks) = self.ticks.as_mut() {
            ticks.await;
            self.ticks = None;
        }
    }

    /// Stop the countdown.  No step is delivered after this returns.
    ///
    /// Does nothing on a finished or already cancelled handle.
    pub fn cancel(&mut self) {
        if self.status.get() != TickStatus::Running {
            return;
        }
        self.status.set(TickStatus::Cancelled);
        self.ticks = None;
        debug!("countdown cancelled");
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
