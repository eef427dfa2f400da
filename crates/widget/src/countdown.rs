use crate::view::CountdownView;
use chrono::{DateTime, Utc};
use countdown_config::{CountdownConfig, DisplayConfig};
use countdown_core::{remaining_until, CountdownError, Listener, Result};
use countdown_renderer::{Geometry, MeasureSpec, Renderer, Size};
use countdown_ticker::{TickHandle, TickScheduler, TickStatus};
use std::{
    cell::{Ref, RefCell, RefMut},
    rc::Rc,
};
use tracing::info;

/// A countdown display that drives its own redraws.
///
/// The host calls [`start`](Self::start) (or [`start_at`](Self::start_at)) to
/// begin and [`stop`](Self::stop) on teardown; dropping the widget stops it
/// too.  Starting again replaces the running countdown.
///
/// Ticks are only delivered while the host awaits [`run`](Self::run), so
/// every tick, redraw and listener call happens on the host's task.
pub struct CountdownWidget<R, L = ()>
where
    R: Renderer + 'static,
    L: Listener + 'static,
{
    view:      Rc<RefCell<CountdownView<R, L>>>,
    scheduler: TickScheduler,
    handle:    Option<TickHandle>,
}

impl<R, L> CountdownWidget<R, L>
where
    R: Renderer + 'static,
    L: Listener + 'static,
{
    pub fn new(config: DisplayConfig, scheduler: TickScheduler, renderer: R, listener: L) -> Self {
        Self {
            view: Rc::new(RefCell::new(CountdownView::new(config, renderer, listener))),
            scheduler,
            handle: None,
        }
    }

    /// Build from a loaded config file: display settings and tick interval.
    pub fn from_config(config: &CountdownConfig, renderer: R, listener: L) -> Result<Self> {
        Ok(Self::new(
            config.display()?,
            TickScheduler::new(config.interval()),
            renderer,
            listener,
        ))
    }

    /// Count down `remaining_ms`.  A non-positive value finishes immediately.
    pub fn start(&mut self, remaining_ms: i64) {
        self.stop();
        info!(remaining_ms, "countdown start");
        self.handle = Some(self.scheduler.start(remaining_ms, Rc::clone(&self.view)));
    }

    /// Count down to the wall-clock instant `target`.
    pub fn start_at(&mut self, target: DateTime<Utc>) {
        self.start(remaining_until(target, Utc::now()));
    }

    /// Count down to a Unix timestamp in milliseconds.
    pub fn start_at_epoch_ms(&mut self, target_ms: i64) -> Result<()> {
        let target = DateTime::from_timestamp_millis(target_ms).ok_or_else(|| {
            CountdownError::InvalidInput(format!("timestamp {target_ms} ms is out of range"))
        })?;
        self.start_at(target);
        Ok(())
    }

    /// Cancel the running countdown, if any.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.as_mut() {
            handle.cancel();
        }
    }

    pub fn status(&self) -> TickStatus {
        self.handle.as_ref().map_or(TickStatus::Idle, TickHandle::status)
    }

    /// Drive the current countdown until it finishes or is stopped.
    pub async fn run(&mut self) {
        if let Some(handle) = self.handle.as_mut() {
            handle.run().await;
        }
    }

    /// Borrow the view, e.g. to inspect state or the renderer.
    pub fn view(&self) -> Ref<'_, CountdownView<R, L>> {
        self.view.borrow()
    }

    pub fn view_mut(&self) -> RefMut<'_, CountdownView<R, L>> {
        self.view.borrow_mut()
    }

    /// Draw the current state outside of a tick (e.g. after a resize).
    pub fn draw(&self) -> Geometry {
        self.view.borrow_mut().draw()
    }

    pub fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size {
        self.view.borrow_mut().measure(width, height)
    }
}

impl<R, L> Drop for CountdownWidget<R, L>
where
    R: Renderer + 'static,
    L: Listener + 'static,
{
    fn drop(&mut self) {
        self.stop();
    }
}
