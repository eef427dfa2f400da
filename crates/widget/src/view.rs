use countdown_config::DisplayConfig;
use countdown_core::{CountdownState, Listener, Step};
use countdown_renderer::{Geometry, Layout, MeasureSpec, Renderer, Size};
use countdown_ticker::TickSink;
use tracing::debug;

/// State, layout, renderer and listener of one countdown display.
///
/// Each tick goes through three separate phases: [`update`](Self::update)
/// computes the new state, [`invalidate`](Self::invalidate) +
/// [`draw`](Self::draw) push it to the renderer when it changed, then the
/// listener is told.
#[derive(Debug)]
pub struct CountdownView<R, L = ()> {
    layout:   Layout,
    state:    CountdownState,
    renderer: R,
    listener: L,
}

impl<R: Renderer, L: Listener> CountdownView<R, L> {
    pub fn new(config: DisplayConfig, renderer: R, listener: L) -> Self {
        Self {
            layout: Layout::new(config),
            state: CountdownState::default(),
            renderer,
            listener,
        }
    }

    pub fn state(&self) -> &CountdownState {
        &self.state
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Recompute the displayed parts.  Returns `true` when they changed.
    pub fn update(&mut self, remaining_ms: i64) -> bool {
        self.state.apply(remaining_ms, self.layout.config().units)
    }

    /// Ask the surface for a new frame.
    pub fn invalidate(&mut self) {
        self.renderer.request_redraw();
    }

    /// Draw the current state.
    pub fn draw(&mut self) -> Geometry {
        self.layout.draw(&mut self.renderer, &self.state.parts)
    }

    /// Preferred size under the given constraints.
    pub fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let metrics = self.layout.glyph_metrics(&mut self.renderer);
        self.layout.measure(&metrics, width, height)
    }
}

impl<R: Renderer, L: Listener> TickSink for CountdownView<R, L> {
    fn on_step(&mut self, step: Step) {
        let remaining = i64::try_from(step.remaining_ms()).unwrap_or(i64::MAX);
        if self.update(remaining) {
            debug!(parts = ?self.state.parts, "redraw");
            self.invalidate();
            self.draw();
        }

        match step {
            Step::Timing(ms) => self.listener.on_timing(ms),
            Step::Finish => self.listener.on_finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use countdown_core::{TimeParts, Units};
    use countdown_renderer::RecordingRenderer;

    #[derive(Debug, Default)]
    struct Events {
        timings:  Vec<u64>,
        finishes: usize,
    }

    impl Listener for Events {
        fn on_timing(&mut self, remaining_ms: u64) {
            self.timings.push(remaining_ms);
        }

        fn on_finish(&mut self) {
            self.finishes += 1;
        }
    }

    fn view(config: DisplayConfig) -> CountdownView<RecordingRenderer, Events> {
        CountdownView::new(config, RecordingRenderer::new(Size::new(174.0, 31.0)), Events::default())
    }

    #[test]
    fn timing_step_redraws_and_notifies() {
        let mut v = view(DisplayConfig::default());
        v.on_step(Step::Timing(3_723_000));

        assert_eq!(v.state().parts, TimeParts { hours: 1, minutes: 2, seconds: 3 });
        assert_eq!(v.renderer().redraw_requests(), 1);
        assert_eq!(v.renderer().texts(), vec!["01", ":", "02", ":", "03"]);
        assert_eq!(v.listener().timings, vec![3_723_000]);
        assert_eq!(v.listener().finishes, 0);
    }

    #[test]
    fn unchanged_parts_skip_redraw() {
        let mut v = view(DisplayConfig::default());
        v.on_step(Step::Timing(2_900));
        v.on_step(Step::Timing(2_400));

        assert_eq!(v.renderer().redraw_requests(), 1);
        assert_eq!(v.listener().timings, vec![2_900, 2_400]);
    }

    #[test]
    fn finish_clears_display() {
        let mut v = view(DisplayConfig::default());
        v.on_step(Step::Timing(1_500));
        v.renderer_mut().take_commands();
        v.on_step(Step::Finish);

        assert_eq!(v.state().remaining_ms, 0);
        assert_eq!(v.renderer().texts(), vec!["00", ":", "00", ":", "00"]);
        assert_eq!(v.listener().finishes, 1);
    }

    #[test]
    fn hidden_hour_shows_total_minutes() {
        let config = DisplayConfig {
            units: Units { hour: false, ..Units::ALL },
            ..Default::default()
        };
        let mut v = view(config);
        v.on_step(Step::Timing(3_605_000));

        assert_eq!(v.renderer().texts(), vec!["00", ":", "60", ":", "05"]);
    }

    #[test]
    fn measure_uses_renderer_metrics() {
        let mut v = view(DisplayConfig::default());
        assert_eq!(
            v.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified),
            Size::new(174.0, 31.0)
        );
    }
}
