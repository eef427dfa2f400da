//! An in-memory [`Renderer`] with fixed monospace-like metrics.
//!
//! Every draw call is appended to a command log, which makes frames easy to
//! assert on and to print from a headless host.  A redraw request starts a
//! new frame, so the log only ever holds the frame drawn since the last one.

use crate::{
    geometry::{FontMetrics, Point, Rect, RectF, Size},
    paint::Paint,
    Renderer,
};

// Glyph shape as a fraction of the text size.
const DIGIT_ADVANCE: f32 = 0.55;
const COLON_ADVANCE: f32 = 0.28;
const OTHER_ADVANCE: f32 = 0.5;
const SIDE_BEARING: f32 = 0.05;
const DIGIT_HEIGHT: f32 = 0.72;
const COLON_HEIGHT: f32 = 0.52;
const ASCENT: f32 = -0.93;
const DESCENT: f32 = 0.24;

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line { from: Point, to: Point, paint: Paint },
    Rect { rect: RectF, paint: Paint },
    Text { text: String, origin: Point, paint: Paint },
}

#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    viewport:        Size,
    commands:        Vec<DrawCommand>,
    redraw_requests: usize,
}

impl RecordingRenderer {
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            ..Default::default()
        }
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the log, e.g. between frames.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Texts drawn so far, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn redraw_requests(&self) -> usize {
        self.redraw_requests
    }
}

impl Renderer for RecordingRenderer {
    fn measure_text_bounds(&mut self, text: &str, paint: &Paint) -> Rect {
        if text.is_empty() {
            return Rect::default();
        }
        let size = paint.text_size;
        let (advance, height) = text.chars().fold((0.0_f32, 0.0_f32), |(advance, height), ch| {
            let (a, h) = match ch {
                '0'..='9' => (DIGIT_ADVANCE, DIGIT_HEIGHT),
                ':' => (COLON_ADVANCE, COLON_HEIGHT),
                _ => (OTHER_ADVANCE, DIGIT_HEIGHT),
            };
            (advance + a * size, height.max(h * size))
        });
        let bearing = SIDE_BEARING * size;

        Rect::new(
            bearing.round() as i32,
            -(height.round() as i32),
            (advance - bearing).round() as i32,
            0,
        )
    }

    fn font_metrics(&mut self, paint: &Paint) -> FontMetrics {
        FontMetrics {
            ascent:  ASCENT * paint.text_size,
            descent: DESCENT * paint.text_size,
        }
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint) {
        self.commands.push(DrawCommand::Line { from, to, paint: *paint });
    }

    fn draw_rect(&mut self, rect: RectF, paint: &Paint) {
        self.commands.push(DrawCommand::Rect { rect, paint: *paint });
    }

    fn draw_text(&mut self, text: &str, origin: Point, paint: &Paint) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            origin,
            paint: *paint,
        });
    }

    fn request_redraw(&mut self) {
        self.redraw_requests += 1;
        self.commands.clear();
    }
}
