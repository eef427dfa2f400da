//! Measurement and drawing for the countdown widget.
//!
//! The platform surface is abstracted behind [`Renderer`]; [`Layout`] turns a
//! [`countdown_config::DisplayConfig`] plus measured glyph bounds into
//! segment geometry and issues the draw calls.

pub mod geometry;
pub mod layout;
pub mod measure;
pub mod paint;
pub mod recording;

pub use geometry::{FontMetrics, Point, Rect, RectF, Size};
pub use layout::{Geometry, GlyphMetrics, Layout, SegmentGeometry, SEGMENTS, SUFFIX, TIME_TEXT};
pub use measure::{resolve_size, MeasureSpec};
pub use paint::{Paint, Paints};
pub use recording::{DrawCommand, RecordingRenderer};

/// Drawing surface the widget renders onto.
///
/// Implemented by the host platform.  All calls happen on the thread that
/// owns the widget.
pub trait Renderer {
    /// Pixel bounds of `text` drawn with `paint`, relative to its origin on
    /// the baseline (so `top` is usually negative).
    fn measure_text_bounds(&mut self, text: &str, paint: &Paint) -> Rect;

    /// Ascent (negative, above the baseline) and descent of `paint`'s font.
    fn font_metrics(&mut self, paint: &Paint) -> FontMetrics;

    /// Current size of the view being drawn.
    fn viewport(&self) -> Size;

    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint);

    /// Stroke the outline of `rect`.
    fn draw_rect(&mut self, rect: RectF, paint: &Paint);

    /// Draw `text` with its baseline origin at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, paint: &Paint);

    /// Invalidate the surface; called whenever a displayed component changes.
    fn request_redraw(&mut self);
}
