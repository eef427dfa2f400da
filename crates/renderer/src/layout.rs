use crate::{
    geometry::{FontMetrics, Point, Rect, RectF, Size},
    measure::{resolve_size, MeasureSpec},
    paint::Paints,
    Renderer,
};
use countdown_config::DisplayConfig;
use countdown_core::{format_time, TimeParts};

/// Reference string the digit boxes are sized from.
pub const TIME_TEXT: &str = "00";
/// Separator drawn between segments.
pub const SUFFIX: &str = ":";
/// Hour, minute and second.
pub const SEGMENTS: usize = 3;

/// Text measurements the layout depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphMetrics {
    /// Bounds of [`TIME_TEXT`] at the time text size.
    pub time:   Rect,
    /// Bounds of [`SUFFIX`] at the suffix size.
    pub suffix: Rect,
    /// Metrics of the time font.
    pub font:   FontMetrics,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentGeometry {
    pub border:        RectF,
    /// Baseline origin of the two-digit text.
    pub text_origin:   Point,
    /// Baseline origin of the trailing `:`; `None` for the last segment.
    pub suffix_origin: Option<Point>,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub divider_start:   Point,
    pub divider_end:     Point,
    pub baseline:        f32,
    pub suffix_baseline: f32,
    pub segments:        [SegmentGeometry; SEGMENTS],
}

/// Computes box sizes and positions and draws a frame.
///
/// Holds no per-frame state: geometry is a pure function of the config, the
/// glyph metrics and the view size.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    config: DisplayConfig,
    paints: Paints,
}

impl Layout {
    pub fn new(config: DisplayConfig) -> Self {
        let paints = Paints::from_config(&config);
        Self { config, paints }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn paints(&self) -> &Paints {
        &self.paints
    }

    /// Measure the reference glyphs with `renderer`.
    pub fn glyph_metrics<R: Renderer + ?Sized>(&self, renderer: &mut R) -> GlyphMetrics {
        GlyphMetrics {
            time:   renderer.measure_text_bounds(TIME_TEXT, &self.paints.time),
            suffix: renderer.measure_text_bounds(SUFFIX, &self.paints.suffix),
            font:   renderer.font_metrics(&self.paints.time),
        }
    }

    /// Width of a digit glyph run excluding its left side-bearing.
    fn time_text_width(metrics: &GlyphMetrics) -> f32 {
        (metrics.time.width() - metrics.time.left) as f32
    }

    /// Size the three boxes and two separators need.
    pub fn content_size(&self, metrics: &GlyphMetrics) -> Size {
        let c = &self.config;
        let pad = c.padding;

        let width = (Self::time_text_width(metrics) + pad.left + pad.right) * 3.0
            + c.suffix_margin * 4.0
            + c.border_width * 6.0
            + metrics.time.left as f32 * 3.0
            + metrics.suffix.width() as f32 * 2.0;
        let height = metrics.time.height() as f32 + pad.top + pad.bottom + c.border_width * 2.0;

        Size::new(width, height)
    }

    /// Resolve the content size against the parent's constraints.
    pub fn measure(&self, metrics: &GlyphMetrics, width: MeasureSpec, height: MeasureSpec) -> Size {
        let content = self.content_size(metrics);
        let measured = Size::new(
            resolve_size(content.width, width),
            resolve_size(content.height, height),
        );
        tracing::debug!(?content, ?measured, "measure");
        measured
    }

    /// Lay out the segments left to right inside a view of size `view`.
    pub fn geometry(&self, metrics: &GlyphMetrics, view: Size) -> Geometry {
        let c = &self.config;
        let bw = c.border_width;
        let pad = c.padding;
        let time_left = metrics.time.left as f32;
        let suffix_left = metrics.suffix.left as f32;
        let suffix_width = metrics.suffix.width() as f32;

        let mid = view.height / 2.0;
        let font_height = metrics.font.ascent + metrics.font.descent;
        let baseline = mid - font_height / 2.0;
        let suffix_baseline = mid + metrics.suffix.height() as f32 / 2.0;

        let box_width = Self::time_text_width(metrics) + bw + time_left + pad.left + pad.right;
        let top = bw / 2.0;
        let bottom = baseline + bw + pad.top;
        let gap = bw + c.suffix_margin * 2.0 + suffix_width;

        let mut left = bw / 2.0;
        let segments = std::array::from_fn(|i| {
            let border = RectF {
                left,
                top,
                right: left + box_width,
                bottom,
            };
            let text_origin = Point::new(border.left + bw / 2.0 - time_left + pad.left, baseline);
            let suffix_origin = (i + 1 < SEGMENTS).then(|| {
                Point::new(border.right + bw / 2.0 + c.suffix_margin - suffix_left, suffix_baseline)
            });
            left = border.right + gap;

            SegmentGeometry {
                border,
                text_origin,
                suffix_origin,
            }
        });

        Geometry {
            divider_start: Point::new(0.0, mid),
            divider_end: Point::new(view.width, mid),
            baseline,
            suffix_baseline,
            segments,
        }
    }

    /// Measure, lay out and draw one frame showing `parts`.
    ///
    /// Draw order: divider, then per segment its border, digits and
    /// separator.
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R, parts: &TimeParts) -> Geometry {
        let metrics = self.glyph_metrics(renderer);
        let geometry = self.geometry(&metrics, renderer.viewport());
        let paints = &self.paints;

        renderer.draw_line(geometry.divider_start, geometry.divider_end, &paints.divider);

        for (segment, value) in geometry.segments.iter().zip(parts.as_array()) {
            if self.config.show_border {
                renderer.draw_rect(segment.border, &paints.border);
            }
            renderer.draw_text(&format_time(value), segment.text_origin, &paints.time);
            if let Some(origin) = segment.suffix_origin {
                renderer.draw_text(SUFFIX, origin, &paints.suffix);
            }
        }

        tracing::trace!(?parts, "frame drawn");
        geometry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawCommand, RecordingRenderer};

    fn metrics(layout: &Layout) -> GlyphMetrics {
        layout.glyph_metrics(&mut RecordingRenderer::default())
    }

    fn parts(hours: u64, minutes: u64, seconds: u64) -> TimeParts {
        TimeParts { hours, minutes, seconds }
    }

    #[test]
    fn content_size_from_default_metrics() {
        let layout = Layout::new(DisplayConfig::default());
        // "00" → (2, -29, 42, 0); ":" → (1, -10, 5, 0)
        // width: 3×38 + 4×10 + 6×1 + 3×2 + 2×4
        assert_eq!(layout.content_size(&metrics(&layout)), Size::new(174.0, 31.0));
    }

    #[test]
    fn padding_grows_content() {
        let config = DisplayConfig {
            padding: countdown_config::Padding { left: 4.0, top: 2.0, right: 4.0, bottom: 2.0 },
            ..Default::default()
        };
        let layout = Layout::new(config);
        assert_eq!(layout.content_size(&metrics(&layout)), Size::new(198.0, 35.0));
    }

    #[test]
    fn segments_are_spaced_left_to_right() {
        let layout = Layout::new(DisplayConfig::default());
        let g = layout.geometry(&metrics(&layout), Size::new(174.0, 31.0));

        let lefts: Vec<f32> = g.segments.iter().map(|s| s.border.left).collect();
        let rights: Vec<f32> = g.segments.iter().map(|s| s.border.right).collect();
        assert_eq!(lefts, vec![0.5, 66.5, 132.5]);
        assert_eq!(rights, vec![41.5, 107.5, 173.5]);

        assert_eq!(g.segments[0].text_origin.x, -1.0);
        assert_eq!(g.segments[0].suffix_origin.map(|p| p.x), Some(51.0));
        assert!(g.segments[2].suffix_origin.is_none());
        for segment in &g.segments {
            assert_eq!(segment.border.top, 0.5);
            assert_eq!(segment.text_origin.y, g.baseline);
        }
    }

    #[test]
    fn baseline_centres_font_box() {
        let layout = Layout::new(DisplayConfig::default());
        let m = metrics(&layout);
        let g = layout.geometry(&m, Size::new(200.0, 100.0));

        let font_centre = g.baseline + (m.font.ascent + m.font.descent) / 2.0;
        assert!((font_centre - 50.0).abs() < 1e-4);
        assert_eq!(g.suffix_baseline, 55.0);
        assert_eq!(g.divider_start, Point::new(0.0, 50.0));
        assert_eq!(g.divider_end, Point::new(200.0, 50.0));
    }

    #[test]
    fn geometry_is_deterministic() {
        let layout = Layout::new(DisplayConfig::default());
        let view = Size::new(320.0, 96.0);
        let a = layout.geometry(&metrics(&layout), view);
        let b = Layout::new(DisplayConfig::default()).geometry(&metrics(&layout), view);
        assert_eq!(a, b);
    }

    #[test]
    fn measure_honours_specs() {
        let layout = Layout::new(DisplayConfig::default());
        let m = metrics(&layout);
        assert_eq!(
            layout.measure(&m, MeasureSpec::Unspecified, MeasureSpec::Unspecified),
            Size::new(174.0, 31.0)
        );
        assert_eq!(
            layout.measure(&m, MeasureSpec::AtMost(100.0), MeasureSpec::Exactly(80.0)),
            Size::new(100.0, 80.0)
        );
    }

    #[test]
    fn draw_issues_commands_in_order() {
        let layout = Layout::new(DisplayConfig::default());
        let mut r = RecordingRenderer::new(Size::new(174.0, 31.0));
        layout.draw(&mut r, &parts(1, 2, 30));

        let kinds: Vec<&str> = r
            .commands()
            .iter()
            .map(|c| match c {
                DrawCommand::Line { .. } => "line",
                DrawCommand::Rect { .. } => "rect",
                DrawCommand::Text { .. } => "text",
            })
            .collect();
        assert_eq!(
            kinds,
            vec!["line", "rect", "text", "text", "rect", "text", "text", "rect", "text"]
        );
        assert_eq!(r.texts(), vec!["01", ":", "02", ":", "30"]);
    }

    #[test]
    fn hidden_border_skips_rects() {
        let config = DisplayConfig {
            show_border: false,
            ..Default::default()
        };
        let layout = Layout::new(config);
        let mut r = RecordingRenderer::new(Size::new(174.0, 31.0));
        layout.draw(&mut r, &parts(0, 0, 5));

        assert!(!r.commands().iter().any(|c| matches!(c, DrawCommand::Rect { .. })));
        assert_eq!(r.texts(), vec!["00", ":", "00", ":", "05"]);
    }

    #[test]
    fn identical_frames_record_identically() {
        let layout = Layout::new(DisplayConfig::default());
        let mut a = RecordingRenderer::new(Size::new(180.0, 40.0));
        let mut b = RecordingRenderer::new(Size::new(180.0, 40.0));
        layout.draw(&mut a, &parts(12, 34, 56));
        layout.draw(&mut b, &parts(12, 34, 56));
        assert_eq!(a.commands(), b.commands());
    }
}
