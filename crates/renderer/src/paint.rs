use countdown_config::DisplayConfig;
use countdown_core::Color;

/// Style of a single draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color:        Color,
    /// Text size in pixels; `0` for stroke-only paints.
    pub text_size:    f32,
    /// Stroke width in pixels; `0` for text paints.
    pub stroke_width: f32,
}

impl Paint {
    pub fn text(color: Color, text_size: f32) -> Self {
        Self { color, text_size, stroke_width: 0.0 }
    }

    pub fn stroke(color: Color, stroke_width: f32) -> Self {
        Self { color, text_size: 0.0, stroke_width }
    }
}

/// The four paints a countdown frame is drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paints {
    pub time:    Paint,
    pub suffix:  Paint,
    pub border:  Paint,
    pub divider: Paint,
}

impl Paints {
    pub fn from_config(config: &DisplayConfig) -> Self {
        Self {
            time:    Paint::text(config.color, config.text_size),
            suffix:  Paint::text(config.color, config.suffix_size),
            border:  Paint::stroke(config.color, config.border_width),
            divider: Paint::stroke(config.color, config.divider_width),
        }
    }
}
