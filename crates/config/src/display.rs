use countdown_core::{Color, Units};
use serde::{Deserialize, Serialize};

/// Inner padding of a segment box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub left:   f32,
    pub top:    f32,
    pub right:  f32,
    pub bottom: f32,
}

impl Padding {
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            left:   self.left * factor,
            top:    self.top * factor,
            right:  self.right * factor,
            bottom: self.bottom * factor,
        }
    }
}

/// Validated display settings, all dimensions in pixels.
///
/// Built once from [`crate::CountdownConfig::display`] and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub units:         Units,
    pub show_border:   bool,
    pub text_size:     f32,
    pub suffix_size:   f32,
    pub border_width:  f32,
    pub suffix_margin: f32,
    pub divider_width: f32,
    pub padding:       Padding,
    pub color:         Color,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            units:         Units::ALL,
            show_border:   true,
            text_size:     40.0,
            suffix_size:   20.0,
            border_width:  1.0,
            suffix_margin: 10.0,
            divider_width: 1.0,
            padding:       Padding::default(),
            color:         Color::BLACK,
        }
    }
}
