use crate::display::{DisplayConfig, Padding};
use countdown_core::{Color, CountdownError, Result, Units};
use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `countdown.toml`.
///
/// Sizes are in density-independent units: text sizes in `sp`, everything
/// else in `dp`.  [`CountdownConfig::display`] converts them to pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CountdownConfig {
    pub show_hour:   bool,
    pub show_minute: bool,
    pub show_second: bool,
    /// Draw a box around each segment.
    pub show_border: bool,
    /// Digit text size (sp).
    pub text_size: f32,
    /// `:` separator text size (sp).
    pub suffix_size: f32,
    /// Box stroke width (dp).
    pub border_width: f32,
    /// Gap on each side of a separator (dp).
    pub suffix_margin: f32,
    /// Stroke width of the horizontal centre line (dp).
    pub divider_width: f32,
    /// Inner padding of each box (dp).
    pub padding: Padding,
    /// Hex color used for text, boxes and divider.
    pub color: String,
    pub screen: ScreenConfig,
    pub ticker: TickerConfig,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            show_hour:     true,
            show_minute:   true,
            show_second:   true,
            show_border:   true,
            text_size:     40.0,
            suffix_size:   20.0,
            border_width:  1.0,
            suffix_margin: 10.0,
            divider_width: 1.0,
            padding:       Padding::default(),
            color:         "#000000".to_string(),
            screen:        ScreenConfig::default(),
            ticker:        TickerConfig::default(),
        }
    }
}

/// Display metrics used for dp/sp → px conversion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Pixels per dp.
    pub density: f32,
    /// Pixels per sp (density × user font scale).
    pub scaled_density: f32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            density:        1.0,
            scaled_density: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerConfig {
    /// Time between ticks in milliseconds.
    pub interval_ms: u64,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self { interval_ms: 1_000 }
    }
}

impl CountdownConfig {
    /// Reject values the layout cannot work with.
    pub fn validate(&self) -> Result<()> {
        let dimensions = [
            ("text_size", self.text_size),
            ("suffix_size", self.suffix_size),
            ("border_width", self.border_width),
            ("suffix_margin", self.suffix_margin),
            ("divider_width", self.divider_width),
            ("padding.left", self.padding.left),
            ("padding.top", self.padding.top),
            ("padding.right", self.padding.right),
            ("padding.bottom", self.padding.bottom),
        ];
        for (name, value) in dimensions {
            if !value.is_finite() || value < 0.0 {
                return Err(CountdownError::Config(format!(
                    "`{name}` must be a non-negative number, got {value}"
                )));
            }
        }

        for (name, value) in [
            ("screen.density", self.screen.density),
            ("screen.scaled_density", self.screen.scaled_density),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CountdownError::Config(format!(
                    "`{name}` must be positive, got {value}"
                )));
            }
        }

        if self.ticker.interval_ms == 0 {
            return Err(CountdownError::Config("`ticker.interval_ms` must be positive".into()));
        }

        if Color::from_hex(&self.color).is_none() {
            return Err(CountdownError::Config(format!("invalid color '{}'", self.color)));
        }

        Ok(())
    }

    /// Resolve to pixel units.  Validates first.
    pub fn display(&self) -> Result<DisplayConfig> {
        self.validate()?;

        let dp = self.screen.density;
        let sp = self.screen.scaled_density;

        Ok(DisplayConfig {
            units: Units {
                hour:   self.show_hour,
                minute: self.show_minute,
                second: self.show_second,
            },
            show_border:   self.show_border,
            text_size:     self.text_size * sp,
            suffix_size:   self.suffix_size * sp,
            border_width:  self.border_width * dp,
            suffix_margin: self.suffix_margin * dp,
            divider_width: self.divider_width * dp,
            padding:       self.padding.scaled(dp),
            color:         Color::from_hex(&self.color).unwrap_or_default(),
        })
    }

    pub fn interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.ticker.interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_at_unit_density() {
        let display = CountdownConfig::default().display().unwrap();
        assert_eq!(display.units, Units::ALL);
        assert!(display.show_border);
        assert_eq!(display.text_size, 40.0);
        assert_eq!(display.suffix_size, 20.0);
        assert_eq!(display.border_width, 1.0);
        assert_eq!(display.suffix_margin, 10.0);
        assert_eq!(display.color, Color::BLACK);
    }

    #[test]
    fn densities_scale_dimensions() {
        let config: CountdownConfig = toml::from_str(
            r##"
            show_hour = false
            color = "#ff0000"

            [padding]
            left = 2.0
            top = 1.0

            [screen]
            density = 2.0
            scaled_density = 3.0
            "##,
        )
        .unwrap();

        let display = config.display().unwrap();
        assert!(!display.units.hour);
        assert!(display.units.minute);
        assert_eq!(display.text_size, 120.0);
        assert_eq!(display.suffix_size, 60.0);
        assert_eq!(display.border_width, 2.0);
        assert_eq!(display.suffix_margin, 20.0);
        assert_eq!(display.padding, Padding { left: 4.0, top: 2.0, right: 0.0, bottom: 0.0 });
        assert_eq!(display.color.r, 1.0);
    }

    #[test]
    fn validate_rejects_bad_density() {
        let mut config = CountdownConfig::default();
        config.screen.density = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_color() {
        let config = CountdownConfig {
            color: "black".into(),
            ..Default::default()
        };
        assert!(matches!(config.display(), Err(CountdownError::Config(_))));
    }

    #[test]
    fn validate_rejects_nan() {
        let config = CountdownConfig {
            text_size: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
