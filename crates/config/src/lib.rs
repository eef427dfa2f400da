pub mod display;
pub mod schema;

pub use display::{DisplayConfig, Padding};
pub use schema::{CountdownConfig, ScreenConfig, TickerConfig};

use countdown_core::{CountdownError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `CountdownConfig::default()`
/// if the file doesn't exist so the widget always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<CountdownConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(CountdownConfig::default());
    }

    let raw = std::fs::read_to_string(path)?;

    parse(&raw)
}

/// Parse and validate a TOML document.
pub fn parse(raw: &str) -> Result<CountdownConfig> {
    let config: CountdownConfig =
        toml::from_str(raw).map_err(|e| CountdownError::Config(format!("TOML parse error: {e}")))?;
    config.validate()?;
    Ok(config)
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("countdown").join("countdown.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = load("/nonexistent/countdown/countdown.toml").unwrap();
        assert_eq!(config.ticker.interval_ms, 1_000);
        assert!(config.show_hour);
    }

    #[test]
    fn unreadable_path_is_an_io_error() {
        // exists, but is a directory
        let err = load(std::env::temp_dir()).unwrap_err();
        assert!(matches!(err, CountdownError::Io { .. }), "{err:?}");
    }

    #[test]
    fn parse_rejects_invalid_values() {
        assert!(matches!(parse("border_width = -1.0"), Err(CountdownError::Config(_))));
        assert!(matches!(parse("[ticker]\ninterval_ms = 0"), Err(CountdownError::Config(_))));
    }

    #[test]
    fn parse_rejects_malformed_toml() {
        assert!(matches!(parse("show_hour = "), Err(CountdownError::Config(_))));
    }

    #[test]
    fn default_path_ends_with_file_name() {
        assert!(default_path().ends_with("countdown/countdown.toml"));
    }
}
