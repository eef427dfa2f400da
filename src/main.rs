//! countdown: headless demo host for the countdown widget.
//!
//! Run with:  `RUST_LOG=info countdown [DURATION_MS | @TARGET_EPOCH_MS]`
//!
//! Each tick is logged; `RUST_LOG=trace` also shows every drawn frame.
//! Ctrl-C stops the countdown.

use anyhow::{bail, Context, Result};
use countdown_core::{format_time, split, Listener, Units};
use countdown_renderer::{MeasureSpec, RecordingRenderer};
use countdown_widget::CountdownWidget;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Used when no argument is given.
const DEFAULT_DURATION_MS: i64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    /// Milliseconds from now.
    Duration(i64),
    /// Unix timestamp in milliseconds.
    Epoch(i64),
}

fn parse_target(arg: Option<&str>) -> Result<Target> {
    let Some(arg) = arg else {
        return Ok(Target::Duration(DEFAULT_DURATION_MS));
    };
    if let Some(epoch) = arg.strip_prefix('@') {
        let ms: i64 = epoch
            .parse()
            .with_context(|| format!("invalid target timestamp '{epoch}'"))?;
        return Ok(Target::Epoch(ms));
    }
    let ms: i64 = arg
        .parse()
        .with_context(|| format!("invalid duration '{arg}'"))?;
    if ms < 0 {
        bail!("duration must be non-negative, got {ms}");
    }
    Ok(Target::Duration(ms))
}

/// Logs every tick as `HH:MM:SS`.
struct LogListener {
    units: Units,
}

impl Listener for LogListener {
    fn on_timing(&mut self, remaining_ms: u64) {
        let remaining = i64::try_from(remaining_ms).unwrap_or(i64::MAX);
        if let Ok(parts) = split(remaining, self.units) {
            info!(
                "{}:{}:{}",
                format_time(parts.hours),
                format_time(parts.minutes),
                format_time(parts.seconds)
            );
        }
    }

    fn on_finish(&mut self) {
        info!("countdown finished");
    }
}

async fn run(target: Target) -> Result<()> {
    let config = countdown_config::load(countdown_config::default_path())?;
    let display = config.display()?;
    let listener = LogListener { units: display.units };

    let mut widget = CountdownWidget::from_config(&config, RecordingRenderer::default(), listener)?;

    let size = widget.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
    widget.view_mut().renderer_mut().set_viewport(size);
    info!(width = size.width, height = size.height, "view measured");

    match target {
        Target::Duration(ms) => widget.start(ms),
        Target::Epoch(ms) => widget.start_at_epoch_ms(ms)?,
    }

    let interrupted = tokio::select! {
        _ = widget.run() => false,
        res = tokio::signal::ctrl_c() => {
            res.context("cannot listen for Ctrl-C")?;
            true
        }
    };
    if interrupted {
        warn!("interrupted; stopping countdown");
        widget.stop();
    }

    Ok(())
}

fn main() -> Result<()> {
    // Structured logging; RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("countdown v{} starting", env!("CARGO_PKG_VERSION"));

    let target = parse_target(std::env::args().nth(1).as_deref())?;

    // Everything runs on one thread: ticks, redraws and listener calls.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("cannot build tokio runtime")?;
    runtime.block_on(run(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_to_ten_seconds() {
        assert_eq!(parse_target(None).unwrap(), Target::Duration(10_000));
    }

    #[test]
    fn parse_duration_and_epoch() {
        assert_eq!(parse_target(Some("2500")).unwrap(), Target::Duration(2_500));
        assert_eq!(
            parse_target(Some("@1569957140000")).unwrap(),
            Target::Epoch(1_569_957_140_000)
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_target(Some("soon")).is_err());
        assert!(parse_target(Some("@x")).is_err());
        assert!(parse_target(Some("-5")).is_err());
    }
}
