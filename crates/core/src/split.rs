use crate::{
    error::{CountdownError, Result},
    state::{TimeParts, Units},
};

const SECOND_MS: i64 = 1_000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;

/// Split `remaining_ms` into hour / minute / second components.
///
/// Units are taken largest first; each enabled unit keeps the truncated
/// quotient and hands the remainder down to the next enabled unit.  A
/// disabled unit reads `0`, so with the hour hidden `90 min` shows as
/// `90` minutes.
pub fn split(remaining_ms: i64, units: Units) -> Result<TimeParts> {
    if remaining_ms < 0 {
        return Err(CountdownError::InvalidInput(format!(
            "remaining duration must be non-negative, got {remaining_ms} ms"
        )));
    }

    let mut rest = remaining_ms;
    let mut take = |enabled: bool, unit_ms: i64| -> u64 {
        if !enabled {
            return 0;
        }
        let value = rest / unit_ms;
        rest %= unit_ms;
        value as u64
    };

    let hours = take(units.hour, HOUR_MS);
    let minutes = take(units.minute, MINUTE_MS);
    let seconds = take(units.second, SECOND_MS);

    Ok(TimeParts { hours, minutes, seconds })
}

/// Format a component for display: zero-padded to two digits, wider values
/// are printed as-is.
pub fn format_time(value: u64) -> String {
    format!("{value:02}")
}
