use crate::split::split;

/// Which time segments take part in the split.
///
/// A disabled unit always reads `0`; its magnitude folds into the next
/// enabled unit below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Units {
    pub hour:   bool,
    pub minute: bool,
    pub second: bool,
}

impl Units {
    pub const ALL: Self = Self { hour: true, minute: true, second: true };
}

impl Default for Units {
    fn default() -> Self {
        Self::ALL
    }
}

/// Hour / minute / second components of a remaining duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeParts {
    pub hours:   u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeParts {
    /// Components in display order (hour, minute, second).
    #[must_use]
    pub fn as_array(&self) -> [u64; 3] {
        [self.hours, self.minutes, self.seconds]
    }
}

/// The value the widget displays.  Written only by the tick step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountdownState {
    /// Milliseconds left, clamped at zero.
    pub remaining_ms: u64,
    /// Always equal to `split(remaining_ms, units)`.
    pub parts: TimeParts,
}

impl CountdownState {
    /// Apply a new remaining value and recompute the parts.
    ///
    /// Negative values are clamped to zero (the final step of a countdown may
    /// undershoot).  Returns `true` when the visible parts changed, i.e. a
    /// redraw is needed.
    pub fn apply(&mut self, remaining_ms: i64, units: Units) -> bool {
        let clamped = remaining_ms.max(0);
        // Cannot fail: the value is non-negative.
        let parts = split(clamped, units).unwrap_or_default();

        self.remaining_ms = clamped as u64;
        if parts == self.parts {
            return false;
        }
        self.parts = parts;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_reports_dirty_only_on_visible_change() {
        let mut state = CountdownState::default();
        assert!(state.apply(2_500, Units::ALL));
        assert_eq!(state.parts.seconds, 2);

        // 2.1 s still shows "02"
        assert!(!state.apply(2_100, Units::ALL));
        assert_eq!(state.remaining_ms, 2_100);

        assert!(state.apply(1_500, Units::ALL));
        assert_eq!(state.parts.seconds, 1);
    }

    #[test]
    fn apply_clamps_negative_to_zero() {
        let mut state = CountdownState::default();
        state.apply(500, Units::ALL);
        state.apply(-500, Units::ALL);
        assert_eq!(state.remaining_ms, 0);
        assert_eq!(state.parts, TimeParts::default());
    }
}
