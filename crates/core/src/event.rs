/// One periodic update of a running countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Countdown still running with this many milliseconds left (`> 0`).
    Timing(u64),
    /// Remaining time reached zero.  Always the last step.
    Finish,
}

impl Step {
    /// Remaining milliseconds represented by this step (`0` for `Finish`).
    #[must_use]
    pub fn remaining_ms(&self) -> u64 {
        match self {
            Self::Timing(ms) => *ms,
            Self::Finish => 0,
        }
    }

    #[must_use]
    pub fn is_finish(&self) -> bool {
        matches!(self, Self::Finish)
    }
}

/// Receives countdown progress.
///
/// Callbacks run on the countdown's own task, after the widget state has been
/// updated for that step.
pub trait Listener {
    /// Called once per tick while time remains.
    fn on_timing(&mut self, remaining_ms: u64);

    /// Called exactly once when the countdown completes, or immediately when
    /// started with a non-positive duration.
    fn on_finish(&mut self);
}

/// No listener attached.
impl Listener for () {
    fn on_timing(&mut self, _remaining_ms: u64) {}

    fn on_finish(&mut self) {}
}
