use crate::event::Step;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// The sequence of steps a countdown walks through.
///
/// Starting at `initial_ms`, every step subtracts a full `interval` whatever
/// the remainder.  Each positive value yields [`Step::Timing`]; the first
/// value at or below zero yields [`Step::Finish`] and ends the sequence.
/// `Countdown::new(2_500, 1s)` therefore yields `2500, 1500, 500, Finish`.
///
/// This type does no waiting of its own; a driver sleeps one interval after
/// every `Timing` step.
#[derive(Debug, Clone)]
pub struct Countdown {
    remaining: i64,
    interval:  i64,
    done:      bool,
}

impl Countdown {
    /// An `interval` below one millisecond is treated as one millisecond.
    pub fn new(initial_ms: i64, interval: Duration) -> Self {
        let interval = i64::try_from(interval.as_millis()).unwrap_or(i64::MAX).max(1);
        Self {
            remaining: initial_ms,
            interval,
            done: false,
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval as u64)
    }
}

impl Iterator for Countdown {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.done {
            return None;
        }
        if self.remaining <= 0 {
            self.done = true;
            return Some(Step::Finish);
        }
        let current = self.remaining;
        self.remaining = self.remaining.saturating_sub(self.interval);
        Some(Step::Timing(current as u64))
    }
}

/// Milliseconds from `now` until `target`; negative once the target has passed.
pub fn remaining_until(target: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (target - now).num_milliseconds()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn steps(initial_ms: i64, interval_ms: u64) -> Vec<Step> {
        Countdown::new(initial_ms, Duration::from_millis(interval_ms)).collect()
    }

    #[test]
    fn uneven_start_steps_by_full_interval() {
        assert_eq!(
            steps(2_500, 1_000),
            vec![Step::Timing(2_500), Step::Timing(1_500), Step::Timing(500), Step::Finish]
        );
    }

    #[test]
    fn exact_multiple_ends_on_zero() {
        assert_eq!(
            steps(2_000, 1_000),
            vec![Step::Timing(2_000), Step::Timing(1_000), Step::Finish]
        );
    }

    #[test]
    fn non_positive_start_finishes_immediately() {
        assert_eq!(steps(0, 1_000), vec![Step::Finish]);
        assert_eq!(steps(-42, 1_000), vec![Step::Finish]);
    }

    #[test]
    fn finish_is_emitted_once() {
        let mut countdown = Countdown::new(10, Duration::from_secs(1));
        assert_eq!(countdown.next(), Some(Step::Timing(10)));
        assert_eq!(countdown.next(), Some(Step::Finish));
        assert_eq!(countdown.next(), None);
        assert_eq!(countdown.next(), None);
    }

    #[test]
    fn zero_interval_is_clamped() {
        let countdown = Countdown::new(3, Duration::ZERO);
        assert_eq!(countdown.interval(), Duration::from_millis(1));
        assert_eq!(countdown.count(), 4);
    }

    #[test]
    fn remaining_until_target() {
        let now = Utc.timestamp_millis_opt(1_569_957_000_000).unwrap();
        let target = Utc.timestamp_millis_opt(1_569_957_140_000).unwrap();
        assert_eq!(remaining_until(target, now), 140_000);
        assert_eq!(remaining_until(now, target), -140_000);
    }
}
