//! Poll scheduling abstractions.
//!
//! The poller runs off an explicit, injectable schedule rather than a
//! raw wall-clock timer, so tests can drive ticks deterministically.

use chrono::{DateTime, Duration, Utc};

/// Result of checking if a tick should run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleCheck {
    /// Whether the tick should run now
    pub should_run: bool,
    /// When the tick should run next (if applicable)
    pub next_run: Option<DateTime<Utc>>,
}

impl ScheduleCheck {
    /// Create a new schedule check result.
    pub fn new(should_run: bool, next_run: Option<DateTime<Utc>>) -> Self {
        Self {
            should_run,
            next_run,
        }
    }

    /// Tick should not run yet, schedule for future time.
    pub fn wait_until(next_run: DateTime<Utc>) -> Self {
        Self {
            should_run: false,
            next_run: Some(next_run),
        }
    }

    /// Tick should run now and schedule for future time.
    pub fn run_and_schedule(next_run: DateTime<Utc>) -> Self {
        Self {
            should_run: true,
            next_run: Some(next_run),
        }
    }
}

/// Trait for schedules that decide when poll ticks run.
pub trait Schedule {
    /// Check if a tick should run now based on the last tick time.
    fn check(&self, last_run: Option<DateTime<Utc>>) -> ScheduleCheck;

    /// Calculate the next tick time after a given reference time.
    fn next_execution(&self, after: DateTime<Utc>) -> Option<DateTime<Utc>>;
}

/// Fixed-interval schedule with an immediate first tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSchedule {
    seconds: u64,
}

impl PollSchedule {
    /// Create a schedule ticking every `seconds` seconds.
    pub fn new(seconds: u64) -> Self {
        Self { seconds }
    }

    /// Interval length in seconds.
    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    fn interval(&self) -> Duration {
        Duration::seconds(self.seconds as i64)
    }
}

impl Default for PollSchedule {
    fn default() -> Self {
        Self::new(crate::DEFAULT_POLL_INTERVAL_SECONDS)
    }
}

impl Schedule for PollSchedule {
    fn check(&self, last_run: Option<DateTime<Utc>>) -> ScheduleCheck {
        let now = Utc::now();
        match last_run {
            None => ScheduleCheck::run_and_schedule(now + self.interval()),
            Some(last) => {
                let next = last + self.interval();
                if now >= next {
                    ScheduleCheck::run_and_schedule(now + self.interval())
                } else {
                    ScheduleCheck::wait_until(next)
                }
            }
        }
    }

    fn next_execution(&self, after: DateTime<Utc>) -> Option<DateTime<Utc>> {
        Some(after + self.interval())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_check_runs_immediately() {
        let schedule = PollSchedule::new(60);

        let check = schedule.check(None);
        assert!(check.should_run);
        assert!(check.next_run.is_some());
    }

    #[test]
    fn does_not_run_before_the_interval_elapses() {
        let schedule = PollSchedule::new(60);

        let check = schedule.check(Some(Utc::now()));
        assert!(!check.should_run);
        assert!(check.next_run.is_some());
    }

    #[test]
    fn runs_after_the_interval_elapses() {
        let schedule = PollSchedule::new(60);

        let past = Utc::now() - Duration::seconds(120);
        let check = schedule.check(Some(past));
        assert!(check.should_run);
    }

    #[test]
    fn next_execution_advances_by_one_interval() {
        let schedule = PollSchedule::new(60);
        let now = Utc::now();
        assert_eq!(
            schedule.next_execution(now),
            Some(now + Duration::seconds(60))
        );
    }
}
