//! Decides whether a candidate is due on the current hourly invocation.
//!
//! Both evaluators work on whole hours because the trigger runs once an
//! hour. A candidate fires when the hour bucket of *this* invocation matches,
//! so a skipped invocation loses the reminder instead of deferring it.

use chrono::{DateTime, Datelike, Duration, NaiveDateTime, Timelike, Utc};
use chrono_tz::Tz;

const MILLIS_PER_HOUR: i64 = 60 * 60 * 1000;
const MINUTES_PER_HOUR: i64 = 60;

/// Civil wall-clock time in a zone, truncated to the minute.
///
/// Seconds are dropped on purpose: the comparison happens on the time a
/// human would read off a clock in that zone, not on elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LocalMinute(NaiveDateTime);

impl LocalMinute {
    pub fn project(instant: DateTime<Utc>, tz: Tz) -> Self {
        let local = instant.with_timezone(&tz).naive_local();
        let truncated = local
            - Duration::seconds(i64::from(local.second()))
            - Duration::nanoseconds(i64::from(local.nanosecond()));
        Self(truncated)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Minutes from `self` until `other`, negative if `other` is earlier
    pub fn minutes_until(&self, other: &LocalMinute) -> i64 {
        (other.0 - self.0).num_minutes()
    }
}

fn div_ceil(numerator: i64, denominator: i64) -> i64 {
    let quotient = numerator / denominator;
    if numerator % denominator > 0 {
        quotient + 1
    } else {
        quotient
    }
}

/// Whole hours until `start`, rounded up. Computed on plain instants.
pub fn hours_until_start(start: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    div_ceil((start - now).num_milliseconds(), MILLIS_PER_HOUR)
}

/// Whole hours until `due` as seen on a wall clock in `tz`.
///
/// Remaining time is rounded up to the next hour. Once the due minute has
/// been reached the result is zero or negative (rounded down), so an
/// overdue item never looks like it is within the hour again.
pub fn hours_until_due(due: DateTime<Utc>, now: DateTime<Utc>, tz: Tz) -> i64 {
    let local_now = LocalMinute::project(now, tz);
    let local_due = LocalMinute::project(due, tz);
    let diff_minutes = local_now.minutes_until(&local_due);
    if diff_minutes <= 0 {
        diff_minutes.div_euclid(MINUTES_PER_HOUR)
    } else {
        div_ceil(diff_minutes, MINUTES_PER_HOUR)
    }
}

/// Checklist items fire while due within the hour and on the invocation
/// where they become due.
pub fn checklist_item_due(hours_until_due: i64) -> bool {
    matches!(hours_until_due, 0 | 1)
}
