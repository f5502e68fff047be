//! Derived study statistics.
//!
//! Everything here is a pure function of the session log and task list,
//! cheap enough to recompute on every change. Calendar days are taken in the
//! timezone of the `now` argument, so callers pass `Local::now()` in
//! production and a fixed offset in tests.

mod daily;
mod history;
mod streak;

pub use daily::{daily_summary, DailySummary};
pub use history::{last_seven_days, subject_breakdown, DayPoint, SubjectTime};
pub use streak::{current_streak, streak_summary, StreakSummary};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Calendar day of `at` as seen in `tz`.
pub fn local_day<Tz: TimeZone>(at: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    at.with_timezone(tz).date_naive()
}
