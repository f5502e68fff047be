//! Today's totals for the dashboard.

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use super::local_day;
use crate::session::SessionLog;
use crate::task::Task;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DailySummary {
    pub study_time_today_secs: u64,
    pub tasks_completed_today: usize,
}

impl DailySummary {
    /// Percent of the daily goal reached. Not clamped; a zero goal reads 0.
    pub fn goal_progress_pct(&self, daily_goal_secs: u64) -> f64 {
        if daily_goal_secs == 0 {
            return 0.0;
        }
        self.study_time_today_secs as f64 / daily_goal_secs as f64 * 100.0
    }
}

/// Study time and completed tasks between local midnight and the next local
/// midnight of `now`'s day.
pub fn daily_summary<Tz: TimeZone>(
    logs: &[SessionLog],
    tasks: &[Task],
    now: &DateTime<Tz>,
) -> DailySummary {
    let tz = now.timezone();
    let today = now.date_naive();

    let study_time_today_secs = logs
        .iter()
        .filter(|l| local_day(&l.timestamp, &tz) == today)
        .map(|l| l.duration)
        .fold(0, u64::saturating_add);
    let tasks_completed_today = tasks.iter().filter(|t| t.completed_on(today, &tz)).count();

    DailySummary {
        study_time_today_secs,
        tasks_completed_today,
    }
}
