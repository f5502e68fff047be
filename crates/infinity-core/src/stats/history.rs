//! Chart series for the stats view.

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, TimeZone};
use serde::Serialize;

use super::local_day;
use crate::session::SessionLog;
use crate::task::Task;

/// One bar of the seven-day chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPoint {
    pub date: NaiveDate,
    /// Short weekday name, e.g. "Mon".
    pub label: String,
    pub study_hours: f64,
    pub tasks_done: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectTime {
    pub subject: String,
    pub hours: f64,
}

fn hours(secs: u64) -> f64 {
    (secs as f64 / 3600.0 * 100.0).round() / 100.0
}

/// Study hours and completed tasks for the last seven days, oldest first,
/// ending with today.
pub fn last_seven_days<Tz: TimeZone>(
    logs: &[SessionLog],
    tasks: &[Task],
    now: &DateTime<Tz>,
) -> Vec<DayPoint> {
    let tz = now.timezone();
    let today = now.date_naive();

    (0..7)
        .rev()
        .map(|back| {
            let day = today - Duration::days(back);
            let secs = logs
                .iter()
                .filter(|l| local_day(&l.timestamp, &tz) == day)
                .map(|l| l.duration)
                .fold(0, u64::saturating_add);
            let tasks_done = tasks
                .iter()
                .filter(|t| t.completion_date.is_some_and(|at| local_day(&at, &tz) == day))
                .count();
            DayPoint {
                date: day,
                label: day.format("%a").to_string(),
                study_hours: hours(secs),
                tasks_done,
            }
        })
        .collect()
}

/// Total hours per subject, largest first.
pub fn subject_breakdown(logs: &[SessionLog]) -> Vec<SubjectTime> {
    let mut totals: HashMap<&str, u64> = HashMap::new();
    for log in logs {
        let total = totals.entry(log.subject.as_str()).or_default();
        *total = total.saturating_add(log.duration);
    }

    let mut out: Vec<SubjectTime> = totals
        .into_iter()
        .map(|(subject, secs)| SubjectTime {
            subject: subject.to_string(),
            hours: hours(secs),
        })
        .collect();
    out.sort_by(|a, b| {
        b.hours
            .total_cmp(&a.hours)
            .then_with(|| a.subject.cmp(&b.subject))
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionType;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn seven_points_ending_today() {
        let tz = FixedOffset::east_opt(0).unwrap();
        let now = tz.with_ymd_and_hms(2026, 6, 7, 18, 0, 0).unwrap(); // Sunday
        let two_days_ago = (now - Duration::days(2)).with_timezone(&Utc);
        let logs = vec![
            SessionLog::new(now.with_timezone(&Utc), 5400, "Math", SessionType::Adaptive),
            SessionLog::new(two_days_ago, 1800, "Math", SessionType::Pomodoro),
            SessionLog::new(
                (now - Duration::days(9)).with_timezone(&Utc),
                3600,
                "Old",
                SessionType::Pomodoro,
            ),
        ];

        let points = last_seven_days(&logs, &[], &now);
        assert_eq!(points.len(), 7);
        assert_eq!(points[6].date, now.date_naive());
        assert_eq!(points[6].label, "Sun");
        assert_eq!(points[6].study_hours, 1.5);
        assert_eq!(points[4].study_hours, 0.5);
        let total: f64 = points.iter().map(|p| p.study_hours).sum();
        assert_eq!(total, 2.0);
    }

    #[test]
    fn subjects_sorted_by_hours() {
        let now = Utc::now();
        let logs = vec![
            SessionLog::new(now, 1200, "Art", SessionType::Pomodoro),
            SessionLog::new(now, 3600, "Math", SessionType::Pomodoro),
            SessionLog::new(now, 1200, "Art", SessionType::Pomodoro),
        ];
        let breakdown = subject_breakdown(&logs);
        assert_eq!(breakdown[0].subject, "Math");
        assert_eq!(breakdown[0].hours, 1.0);
        assert_eq!(breakdown[1].subject, "Art");
        assert_eq!(breakdown[1].hours, 0.67);
    }
}
