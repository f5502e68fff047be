//! Property tests for streak calculation.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use infinity_core::stats::{current_streak, streak_summary};
use infinity_core::{SessionLog, SessionType};
use proptest::prelude::*;

fn now() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 6, 15, 12, 0, 0)
        .unwrap()
}

/// One session at noon local time, `days_ago` days before `now()`.
fn log_days_ago(days_ago: i64) -> SessionLog {
    let at = (now() - Duration::days(days_ago)).with_timezone(&Utc);
    SessionLog::new(at, 1500, "Math", SessionType::Pomodoro)
}

proptest! {
    #[test]
    fn streak_counts_the_run_ending_today_or_yesterday(
        days in prop::collection::btree_set(0i64..40, 0..25)
    ) {
        let logs: Vec<_> = days.iter().map(|&d| log_days_ago(d)).collect();

        let anchor = [0, 1].into_iter().find(|d| days.contains(d));
        let expected = match anchor {
            None => 0,
            Some(start) => (start..).take_while(|d| days.contains(d)).count() as u32,
        };
        prop_assert_eq!(current_streak(&logs, &now()), expected);
    }

    #[test]
    fn duplicates_and_order_do_not_matter(
        days in prop::collection::vec(0i64..10, 1..30)
    ) {
        let mut logs: Vec<_> = days.iter().map(|&d| log_days_ago(d)).collect();
        let once: Vec<_> = days
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(log_days_ago)
            .collect();
        let expected = current_streak(&once, &now());
        logs.reverse();
        prop_assert_eq!(current_streak(&logs, &now()), expected);

        let summary = streak_summary(&logs, &now());
        prop_assert!(summary.best >= summary.current);
        prop_assert_eq!(summary.active_days as usize, once.len());
    }
}
