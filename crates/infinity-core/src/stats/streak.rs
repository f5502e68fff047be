//! Consecutive-day study streaks.
//!
//! A day counts once no matter how many sessions it holds. The current
//! streak stays alive through the end of the day after the last session:
//! studying yesterday but not yet today still shows the streak.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::Serialize;

use super::local_day;
use crate::session::SessionLog;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StreakSummary {
    /// Run of consecutive days ending today or yesterday.
    pub current: u32,
    /// Longest run anywhere in the log.
    pub best: u32,
    /// Distinct days with at least one session.
    pub active_days: u32,
}

fn study_days<Tz: TimeZone>(logs: &[SessionLog], tz: &Tz) -> BTreeSet<NaiveDate> {
    logs.iter().map(|l| local_day(&l.timestamp, tz)).collect()
}

/// Current streak as of `now`.
///
/// Anchors at today if today has a session, otherwise at yesterday; if
/// neither has one the streak is broken and this returns 0.
pub fn current_streak<Tz: TimeZone>(logs: &[SessionLog], now: &DateTime<Tz>) -> u32 {
    let days = study_days(logs, &now.timezone());
    current_from_days(&days, now.date_naive())
}

fn current_from_days(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let anchor = if days.contains(&today) {
        today
    } else {
        match today.pred_opt() {
            Some(yesterday) if days.contains(&yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut streak = 0;
    let mut day = Some(anchor);
    while let Some(d) = day.filter(|d| days.contains(d)) {
        streak += 1;
        day = d.pred_opt();
    }
    streak
}

/// Current and best streak plus the number of active days.
pub fn streak_summary<Tz: TimeZone>(logs: &[SessionLog], now: &DateTime<Tz>) -> StreakSummary {
    let days = study_days(logs, &now.timezone());
    if days.is_empty() {
        return StreakSummary::default();
    }

    let mut best = 1u32;
    let mut run = 1u32;
    let ordered: Vec<&NaiveDate> = days.iter().collect();
    for pair in ordered.windows(2) {
        if pair[0].succ_opt().as_ref() == Some(pair[1]) {
            run += 1;
            best = best.max(run);
        } else {
            run = 1;
        }
    }

    StreakSummary {
        current: current_from_days(&days, now.date_naive()),
        best,
        active_days: days.len() as u32,
    }
}
