//! Achievement catalog and unlock evaluation.
//!
//! Unlocking is one-way: an achievement that is unlocked is skipped by
//! [`evaluate`] and never goes back to locked, even if the metric that
//! earned it later drops (a broken streak, a reopened task).

use serde::{Deserialize, Serialize};

use crate::progression::UserStats;
use crate::session::{self, SessionLog};
use crate::storage::lenient;
use crate::task::TaskBoard;

/// Which metric an achievement's threshold is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    /// Completed tasks.
    Tasks,
    /// Total study time in hours.
    StudyTime,
    /// Current streak in days.
    Streak,
    Level,
    /// Longest single session in minutes.
    SessionLength,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub unlocked: bool,
    #[serde(rename = "type")]
    pub kind: AchievementKind,
    #[serde(rename = "value", deserialize_with = "lenient::number_f64")]
    pub threshold: f64,
}

impl Achievement {
    fn seed(
        id: &str,
        name: &str,
        description: &str,
        icon: &str,
        kind: AchievementKind,
        threshold: f64,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            unlocked: false,
            kind,
            threshold,
        }
    }

    /// Whether `metrics` meet this achievement's threshold.
    pub fn is_met(&self, metrics: &Metrics<'_>) -> bool {
        match self.kind {
            AchievementKind::Tasks => metrics.total_tasks_completed as f64 >= self.threshold,
            AchievementKind::StudyTime => metrics.total_study_hours >= self.threshold,
            AchievementKind::Streak => metrics.current_streak as f64 >= self.threshold,
            AchievementKind::Level => metrics.current_level as f64 >= self.threshold,
            AchievementKind::SessionLength => {
                let needed = self.threshold * 60.0;
                metrics.session_logs.iter().any(|l| l.duration as f64 >= needed)
            }
        }
    }
}

/// The fixed catalog every user starts with, all locked.
pub fn default_catalog() -> Vec<Achievement> {
    use AchievementKind::*;
    vec![
        Achievement::seed("task_1", "Task Taker", "Complete your first task.", "✅", Tasks, 1.0),
        Achievement::seed("task_10", "Task Master", "Complete 10 tasks.", "🔥", Tasks, 10.0),
        Achievement::seed("task_50", "Task Legend", "Complete 50 tasks.", "👑", Tasks, 50.0),
        Achievement::seed("study_1", "First Focus", "Log 1 hour of study time.", "⏱️", StudyTime, 1.0),
        Achievement::seed("study_10", "Dedicated Learner", "Log 10 hours of study time.", "📚", StudyTime, 10.0),
        Achievement::seed("study_50", "Academic Weapon", "Log 50 hours of study time.", "🧠", StudyTime, 50.0),
        Achievement::seed("streak_3", "Getting Started", "Maintain a 3-day streak.", "🌱", Streak, 3.0),
        Achievement::seed("streak_7", "Weekly Warrior", "Maintain a 7-day streak.", "📅", Streak, 7.0),
        Achievement::seed("streak_30", "Habitual Hero", "Maintain a 30-day streak.", "🗓️", Streak, 30.0),
        Achievement::seed("level_5", "Leveling Up", "Reach Level 5.", "⭐", Level, 5.0),
        Achievement::seed("level_10", "Power Player", "Reach Level 10.", "🌟", Level, 10.0),
        Achievement::seed(
            "session_60",
            "Deep Diver",
            "Complete a single session of 60 minutes.",
            "🌊",
            SessionLength,
            60.0,
        ),
    ]
}

/// Bring a stored catalog up to date with [`default_catalog`].
///
/// Entries the stored catalog lacks are appended locked. Stored entries,
/// including their unlock state, are kept as they are.
pub fn merge_catalog(stored: Vec<Achievement>) -> Vec<Achievement> {
    let mut merged = stored;
    for seed in default_catalog() {
        if !merged.iter().any(|a| a.id == seed.id) {
            merged.push(seed);
        }
    }
    merged
}

/// Aggregates the unlock rules look at.
#[derive(Debug, Clone, Copy)]
pub struct Metrics<'a> {
    pub total_tasks_completed: usize,
    pub total_study_hours: f64,
    pub current_streak: u32,
    pub current_level: u64,
    pub session_logs: &'a [SessionLog],
}

impl<'a> Metrics<'a> {
    /// Derive metrics from the user's collections. The streak is read from
    /// `stats`, so refresh it first.
    pub fn collect(tasks: &TaskBoard, logs: &'a [SessionLog], stats: &UserStats) -> Self {
        Self {
            total_tasks_completed: tasks.completed_count(),
            total_study_hours: session::total_seconds(logs) as f64 / 3600.0,
            current_streak: stats.study_streak,
            current_level: stats.level,
            session_logs: logs,
        }
    }
}

/// Unlock every locked achievement whose threshold is met.
///
/// Returns the achievements unlocked by this call, in catalog order.
pub fn evaluate(catalog: &mut [Achievement], metrics: &Metrics<'_>) -> Vec<Achievement> {
    let mut newly = Vec::new();
    for achievement in catalog.iter_mut().filter(|a| !a.unlocked) {
        if achievement.is_met(metrics) {
            achievement.unlocked = true;
            tracing::info!(id = %achievement.id, "achievement unlocked");
            newly.push(achievement.clone());
        }
    }
    newly
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionType;
    use chrono::Utc;

    fn metrics(logs: &[SessionLog]) -> Metrics<'_> {
        Metrics {
            total_tasks_completed: 0,
            total_study_hours: 0.0,
            current_streak: 0,
            current_level: 1,
            session_logs: logs,
        }
    }

    fn ids(list: &[Achievement]) -> Vec<&str> {
        list.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn catalog_starts_locked() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 12);
        assert!(catalog.iter().all(|a| !a.unlocked));
    }

    #[test]
    fn unlocks_crossed_thresholds_only() {
        let mut catalog = default_catalog();
        let m = Metrics {
            total_tasks_completed: 10,
            total_study_hours: 1.5,
            current_streak: 3,
            current_level: 5,
            ..metrics(&[])
        };
        let newly = evaluate(&mut catalog, &m);
        assert_eq!(
            ids(&newly),
            vec!["task_1", "task_10", "study_1", "streak_3", "level_5"]
        );
        assert_eq!(catalog.iter().filter(|a| a.unlocked).count(), 5);
    }

    #[test]
    fn unlock_is_monotonic() {
        let mut catalog = default_catalog();
        let m = Metrics {
            current_streak: 7,
            ..metrics(&[])
        };
        assert_eq!(evaluate(&mut catalog, &m).len(), 2);

        // Same metrics: nothing new.
        assert!(evaluate(&mut catalog, &m).is_empty());

        // Streak broken: still unlocked.
        let broken = metrics(&[]);
        assert!(evaluate(&mut catalog, &broken).is_empty());
        assert!(catalog.iter().find(|a| a.id == "streak_7").unwrap().unlocked);
    }

    #[test]
    fn session_length_uses_minutes() {
        let now = Utc::now();
        let short = [SessionLog::new(now, 3599, "A", SessionType::Adaptive)];
        let long = [SessionLog::new(now, 3600, "A", SessionType::Adaptive)];

        let mut catalog = default_catalog();
        assert!(evaluate(&mut catalog, &metrics(&short)).is_empty());
        assert_eq!(ids(&evaluate(&mut catalog, &metrics(&long))), vec!["session_60"]);
    }

    #[test]
    fn stored_threshold_may_be_a_string() {
        let json = r#"[{"id":"task_1","name":"Task Taker","description":"","icon":"","unlocked":true,"type":"tasks","value":"1"}]"#;
        let catalog: Vec<Achievement> = serde_json::from_str(json).unwrap();
        assert_eq!(catalog[0].threshold, 1.0);
        assert!(catalog[0].unlocked);
    }

    #[test]
    fn merge_keeps_stored_state_and_adds_missing() {
        let mut stored = default_catalog();
        stored.truncate(2);
        stored[0].unlocked = true;
        let merged = merge_catalog(stored);
        assert_eq!(merged.len(), 12);
        assert!(merged[0].unlocked);
        assert!(!merged[11].unlocked);
    }

    #[test]
    fn metrics_from_collections() {
        let now = Utc::now();
        let logs = vec![
            SessionLog::new(now, 3600, "A", SessionType::Pomodoro),
            SessionLog::new(now, 1800, "B", SessionType::Pomodoro),
        ];
        let mut board = TaskBoard::default();
        let id = board.add("x", "", false, false).unwrap().id.clone();
        board.toggle_complete(&id, now);
        let stats = UserStats {
            study_streak: 2,
            ..UserStats::default()
        };

        let m = Metrics::collect(&board, &logs, &stats);
        assert_eq!(m.total_tasks_completed, 1);
        assert_eq!(m.total_study_hours, 1.5);
        assert_eq!(m.current_streak, 2);
        assert_eq!(m.current_level, 1);
    }
}
