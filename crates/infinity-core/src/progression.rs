//! Experience points and levels.
//!
//! `level == xp / 1000 + 1` holds after every mutation through
//! [`UserStats::add_xp`]. There is no cap on either value.

use serde::{Deserialize, Serialize};

use crate::sound::SoundSettings;
use crate::storage::lenient::{self, Num};

pub const XP_PER_LEVEL: u64 = 1000;
/// Awarded on every incomplete -> complete transition.
pub const TASK_COMPLETION_XP: u64 = 50;
pub const XP_PER_SESSION_MINUTE: u64 = 10;
pub const DEFAULT_DAILY_GOAL_SECS: u64 = 3600;

pub fn level_for_xp(xp: u64) -> u64 {
    xp / XP_PER_LEVEL + 1
}

/// XP earned into the current level, out of [`XP_PER_LEVEL`].
pub fn level_progress(xp: u64) -> u64 {
    xp % XP_PER_LEVEL
}

/// XP for a finished session: ten per whole minute.
pub fn session_xp(duration_secs: u64) -> u64 {
    (duration_secs / 60).saturating_mul(XP_PER_SESSION_MINUTE)
}

/// A level boundary crossed by one XP award.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub from: u64,
    pub to: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawUserStats")]
pub struct UserStats {
    pub level: u64,
    pub xp: u64,
    pub study_streak: u32,
    #[serde(rename = "dailyGoal")]
    pub daily_goal_secs: u64,
    pub sound_settings: SoundSettings,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            level: 1,
            xp: 0,
            study_streak: 0,
            daily_goal_secs: DEFAULT_DAILY_GOAL_SECS,
            sound_settings: SoundSettings::default(),
        }
    }
}

impl UserStats {
    /// Add XP and recompute the level.
    ///
    /// Returns the crossing when the level went up, so the caller can
    /// announce it.
    pub fn add_xp(&mut self, amount: u64) -> Option<LevelUp> {
        let from = self.level;
        self.xp = self.xp.saturating_add(amount);
        self.level = level_for_xp(self.xp);
        (self.level > from).then_some(LevelUp {
            from,
            to: self.level,
        })
    }

    /// Set the daily goal from hours. A zero goal is ignored.
    pub fn set_daily_goal_hours(&mut self, hours: f64) -> bool {
        let secs = (hours * 3600.0).round();
        if !secs.is_finite() || secs < 1.0 {
            return false;
        }
        self.daily_goal_secs = secs as u64;
        true
    }
}

/// Storage shape. Any field may be missing, null, or a numeric string.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawUserStats {
    level: Option<Num>,
    xp: Option<Num>,
    study_streak: Option<Num>,
    #[serde(alias = "dailyGoalSeconds")]
    daily_goal: Option<Num>,
    sound_settings: Option<SoundSettings>,
}

impl From<RawUserStats> for UserStats {
    fn from(raw: RawUserStats) -> Self {
        let defaults = UserStats::default();
        let xp = lenient::u64_or(raw.xp.as_ref(), defaults.xp);
        let daily_goal_secs = match lenient::u64_or(raw.daily_goal.as_ref(), 0) {
            0 => defaults.daily_goal_secs,
            goal => goal,
        };
        if let Some(stored) = raw.level.as_ref().and_then(Num::as_u64) {
            if stored != level_for_xp(xp) {
                tracing::debug!(stored, xp, "stored level disagrees with xp; recomputing");
            }
        }
        Self {
            level: level_for_xp(xp),
            xp,
            study_streak: lenient::u64_or(raw.study_streak.as_ref(), 0)
                .try_into()
                .unwrap_or(u32::MAX),
            daily_goal_secs,
            sound_settings: raw.sound_settings.unwrap_or_default(),
        }
    }
}
