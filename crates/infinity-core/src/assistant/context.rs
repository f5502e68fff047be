//! Prompt assembly for the coaching assistant.

use indoc::formatdoc;

use crate::energy::FocusEnergy;
use crate::progression::{level_progress, UserStats, XP_PER_LEVEL};
use crate::session::{self, SessionLog};
use crate::task::TaskBoard;

/// Sessions quoted back to the assistant.
const RECENT_SESSIONS: usize = 3;

/// Snapshot of the user's state that accompanies every question.
#[derive(Debug, Clone, Copy)]
pub struct CoachContext<'a> {
    pub energy: FocusEnergy,
    pub stats: &'a UserStats,
    pub tasks: &'a TaskBoard,
    pub logs: &'a [SessionLog],
}

fn or_none(lines: Vec<String>) -> String {
    if lines.is_empty() {
        "None".to_string()
    } else {
        lines.join("\n")
    }
}

impl CoachContext<'_> {
    pub fn render(&self) -> String {
        let profile = self.energy.profile();
        let tasks = or_none(
            self.tasks
                .incomplete()
                .map(|t| format!("- {} ({})", t.text, t.subject))
                .collect(),
        );
        let sessions = or_none(
            session::recent(self.logs, RECENT_SESSIONS)
                .iter()
                .map(|s| format!("- {} mins on {}", (s.duration + 30) / 60, s.subject))
                .collect(),
        );

        formatdoc! {"
            SYSTEM CONTEXT: You are a helpful and motivating productivity coach called 'Infinity AI'.
            The user's data is as follows:
            - Focus Energy Profile: {name} ({traits})
            - Current Level: {level} (XP: {progress}/{per_level})
            - Study Streak: {streak} days
            - Incomplete Tasks: {tasks}
            - Last 3 Sessions: {sessions}

            INSTRUCTIONS: Your name is Infinity AI. Use this data to provide personalized, concise, and actionable advice. Use markdown for formatting. Do not repeat the context back to the user.",
            name = self.energy.name(),
            traits = profile.core_traits,
            level = self.stats.level,
            progress = level_progress(self.stats.xp),
            per_level = XP_PER_LEVEL,
            streak = self.stats.study_streak,
        }
    }

    /// Full prompt for one user question.
    pub fn prompt(&self, question: &str) -> String {
        format!("{}\n\nUSER QUESTION: {question}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionType;
    use chrono::{TimeZone, Utc};

    #[test]
    fn empty_state_says_none() {
        let stats = UserStats::default();
        let tasks = TaskBoard::default();
        let ctx = CoachContext {
            energy: FocusEnergy::Hybrid,
            stats: &stats,
            tasks: &tasks,
            logs: &[],
        };
        let text = ctx.render();
        assert!(text.contains("- Focus Energy Profile: Hybrid ("));
        assert!(text.contains("- Current Level: 1 (XP: 0/1000)"));
        assert!(text.contains("- Incomplete Tasks: None"));
        assert!(text.contains("- Last 3 Sessions: None"));
    }

    #[test]
    fn lists_open_tasks_and_last_three_sessions() {
        let mut stats = UserStats::default();
        stats.add_xp(2340);
        stats.study_streak = 4;

        let mut tasks = TaskBoard::default();
        tasks.add("Read chapter 3", "Biology", false, false).unwrap();
        let done = tasks.add("Old task", "Biology", false, false).unwrap().id.clone();
        tasks.toggle_complete(&done, Utc::now());

        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let logs: Vec<_> = [(600, "Art"), (1500, "Math"), (90, "Latin"), (2700, "Math")]
            .into_iter()
            .map(|(secs, subject)| SessionLog::new(at, secs, subject, SessionType::Pomodoro))
            .collect();

        let ctx = CoachContext {
            energy: FocusEnergy::Kuma,
            stats: &stats,
            tasks: &tasks,
            logs: &logs,
        };
        let prompt = ctx.prompt("How should I plan tomorrow?");

        assert!(prompt.contains("- Current Level: 3 (XP: 340/1000)"));
        assert!(prompt.contains("- Study Streak: 4 days"));
        assert!(prompt.contains("- Read chapter 3 (Biology)"));
        assert!(!prompt.contains("Old task"));
        assert!(!prompt.contains("on Art"));
        assert!(prompt.contains("- 25 mins on Math\n- 2 mins on Latin\n- 45 mins on Math"));
        assert!(prompt.ends_with("\n\nUSER QUESTION: How should I plan tomorrow?"));
    }
}
