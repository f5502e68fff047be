use chrono::Local;
use clap::Subcommand;
use serde_json::json;

use crate::app;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Today's study time, tasks done and goal progress
    Today,
    /// Current and best study streak
    Streak,
    /// The last seven days
    Week,
    /// Study hours per subject
    Subjects,
}

pub fn run(user: Option<&str>, action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let app = app::open(user)?;
    let now = Local::now();

    match action {
        StatsAction::Today => {
            let summary = app.daily_summary(&now);
            let goal = app.stats().daily_goal_secs;
            let out = json!({
                "studyTimeTodaySecs": summary.study_time_today_secs,
                "tasksCompletedToday": summary.tasks_completed_today,
                "dailyGoalSecs": goal,
                "goalProgressPct": (summary.goal_progress_pct(goal) * 10.0).round() / 10.0,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        StatsAction::Streak => {
            println!("{}", serde_json::to_string_pretty(&app.streak(&now))?);
        }
        StatsAction::Week => {
            println!("{}", serde_json::to_string_pretty(&app.last_seven_days(&now))?);
        }
        StatsAction::Subjects => {
            println!("{}", serde_json::to_string_pretty(&app.subject_breakdown())?);
        }
    }

    app::close(app)
}
