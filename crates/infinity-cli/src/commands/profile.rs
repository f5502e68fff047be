use chrono::Local;
use infinity_core::progression::{level_progress, XP_PER_LEVEL};

use crate::app;

pub fn energy(user: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let app = app::open(user)?;
    let profile = app.focus_energy().profile();
    println!("{}", serde_json::to_string_pretty(profile)?);
    app::close(app)
}

pub fn achievements(user: Option<&str>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let app = app::open(user)?;
    if json {
        println!("{}", serde_json::to_string_pretty(app.achievements())?);
    } else {
        let unlocked = app.achievements().iter().filter(|a| a.unlocked).count();
        println!("{unlocked}/{} unlocked", app.achievements().len());
        for a in app.achievements() {
            let mark = if a.unlocked { "x" } else { " " };
            println!("[{mark}] {} {} - {}", a.icon, a.name, a.description);
        }
    }
    app::close(app)
}

pub fn profile(user: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = app::open(user)?;
    app.refresh(&Local::now());
    let stats = app.stats();
    println!("User:        {}", app.email());
    println!("Level:       {}", stats.level);
    println!(
        "XP:          {} ({}/{} to next level)",
        stats.xp,
        level_progress(stats.xp),
        XP_PER_LEVEL
    );
    println!("Streak:      {} days", stats.study_streak);
    println!("Daily goal:  {:.1} h", stats.daily_goal_secs as f64 / 3600.0);
    println!("Energy:      {}", app.focus_energy());
    app::close(app)
}

pub fn goal(user: Option<&str>, hours: f64) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = app::open(user)?;
    if !app.set_daily_goal(hours)? {
        return Err(format!("invalid goal: {hours} h").into());
    }
    println!("Daily goal set to {hours} h");
    app::close(app)
}
