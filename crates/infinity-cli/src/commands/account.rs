use infinity_core::storage::Config;
use infinity_core::{AppState, SqliteStore};

use crate::app::TerminalSink;

pub fn login(email: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load()?;
    let mut app = AppState::login(SqliteStore::open()?, email, TerminalSink)?;
    let first_visit = !app.is_onboarded();
    config.set("user.email", app.email())?;
    config.save()?;
    println!("signed in as {}", app.email());

    app.complete_onboarding(config.defaults.daily_goal_hours)?;
    if first_visit {
        println!(
            "welcome! daily goal set to {} h; change it with `infinity goal <hours>`",
            config.defaults.daily_goal_hours
        );
    }
    app.logout()?;
    Ok(())
}

pub fn logout() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load()?;
    config.set("user.email", "")?;
    config.save()?;
    println!("signed out");
    Ok(())
}
