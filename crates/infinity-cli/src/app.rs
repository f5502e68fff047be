//! Opening the signed-in user's state from the CLI.

use infinity_core::storage::Config;
use infinity_core::{AppState, NotificationKind, NotificationSink, SqliteStore};

/// Prints notifications to stderr as they happen, keeping stdout for data.
pub struct TerminalSink;

impl NotificationSink for TerminalSink {
    fn notify(&mut self, title: &str, message: &str, kind: NotificationKind) {
        let marker = match kind {
            NotificationKind::Achievement => "*",
            NotificationKind::Milestone => "^",
            NotificationKind::Reminder => "!",
        };
        eprintln!("{marker} {title} {message}");
    }
}

pub type App = AppState<SqliteStore, TerminalSink>;

/// `--user` wins over the email stored by `infinity login`.
pub fn resolve_email(
    user: Option<&str>,
    config: &Config,
) -> Result<String, Box<dyn std::error::Error>> {
    user.map(str::trim)
        .filter(|u| !u.is_empty())
        .or_else(|| config.user.email())
        .map(str::to_string)
        .ok_or_else(|| "not signed in. Run `infinity login <email>` or pass --user".into())
}

pub fn open(user: Option<&str>) -> Result<App, Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let email = resolve_email(user, &config)?;
    let store = SqliteStore::open()?;
    let mut app = AppState::login(store, &email, TerminalSink)?;
    app.complete_onboarding(config.defaults.daily_goal_hours)?;
    Ok(app)
}

/// Save and drop the user's state.
pub fn close(app: App) -> Result<(), Box<dyn std::error::Error>> {
    app.logout()?;
    Ok(())
}
