use chrono::Local;
use clap::Subcommand;
use infinity_core::timer::CompletedSession;
use infinity_core::SessionType;

use crate::app;

#[derive(Subcommand)]
pub enum SessionAction {
    /// Record a session you studied away from the timer
    Log {
        /// Length in minutes
        minutes: u64,
        /// Subject (default: General)
        #[arg(long, default_value = "General")]
        subject: String,
        /// Record as an adaptive session instead of a pomodoro
        #[arg(long)]
        adaptive: bool,
    },
    /// Print the session log as JSON
    List {
        /// Only the most recent N sessions
        #[arg(long)]
        last: Option<usize>,
    },
}

pub fn run(user: Option<&str>, action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = app::open(user)?;

    match action {
        SessionAction::Log {
            minutes,
            subject,
            adaptive,
        } => {
            let session_type = if adaptive {
                SessionType::Adaptive
            } else {
                SessionType::Pomodoro
            };
            let session = CompletedSession {
                duration_secs: minutes * 60,
                subject,
                session_type,
            };
            app.record_session(session, &Local::now())?;
            println!("Session logged: {minutes} min");
        }
        SessionAction::List { last } => {
            let logs = app.logs();
            let logs = match last {
                Some(n) => infinity_core::session::recent(logs, n),
                None => logs,
            };
            println!("{}", serde_json::to_string_pretty(logs)?);
        }
    }

    app::close(app)
}
