use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod app;

#[derive(Parser)]
#[command(name = "infinity", version, about = "Infinity Timer CLI")]
struct Cli {
    /// Act as this user instead of the one in the config file
    #[arg(long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in as a user (remembered in the config file)
    Login {
        /// User email
        email: String,
    },
    /// Forget the signed-in user
    Logout,
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Session log
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Run a focus timer in this terminal
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Study statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Show your Focus Energy profile
    Energy,
    /// List achievements
    Achievements {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Level, XP, streak and goal at a glance
    Profile,
    /// Set the daily study goal in hours
    Goal {
        hours: f64,
    },
    /// Show or change alert sound settings
    Sound(commands::sound::SoundArgs),
    /// Ask the AI study coach
    Ask {
        /// Your question
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// Print an inspiring quote
    Quote,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Assistant API key management
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let user = cli.user.as_deref();
    let result = match cli.command {
        Commands::Login { email } => commands::account::login(&email),
        Commands::Logout => commands::account::logout(),
        Commands::Task { action } => commands::task::run(user, action),
        Commands::Session { action } => commands::session::run(user, action),
        Commands::Timer { action } => commands::timer::run(user, action),
        Commands::Stats { action } => commands::stats::run(user, action),
        Commands::Energy => commands::profile::energy(user),
        Commands::Achievements { json } => commands::profile::achievements(user, json),
        Commands::Profile => commands::profile::profile(user),
        Commands::Goal { hours } => commands::profile::goal(user, hours),
        Commands::Sound(args) => commands::sound::run(user, args),
        Commands::Ask { message } => commands::assistant::ask(user, &message.join(" ")),
        Commands::Quote => commands::assistant::quote(),
        Commands::Config { action } => commands::config::run(action),
        Commands::Auth { action } => commands::auth::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
