use clap::Args;
use infinity_core::{BuiltinSound, SoundSettingsPatch};

use crate::app;

#[derive(Args)]
pub struct SoundArgs {
    /// Volume from 0.0 to 1.0
    #[arg(long)]
    volume: Option<f64>,
    /// Mute alerts
    #[arg(long, conflicts_with = "unmute")]
    mute: bool,
    /// Unmute alerts
    #[arg(long)]
    unmute: bool,
    /// Sound at the end of a focus phase: Chime, Alert, Beep, Tick, None or a URL
    #[arg(long)]
    focus_end: Option<String>,
    /// Sound at the end of a break: Chime, Alert, Beep, Tick, None or a URL
    #[arg(long)]
    break_end: Option<String>,
}

fn sound_url(value: String) -> String {
    match BuiltinSound::from_name(&value) {
        Some(builtin) => builtin.url().to_string(),
        None => value,
    }
}

pub fn run(user: Option<&str>, args: SoundArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = app::open(user)?;

    let is_muted = match (args.mute, args.unmute) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };
    let patch = SoundSettingsPatch {
        volume: args.volume,
        is_muted,
        focus_end_sound: args.focus_end.map(sound_url),
        break_end_sound: args.break_end.map(sound_url),
    };
    app.update_sound(patch)?;

    println!(
        "{}",
        serde_json::to_string_pretty(&app.stats().sound_settings)?
    );
    app::close(app)
}
