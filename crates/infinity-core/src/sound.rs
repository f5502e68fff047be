//! Alert sound preferences.

use serde::{Deserialize, Serialize};

use crate::storage::lenient::Num;

/// Built-in alert sounds. `None` plays nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinSound {
    Chime,
    Alert,
    Beep,
    Tick,
    None,
}

impl BuiltinSound {
    pub const ALL: [BuiltinSound; 5] = [
        BuiltinSound::Chime,
        BuiltinSound::Alert,
        BuiltinSound::Beep,
        BuiltinSound::Tick,
        BuiltinSound::None,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BuiltinSound::Chime => "Chime",
            BuiltinSound::Alert => "Alert",
            BuiltinSound::Beep => "Beep",
            BuiltinSound::Tick => "Tick",
            BuiltinSound::None => "None",
        }
    }

    pub fn url(&self) -> &'static str {
        match self {
            BuiltinSound::Chime => "https://cdn.pixabay.com/audio/2022/03/15/audio_a54b3cfd29.mp3",
            BuiltinSound::Alert => "https://cdn.pixabay.com/audio/2022/11/21/audio_1e8787399a.mp3",
            BuiltinSound::Beep => "https://cdn.pixabay.com/audio/2021/08/04/audio_542a0b4a78.mp3",
            BuiltinSound::Tick => "https://cdn.pixabay.com/audio/2022/03/10/audio_57e174457a.mp3",
            BuiltinSound::None => "none",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name.trim()))
    }
}

pub const DEFAULT_VOLUME: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawSoundSettings")]
pub struct SoundSettings {
    /// 0.0 ..= 1.0
    pub volume: f64,
    pub is_muted: bool,
    /// Sound URL, or `"none"`.
    pub focus_end_sound: String,
    pub break_end_sound: String,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            volume: DEFAULT_VOLUME,
            is_muted: false,
            focus_end_sound: BuiltinSound::Chime.url().to_string(),
            break_end_sound: BuiltinSound::Alert.url().to_string(),
        }
    }
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct SoundSettingsPatch {
    pub volume: Option<f64>,
    pub is_muted: Option<bool>,
    pub focus_end_sound: Option<String>,
    pub break_end_sound: Option<String>,
}

impl SoundSettings {
    pub fn apply(&mut self, patch: SoundSettingsPatch) {
        if let Some(volume) = patch.volume {
            self.volume = clamp_volume(volume);
        }
        if let Some(muted) = patch.is_muted {
            self.is_muted = muted;
        }
        if let Some(sound) = patch.focus_end_sound {
            self.focus_end_sound = sound;
        }
        if let Some(sound) = patch.break_end_sound {
            self.break_end_sound = sound;
        }
    }

    /// Volume to actually play at.
    pub fn effective_volume(&self) -> f64 {
        if self.is_muted {
            0.0
        } else {
            self.volume
        }
    }
}

fn clamp_volume(v: f64) -> f64 {
    if v.is_finite() {
        v.clamp(0.0, 1.0)
    } else {
        DEFAULT_VOLUME
    }
}

/// Storage shape: every field optional, numbers possibly stringified.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSoundSettings {
    volume: Option<Num>,
    is_muted: Option<bool>,
    focus_end_sound: Option<String>,
    break_end_sound: Option<String>,
}

impl From<RawSoundSettings> for SoundSettings {
    fn from(raw: RawSoundSettings) -> Self {
        let defaults = SoundSettings::default();
        Self {
            volume: raw
                .volume
                .as_ref()
                .and_then(Num::as_f64)
                .map(clamp_volume)
                .unwrap_or(defaults.volume),
            is_muted: raw.is_muted.unwrap_or(defaults.is_muted),
            focus_end_sound: raw.focus_end_sound.unwrap_or(defaults.focus_end_sound),
            break_end_sound: raw.break_end_sound.unwrap_or(defaults.break_end_sound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_fills_defaults() {
        let s: SoundSettings = serde_json::from_str(r#"{"isMuted": true}"#).unwrap();
        assert!(s.is_muted);
        assert_eq!(s.volume, DEFAULT_VOLUME);
        assert_eq!(s.focus_end_sound, BuiltinSound::Chime.url());
        assert_eq!(s.break_end_sound, BuiltinSound::Alert.url());
    }

    #[test]
    fn stringified_volume_is_coerced() {
        let s: SoundSettings = serde_json::from_str(r#"{"volume": "0.8"}"#).unwrap();
        assert_eq!(s.volume, 0.8);
    }

    #[test]
    fn patch_clamps_volume() {
        let mut s = SoundSettings::default();
        s.apply(SoundSettingsPatch {
            volume: Some(3.0),
            is_muted: Some(true),
            ..Default::default()
        });
        assert_eq!(s.volume, 1.0);
        assert_eq!(s.effective_volume(), 0.0);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(BuiltinSound::from_name("beep"), Some(BuiltinSound::Beep));
        assert_eq!(BuiltinSound::from_name("none").map(|s| s.url()), Some("none"));
        assert!(BuiltinSound::from_name("gong").is_none());
    }
}
