//! Focus Energy classification.
//!
//! A user's Focus Energy is a label for their observed study pattern. It is
//! always derived from the session log and never stored.

mod profile;

pub use profile::FocusEnergyProfile;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::session::SessionLog;

/// Sessions needed before the log says anything about the user.
pub const MIN_SESSIONS: usize = 5;
/// Sessions strictly longer than this count as long (45 minutes).
pub const LONG_SESSION_SECS: u64 = 2700;
const LONG_SESSION_RATIO: f64 = 0.6;
const SUBJECT_DIVERSITY_RATIO: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FocusEnergy {
    /// Quick and adaptable; hops between many subjects.
    Kitsune,
    /// Deep and intense; long single-subject sessions.
    Tora,
    /// Steady and foundational; regular sessions on few subjects.
    Kuma,
    /// Not enough data yet, or a mix.
    Hybrid,
}

impl FocusEnergy {
    pub const ALL: [FocusEnergy; 4] = [
        FocusEnergy::Kitsune,
        FocusEnergy::Tora,
        FocusEnergy::Kuma,
        FocusEnergy::Hybrid,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FocusEnergy::Kitsune => "Kitsune",
            FocusEnergy::Tora => "Tora",
            FocusEnergy::Kuma => "Kuma",
            FocusEnergy::Hybrid => "Hybrid",
        }
    }

    pub fn profile(&self) -> &'static FocusEnergyProfile {
        profile::profile_for(*self)
    }
}

impl std::fmt::Display for FocusEnergy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify the user from their session history.
///
/// The long-session check runs first, so a user who is both diverse and
/// long-focused is Tora.
pub fn classify(logs: &[SessionLog]) -> FocusEnergy {
    if logs.len() < MIN_SESSIONS {
        return FocusEnergy::Hybrid;
    }

    let total = logs.len() as f64;
    let long = logs.iter().filter(|l| l.duration > LONG_SESSION_SECS).count() as f64;
    let subjects: HashSet<&str> = logs.iter().map(|l| l.subject.as_str()).collect();

    if long / total > LONG_SESSION_RATIO {
        FocusEnergy::Tora
    } else if subjects.len() as f64 / total > SUBJECT_DIVERSITY_RATIO {
        FocusEnergy::Kitsune
    } else {
        FocusEnergy::Kuma
    }
}
