mod engine;

pub use engine::{
    BreakRatio, CompletedSession, FocusTimer, Phase, TimerEvent, TimerMode, TimerState,
    DEFAULT_BREAK_SECS, DEFAULT_FOCUS_SECS,
};

/// Preparation list shown before an adaptive deep-work session.
pub const DEEP_WORK_CHECKLIST: [&str; 4] = [
    "Turn off all notifications on your phone and computer.",
    "Close any unnecessary tabs or applications.",
    "Have a glass of water and a notepad nearby.",
    "Set a clear goal for what you want to accomplish.",
];
