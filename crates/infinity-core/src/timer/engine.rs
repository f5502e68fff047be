//! Focus timer.
//!
//! The timer has no thread of its own. While running, the caller invokes
//! `tick()` once per second.
//!
//! ```text
//! Pomodoro:  Focus --(reaches 0, session logged)--> Break --(reaches 0)--> Focus ...
//! Adaptive:  counts up until stop(); stop logs the session and suggests a break
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::session::SessionType;
use crate::task::DEFAULT_SUBJECT;

pub const DEFAULT_FOCUS_SECS: u64 = 25 * 60;
pub const DEFAULT_BREAK_SECS: u64 = 5 * 60;
const FOCUS_MINUTES: std::ops::RangeInclusive<u64> = 5..=180;
const BREAK_MINUTES: std::ops::RangeInclusive<u64> = 1..=60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    Pomodoro,
    Adaptive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Focus,
    Break,
}

/// Break length relative to an adaptive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakRatio {
    /// One minute of break per three of work.
    OneToThree,
    /// One minute of break per four of work.
    OneToFour,
}

impl BreakRatio {
    pub fn break_for(&self, worked_secs: u64) -> u64 {
        match self {
            BreakRatio::OneToThree => worked_secs / 3,
            BreakRatio::OneToFour => worked_secs / 4,
        }
    }
}

/// A finished focus block, ready to become a session log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedSession {
    pub duration_secs: u64,
    pub subject: String,
    pub session_type: SessionType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// A pomodoro focus phase ran out; the break has started.
    FocusCompleted(CompletedSession),
    /// A pomodoro break ran out; a fresh focus phase is loaded.
    BreakCompleted,
    /// An adaptive session was stopped.
    AdaptiveStopped {
        session: CompletedSession,
        suggested_break_secs: u64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusTimer {
    mode: TimerMode,
    state: TimerState,
    phase: Phase,
    focus_secs: u64,
    break_secs: u64,
    /// Pomodoro countdown.
    remaining_secs: u64,
    /// Adaptive count-up.
    elapsed_secs: u64,
    break_ratio: BreakRatio,
    subject: String,
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new(TimerMode::Pomodoro)
    }
}

impl FocusTimer {
    pub fn new(mode: TimerMode) -> Self {
        Self {
            mode,
            state: TimerState::Idle,
            phase: Phase::Focus,
            focus_secs: DEFAULT_FOCUS_SECS,
            break_secs: DEFAULT_BREAK_SECS,
            remaining_secs: DEFAULT_FOCUS_SECS,
            elapsed_secs: 0,
            break_ratio: BreakRatio::OneToFour,
            subject: DEFAULT_SUBJECT.to_string(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn focus_secs(&self) -> u64 {
        self.focus_secs
    }

    pub fn break_secs(&self) -> u64 {
        self.break_secs
    }

    /// Seconds to show: remaining time in pomodoro, elapsed time in adaptive.
    pub fn display_secs(&self) -> u64 {
        match self.mode {
            TimerMode::Pomodoro => self.remaining_secs,
            TimerMode::Adaptive => self.elapsed_secs,
        }
    }

    /// `MM:SS` form of [`display_secs`](Self::display_secs).
    pub fn display(&self) -> String {
        let secs = self.display_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    // ── Settings ─────────────────────────────────────────────────────

    fn ensure_idle(&self) -> Result<(), ValidationError> {
        if self.state == TimerState::Running {
            return Err(ValidationError::InvalidState(
                "stop the timer before changing its settings".into(),
            ));
        }
        Ok(())
    }

    /// Switch mode. Resets the timer.
    pub fn set_mode(&mut self, mode: TimerMode) -> Result<(), ValidationError> {
        self.ensure_idle()?;
        self.mode = mode;
        self.reset();
        Ok(())
    }

    /// Focus length in minutes: 5 to 180 in steps of 5. Resets the timer.
    pub fn set_focus_minutes(&mut self, minutes: u64) -> Result<(), ValidationError> {
        self.ensure_idle()?;
        if !FOCUS_MINUTES.contains(&minutes) || minutes % 5 != 0 {
            return Err(ValidationError::InvalidValue {
                field: "focus".into(),
                message: format!("{minutes} min is not a multiple of 5 between 5 and 180"),
            });
        }
        self.focus_secs = minutes * 60;
        self.reset();
        Ok(())
    }

    /// Break length in minutes: 1 to 60. Resets the timer.
    pub fn set_break_minutes(&mut self, minutes: u64) -> Result<(), ValidationError> {
        self.ensure_idle()?;
        if !BREAK_MINUTES.contains(&minutes) {
            return Err(ValidationError::InvalidValue {
                field: "break".into(),
                message: format!("{minutes} min is outside 1..=60"),
            });
        }
        self.break_secs = minutes * 60;
        self.reset();
        Ok(())
    }

    pub fn set_break_ratio(&mut self, ratio: BreakRatio) {
        self.break_ratio = ratio;
    }

    pub fn set_subject(&mut self, subject: &str) {
        let subject = subject.trim();
        self.subject = if subject.is_empty() {
            DEFAULT_SUBJECT.to_string()
        } else {
            subject.to_string()
        };
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) {
        self.state = TimerState::Running;
    }

    /// Stop the timer. In adaptive mode this ends the session.
    pub fn stop(&mut self) -> Option<TimerEvent> {
        self.state = TimerState::Idle;
        if self.mode != TimerMode::Adaptive || self.elapsed_secs == 0 {
            return None;
        }
        let worked = std::mem::take(&mut self.elapsed_secs);
        Some(TimerEvent::AdaptiveStopped {
            session: self.completed(worked, SessionType::Adaptive),
            suggested_break_secs: self.break_ratio.break_for(worked),
        })
    }

    /// Back to a fresh, idle focus phase.
    pub fn reset(&mut self) {
        self.state = TimerState::Idle;
        self.phase = Phase::Focus;
        self.remaining_secs = self.focus_secs;
        self.elapsed_secs = 0;
    }

    /// Advance one second. No-op while idle.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if self.state != TimerState::Running {
            return None;
        }
        match self.mode {
            TimerMode::Adaptive => {
                self.elapsed_secs += 1;
                None
            }
            TimerMode::Pomodoro => {
                self.remaining_secs = self.remaining_secs.saturating_sub(1);
                if self.remaining_secs > 0 {
                    return None;
                }
                match self.phase {
                    Phase::Focus => {
                        self.phase = Phase::Break;
                        self.remaining_secs = self.break_secs;
                        Some(TimerEvent::FocusCompleted(
                            self.completed(self.focus_secs, SessionType::Pomodoro),
                        ))
                    }
                    Phase::Break => {
                        self.phase = Phase::Focus;
                        self.remaining_secs = self.focus_secs;
                        Some(TimerEvent::BreakCompleted)
                    }
                }
            }
        }
    }

    fn completed(&self, duration_secs: u64, session_type: SessionType) -> CompletedSession {
        CompletedSession {
            duration_secs,
            subject: self.subject.clone(),
            session_type,
        }
    }
}
