//! # Infinity Timer Core Library
//!
//! This library provides the core logic of the Infinity Timer study companion:
//! focus sessions, tasks, and the statistics and game mechanics derived from
//! them. The `infinity` CLI is a thin layer over the same library.
//!
//! ## Architecture
//!
//! - **Derived stats**: pure functions of the session log and task list
//!   (streaks, daily totals, weekly history, Focus Energy)
//! - **Gamification**: XP and levels, plus an achievement catalog that is
//!   re-evaluated after every change
//! - **Timer**: a tick-driven focus timer with pomodoro and adaptive modes
//! - **Storage**: per-user JSON documents in a key-value store (SQLite or
//!   memory) and TOML-based configuration
//! - **Assistant**: an AI study coach behind a small completion trait
//!
//! ## Key Components
//!
//! - [`AppState`]: per-user state container; every mutation saves
//! - [`FocusTimer`]: timer state machine
//! - [`TaskBoard`]: tasks and the priority matrix
//! - [`Config`]: application configuration management
//! - [`Assistant`]: trait for text-completion services

pub mod achievements;
pub mod app;
pub mod assistant;
pub mod energy;
pub mod error;
pub mod events;
pub mod progression;
pub mod session;
pub mod sound;
pub mod stats;
pub mod storage;
pub mod task;
pub mod timer;

pub use achievements::{Achievement, AchievementKind};
pub use app::AppState;
pub use assistant::{Assistant, ChatMessage, ChatRole, GeminiClient};
pub use energy::{FocusEnergy, FocusEnergyProfile};
pub use error::{AssistantError, ConfigError, CoreError, Result, StorageError, ValidationError};
pub use events::{Notification, NotificationCenter, NotificationKind, NotificationSink};
pub use progression::UserStats;
pub use session::{SessionLog, SessionType};
pub use sound::{BuiltinSound, SoundSettings, SoundSettingsPatch};
pub use storage::{Config, KeyValueStore, MemoryStore, SqliteStore};
pub use task::{Quadrant, Task, TaskBoard, TaskEdit, Toggle};
pub use timer::{FocusTimer, TimerEvent, TimerMode};
