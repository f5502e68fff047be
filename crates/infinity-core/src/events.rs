use serde::{Deserialize, Serialize};

use crate::achievements::Achievement;
use crate::progression::LevelUp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Achievement,
    Milestone,
    Reminder,
}

/// A user-facing message produced by a state change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
}

/// Receives notifications as they are raised. Where they go (a toast, a
/// terminal line, a test buffer) is up to the implementation.
pub trait NotificationSink {
    fn notify(&mut self, title: &str, message: &str, kind: NotificationKind);

    fn achievement_unlocked(&mut self, achievement: &Achievement) {
        self.notify(
            "Achievement Unlocked!",
            &format!("You've earned: {}", achievement.name),
            NotificationKind::Achievement,
        );
    }

    fn level_up(&mut self, level_up: LevelUp) {
        self.notify(
            "Level Up!",
            &format!("You've reached Level {}!", level_up.to),
            NotificationKind::Milestone,
        );
    }

    fn streak_extended(&mut self, streak: u32) {
        self.notify(
            "Streak Extended!",
            &format!("You're on a {streak}-day study streak. Keep going!"),
            NotificationKind::Milestone,
        );
    }
}

/// In-memory sink holding notifications newest first.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Remove and return everything, newest first.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.items)
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }
}

impl NotificationSink for NotificationCenter {
    fn notify(&mut self, title: &str, message: &str, kind: NotificationKind) {
        self.next_id += 1;
        self.items.insert(
            0,
            Notification {
                id: self.next_id,
                title: title.to_string(),
                message: message.to_string(),
                kind,
            },
        );
    }
}
