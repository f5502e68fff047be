//! Per-user application state.
//!
//! An [`AppState`] is created by [`AppState::login`] and consumed by
//! [`AppState::logout`]. Every mutating method recomputes derived values,
//! reports notifications to the sink and saves before it returns.

use chrono::{DateTime, TimeZone, Utc};

use crate::achievements::{self, Achievement, Metrics};
use crate::assistant::{self, Assistant, ChatMessage, CoachContext};
use crate::energy::{self, FocusEnergy};
use crate::error::{StorageError, ValidationError};
use crate::events::NotificationSink;
use crate::progression::{self, LevelUp, UserStats, TASK_COMPLETION_XP};
use crate::session::SessionLog;
use crate::sound::SoundSettingsPatch;
use crate::stats::{self, DailySummary, DayPoint, StreakSummary, SubjectTime};
use crate::storage::{KeyValueStore, UserDocuments};
use crate::task::{TaskBoard, TaskEdit, Toggle};
use crate::timer::CompletedSession;

pub struct AppState<S: KeyValueStore, N: NotificationSink> {
    store: S,
    sink: N,
    email: String,
    docs: UserDocuments,
    chat: Vec<ChatMessage>,
}

impl<S: KeyValueStore, N: NotificationSink> AppState<S, N> {
    /// Load the user's documents and start a session.
    ///
    /// # Errors
    /// [`ValidationError::Empty`] for a blank email; storage errors if the
    /// store cannot be read.
    pub fn login(store: S, email: &str, sink: N) -> crate::Result<Self> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError::Empty {
                field: "email".into(),
            }
            .into());
        }
        let docs = UserDocuments::load(&store, email)?;
        tracing::info!(email, "logged in");
        Ok(Self {
            store,
            sink,
            email: email.to_string(),
            docs,
            chat: Vec::new(),
        })
    }

    /// Save and hand back the store and sink.
    ///
    /// # Errors
    /// Storage errors from the final save.
    pub fn logout(mut self) -> Result<(S, N), StorageError> {
        self.save()?;
        tracing::info!(email = %self.email, "logged out");
        Ok((self.store, self.sink))
    }

    pub fn save(&mut self) -> Result<(), StorageError> {
        self.docs.save(&mut self.store, &self.email)?;
        tracing::debug!(email = %self.email, "saved");
        Ok(())
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn tasks(&self) -> &TaskBoard {
        &self.docs.tasks
    }

    pub fn logs(&self) -> &[SessionLog] {
        &self.docs.logs
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.docs.achievements
    }

    pub fn stats(&self) -> &UserStats {
        &self.docs.stats
    }

    pub fn chat_history(&self) -> &[ChatMessage] {
        &self.chat
    }

    pub fn sink(&self) -> &N {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut N {
        &mut self.sink
    }

    pub fn is_onboarded(&self) -> bool {
        self.docs.onboarded
    }

    pub fn focus_energy(&self) -> FocusEnergy {
        energy::classify(&self.docs.logs)
    }

    pub fn daily_summary<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> DailySummary {
        stats::daily_summary(&self.docs.logs, self.docs.tasks.tasks(), now)
    }

    pub fn streak<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> StreakSummary {
        stats::streak_summary(&self.docs.logs, now)
    }

    pub fn last_seven_days<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Vec<DayPoint> {
        stats::last_seven_days(&self.docs.logs, self.docs.tasks.tasks(), now)
    }

    pub fn subject_breakdown(&self) -> Vec<SubjectTime> {
        stats::subject_breakdown(&self.docs.logs)
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Mark onboarding done, applying the first-run daily goal.
    pub fn complete_onboarding(&mut self, daily_goal_hours: f64) -> Result<(), StorageError> {
        if !self.docs.onboarded {
            self.docs.stats.set_daily_goal_hours(daily_goal_hours);
            self.docs.onboarded = true;
            self.save()?;
        }
        Ok(())
    }

    /// # Errors
    /// [`ValidationError::Empty`] for blank text.
    pub fn add_task(
        &mut self,
        text: &str,
        subject: &str,
        is_important: bool,
        is_urgent: bool,
    ) -> crate::Result<String> {
        let id = self
            .docs
            .tasks
            .add(text, subject, is_important, is_urgent)?
            .id
            .clone();
        self.save()?;
        Ok(id)
    }

    /// Returns `false` for an unknown id.
    pub fn update_task(&mut self, id: &str, edit: TaskEdit) -> crate::Result<bool> {
        let found = self.docs.tasks.update(id, edit)?;
        if found {
            self.save()?;
        }
        Ok(found)
    }

    pub fn delete_task<Tz: TimeZone>(
        &mut self,
        id: &str,
        now: &DateTime<Tz>,
    ) -> Result<bool, StorageError> {
        let found = self.docs.tasks.delete(id);
        if found {
            self.refresh(now);
            self.save()?;
        }
        Ok(found)
    }

    /// Toggle a task. Completing awards XP; reopening takes nothing back.
    pub fn toggle_task<Tz: TimeZone>(
        &mut self,
        id: &str,
        now: &DateTime<Tz>,
    ) -> Result<Option<Toggle>, StorageError> {
        let toggle = self.docs.tasks.toggle_complete(id, now.with_timezone(&Utc));
        if toggle == Some(Toggle::Completed) {
            self.award_xp(TASK_COMPLETION_XP);
        }
        if toggle.is_some() {
            self.refresh(now);
            self.save()?;
        }
        Ok(toggle)
    }

    /// Append a finished session to the log and award its XP.
    ///
    /// # Errors
    /// [`ValidationError::InvalidValue`] for a zero-length session.
    pub fn record_session<Tz: TimeZone>(
        &mut self,
        session: CompletedSession,
        now: &DateTime<Tz>,
    ) -> crate::Result<()> {
        if session.duration_secs == 0 {
            return Err(ValidationError::InvalidValue {
                field: "duration".into(),
                message: "session must last at least one second".into(),
            }
            .into());
        }
        let xp = progression::session_xp(session.duration_secs);
        self.docs.logs.push(SessionLog::new(
            now.with_timezone(&Utc),
            session.duration_secs,
            session.subject,
            session.session_type,
        ));
        self.award_xp(xp);
        self.refresh(now);
        self.save()?;
        Ok(())
    }

    /// Add XP outside the usual task and session rewards.
    pub fn add_xp<Tz: TimeZone>(
        &mut self,
        amount: u64,
        now: &DateTime<Tz>,
    ) -> Result<Option<LevelUp>, StorageError> {
        let level_up = self.award_xp(amount);
        self.refresh(now);
        self.save()?;
        Ok(level_up)
    }

    /// Returns `false` (and changes nothing) for a non-positive goal.
    pub fn set_daily_goal(&mut self, hours: f64) -> Result<bool, StorageError> {
        let changed = self.docs.stats.set_daily_goal_hours(hours);
        if changed {
            self.save()?;
        }
        Ok(changed)
    }

    pub fn update_sound(&mut self, patch: SoundSettingsPatch) -> Result<(), StorageError> {
        self.docs.stats.sound_settings.apply(patch);
        self.save()
    }

    /// Recompute the streak and unlock achievements.
    ///
    /// Called by every mutation; public so a long-lived front end can pick
    /// up a day change without a mutation.
    pub fn refresh<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) {
        let streak = stats::current_streak(&self.docs.logs, now);
        let previous = self.docs.stats.study_streak;
        self.docs.stats.study_streak = streak;
        if streak > previous {
            self.sink.streak_extended(streak);
        }
        tracing::debug!(streak, previous, "refreshed streak");

        let metrics = Metrics::collect(&self.docs.tasks, &self.docs.logs, &self.docs.stats);
        for unlocked in achievements::evaluate(&mut self.docs.achievements, &metrics) {
            self.sink.achievement_unlocked(&unlocked);
        }
    }

    fn award_xp(&mut self, amount: u64) -> Option<LevelUp> {
        let level_up = self.docs.stats.add_xp(amount);
        if let Some(up) = level_up {
            tracing::info!(from = up.from, to = up.to, "level up");
            self.sink.level_up(up);
        }
        level_up
    }

    // ── Assistant ────────────────────────────────────────────────────

    /// Ask the assistant; the exchange is kept in the chat history.
    pub async fn chat<A: Assistant>(&mut self, assistant: &A, message: &str) -> String {
        self.chat.push(ChatMessage::user(message));
        let context = CoachContext {
            energy: self.focus_energy(),
            stats: &self.docs.stats,
            tasks: &self.docs.tasks,
            logs: &self.docs.logs,
        };
        let reply = assistant::ask(assistant, &context, message).await;
        self.chat.push(ChatMessage::model(reply.clone()));
        reply
    }
}
