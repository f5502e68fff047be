//! Integration tests for a full user session against real stores.

use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use infinity_core::storage::DocumentKind;
use infinity_core::timer::CompletedSession;
use infinity_core::{
    AppState, Assistant, AssistantError, ChatRole, FocusEnergy, FocusTimer, KeyValueStore,
    MemoryStore, NotificationCenter, SessionType, SqliteStore, TimerEvent, TimerMode,
};
use tempfile::TempDir;

const EMAIL: &str = "learner@example.com";

fn evening() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(-5 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 9, 2, 21, 30, 0)
        .unwrap()
}

fn session(minutes: u64, subject: &str) -> CompletedSession {
    CompletedSession {
        duration_secs: minutes * 60,
        subject: subject.into(),
        session_type: SessionType::Pomodoro,
    }
}

/// Replies with the prompt it was given, so tests can inspect it.
struct Echo;

impl Assistant for Echo {
    async fn complete(&self, prompt: &str) -> Result<String, AssistantError> {
        Ok(prompt.to_string())
    }
}

struct Down;

impl Assistant for Down {
    async fn complete(&self, _prompt: &str) -> Result<String, AssistantError> {
        Err(AssistantError::MissingApiKey)
    }
}

#[test]
fn test_week_of_study() {
    let mut app = AppState::login(MemoryStore::new(), EMAIL, NotificationCenter::new()).unwrap();
    let subjects = ["Math", "Math", "Physics", "Math", "Math", "Physics", "Math"];

    for (days_ago, subject) in (0..7).rev().zip(subjects) {
        let at = evening() - Duration::days(days_ago);
        app.record_session(session(50, subject), &at).unwrap();
    }

    let now = evening();
    assert_eq!(app.stats().study_streak, 7);
    assert_eq!(app.stats().xp, 7 * 500);
    assert_eq!(app.stats().level, 4);
    assert_eq!(app.focus_energy(), FocusEnergy::Tora);

    let week = app.last_seven_days(&now);
    assert_eq!(week.len(), 7);
    assert!(week.iter().all(|d| d.study_hours == 0.83));

    let breakdown = app.subject_breakdown();
    assert_eq!(breakdown[0].subject, "Math");
    assert_eq!(breakdown[1].subject, "Physics");

    let unlocked: Vec<_> = app
        .achievements()
        .iter()
        .filter(|a| a.unlocked)
        .map(|a| a.id.as_str())
        .collect();
    for id in ["study_1", "streak_3", "streak_7"] {
        assert!(unlocked.contains(&id), "{id} should be unlocked");
    }
    assert!(!unlocked.contains(&"level_5"));

    let unlock_notes = app
        .sink()
        .items()
        .iter()
        .filter(|n| n.title == "Achievement Unlocked!")
        .count();
    assert_eq!(unlock_notes, unlocked.len());
}

#[test]
fn test_session_near_midnight_counts_for_its_local_day() {
    let mut app = AppState::login(MemoryStore::new(), EMAIL, NotificationCenter::new()).unwrap();
    let tz = FixedOffset::east_opt(-5 * 3600).unwrap();
    let late = tz.with_ymd_and_hms(2024, 9, 1, 23, 59, 0).unwrap();
    let early = tz.with_ymd_and_hms(2024, 9, 2, 0, 1, 0).unwrap();

    app.record_session(session(20, "Art"), &late).unwrap();
    app.record_session(session(30, "Art"), &early).unwrap();

    let today = app.daily_summary(&evening());
    assert_eq!(today.study_time_today_secs, 30 * 60);
    assert_eq!(app.stats().study_streak, 2);
}

#[test]
fn test_timer_output_feeds_the_log() {
    let mut app = AppState::login(MemoryStore::new(), EMAIL, NotificationCenter::new()).unwrap();
    let mut timer = FocusTimer::new(TimerMode::Adaptive);
    timer.set_subject("Chemistry");
    timer.start();
    for _ in 0..(61 * 60) {
        timer.tick();
    }

    let Some(TimerEvent::AdaptiveStopped { session, .. }) = timer.stop() else {
        panic!("adaptive stop should produce a session");
    };
    app.record_session(session, &evening()).unwrap();

    let log = &app.logs()[0];
    assert_eq!(log.subject, "Chemistry");
    assert_eq!(log.session_type, SessionType::Adaptive);
    assert!(app
        .achievements()
        .iter()
        .any(|a| a.id == "session_60" && a.unlocked));
}

#[test]
fn test_sqlite_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("infinity.db");

    {
        let store = SqliteStore::open_at(&path).unwrap();
        let mut app = AppState::login(store, EMAIL, NotificationCenter::new()).unwrap();
        app.add_task("Outline essay", "English", true, false).unwrap();
        app.record_session(session(25, "English"), &evening()).unwrap();
        app.logout().unwrap();
    }

    let store = SqliteStore::open_at(&path).unwrap();
    let raw = store.get(&DocumentKind::Logs.key(EMAIL)).unwrap().unwrap();
    assert!(raw.contains("\"date\""));
    assert!(raw.contains("\"sessionType\":\"pomodoro\""));

    let app = AppState::login(store, EMAIL, NotificationCenter::new()).unwrap();
    assert_eq!(app.tasks().len(), 1);
    assert_eq!(app.logs().len(), 1);
    assert_eq!(app.stats().xp, 250);
}

#[test]
fn test_legacy_documents_load_leniently() {
    let mut store = MemoryStore::new();
    store
        .set(
            &DocumentKind::Stats.key(EMAIL),
            r#"{"level":"9","xp":"1500","studyStreak":"2","dailyGoal":"7200"}"#,
        )
        .unwrap();
    store
        .set(
            &DocumentKind::Logs.key(EMAIL),
            r#"[{"date":"2024-09-01T10:00:00.000Z","duration":"1500","subject":"Math","sessionType":"pomodoro"}]"#,
        )
        .unwrap();
    store
        .set(
            &DocumentKind::Achievements.key(EMAIL),
            r#"[{"id":"task_1","name":"Task Taker","description":"Complete your first task.","icon":"x","unlocked":true,"type":"tasks","value":"1"}]"#,
        )
        .unwrap();

    let app = AppState::login(store, EMAIL, NotificationCenter::new()).unwrap();
    assert_eq!(app.stats().xp, 1500);
    assert_eq!(app.stats().level, 2);
    assert_eq!(app.stats().daily_goal_secs, 7200);
    assert_eq!(app.logs()[0].duration, 1500);
    assert_eq!(app.achievements().len(), 12);
    assert!(app.achievements()[0].unlocked);
}

#[tokio::test]
async fn test_chat_keeps_history_and_falls_back() {
    let mut app = AppState::login(MemoryStore::new(), EMAIL, NotificationCenter::new()).unwrap();
    app.add_task("Flashcards", "Spanish", false, true).unwrap();

    let reply = app.chat(&Echo, "What next?").await;
    assert!(reply.contains("- Flashcards (Spanish)"));
    assert!(reply.ends_with("USER QUESTION: What next?"));

    let reply = app.chat(&Down, "Hello?").await;
    assert_eq!(reply, infinity_core::assistant::FALLBACK_REPLY);

    let roles: Vec<_> = app.chat_history().iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        [ChatRole::User, ChatRole::Model, ChatRole::User, ChatRole::Model]
    );
}
