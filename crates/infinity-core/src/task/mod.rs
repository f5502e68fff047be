//! Tasks and the task board.
//!
//! A [`Task`] carries two priority flags: *leverage* (`is_important`, long
//! term value) and *consequence* (`is_urgent`, short term pressure). The
//! [`TaskBoard`] owns the list and enforces the completion invariant:
//! `completion_date` is `Some` exactly when `completed` is true.

mod matrix;

pub use matrix::{PriorityMatrix, Quadrant};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::stats::local_day;

/// Subject used when none is given.
pub const DEFAULT_SUBJECT: &str = "General";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default = "new_id")]
    pub id: String,
    pub text: String,
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default)]
    pub completed: bool,
    /// High leverage.
    #[serde(default)]
    pub is_important: bool,
    /// High consequence.
    #[serde(default)]
    pub is_urgent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<DateTime<Utc>>,
}

fn default_subject() -> String {
    DEFAULT_SUBJECT.to_string()
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl Task {
    /// Build a new incomplete task with a fresh id.
    ///
    /// # Errors
    /// Returns [`ValidationError::Empty`] if `text` is blank.
    pub fn new(
        text: &str,
        subject: &str,
        is_important: bool,
        is_urgent: bool,
    ) -> Result<Self, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::Empty {
                field: "text".into(),
            });
        }
        Ok(Self {
            id: new_id(),
            text: text.to_string(),
            subject: normalize_subject(subject),
            completed: false,
            is_important,
            is_urgent,
            completion_date: None,
        })
    }

    /// Whether the task was completed on calendar day `day` in `tz`.
    pub fn completed_on<Tz: TimeZone>(&self, day: NaiveDate, tz: &Tz) -> bool {
        self.completed
            && self
                .completion_date
                .is_some_and(|at| local_day(&at, tz) == day)
    }

    /// Restore the completion invariant on a stored task. A date without
    /// the flag is dropped; a flag without a date gets the epoch, so the
    /// task never counts toward a recent day.
    fn normalize(&mut self) {
        match (self.completed, self.completion_date) {
            (false, Some(_)) => self.completion_date = None,
            (true, None) => self.completion_date = Some(DateTime::<Utc>::UNIX_EPOCH),
            _ => {}
        }
    }

    /// Matrix cell for this task's flags.
    pub fn quadrant(&self) -> Quadrant {
        Quadrant::of(self.is_important, self.is_urgent)
    }
}

fn normalize_subject(subject: &str) -> String {
    let subject = subject.trim();
    if subject.is_empty() {
        default_subject()
    } else {
        subject.to_string()
    }
}

/// Field edits applied by [`TaskBoard::update`]. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct TaskEdit {
    pub text: Option<String>,
    pub subject: Option<String>,
    pub is_important: Option<bool>,
    pub is_urgent: Option<bool>,
}

/// Outcome of [`TaskBoard::toggle_complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// false -> true; this is the transition that earns XP.
    Completed,
    /// true -> false.
    Reopened,
}

/// Ordered task list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TaskBoard {
    tasks: Vec<Task>,
}

impl<'de> Deserialize<'de> for TaskBoard {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Task>::deserialize(deserializer).map(Self::new)
    }
}

impl TaskBoard {
    /// Build a board from stored tasks, repairing any task whose completion
    /// flag and date disagree.
    pub fn new(mut tasks: Vec<Task>) -> Self {
        for task in &mut tasks {
            task.normalize();
        }
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a new task and return a reference to it.
    ///
    /// # Errors
    /// Returns [`ValidationError::Empty`] if `text` is blank.
    pub fn add(
        &mut self,
        text: &str,
        subject: &str,
        is_important: bool,
        is_urgent: bool,
    ) -> Result<&Task, ValidationError> {
        let task = Task::new(text, subject, is_important, is_urgent)?;
        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Apply an edit. Completion state is not editable here.
    ///
    /// Returns `Ok(false)` if no task has this id.
    ///
    /// # Errors
    /// Returns [`ValidationError::Empty`] if the edit blanks the text.
    pub fn update(&mut self, id: &str, edit: TaskEdit) -> Result<bool, ValidationError> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        if let Some(text) = edit.text {
            let text = text.trim();
            if text.is_empty() {
                return Err(ValidationError::Empty {
                    field: "text".into(),
                });
            }
            task.text = text.to_string();
        }
        if let Some(subject) = edit.subject {
            task.subject = normalize_subject(&subject);
        }
        if let Some(important) = edit.is_important {
            task.is_important = important;
        }
        if let Some(urgent) = edit.is_urgent {
            task.is_urgent = urgent;
        }
        Ok(true)
    }

    /// Remove a task. Returns `false` if the id is unknown.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Flip completion, stamping or clearing `completion_date`.
    ///
    /// Returns `None` if the id is unknown.
    pub fn toggle_complete(&mut self, id: &str, now: DateTime<Utc>) -> Option<Toggle> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        if task.completed {
            task.completion_date = Some(now);
            Some(Toggle::Completed)
        } else {
            task.completion_date = None;
            Some(Toggle::Reopened)
        }
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn incomplete(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| !t.completed)
    }

    /// Completed tasks, most recently completed first.
    pub fn completed(&self) -> Vec<&Task> {
        let mut done: Vec<&Task> = self.tasks.iter().filter(|t| t.completed).collect();
        done.sort_by(|a, b| b.completion_date.cmp(&a.completion_date));
        done
    }

    /// Subjects offered by the timer: the default first, then each distinct
    /// subject of an open task in board order.
    pub fn subjects(&self) -> Vec<String> {
        let mut subjects = vec![default_subject()];
        for task in self.incomplete() {
            if !subjects.contains(&task.subject) {
                subjects.push(task.subject.clone());
            }
        }
        subjects
    }

    pub fn matrix(&self) -> PriorityMatrix<'_> {
        PriorityMatrix::from_tasks(&self.tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn add_rejects_blank_text() {
        let mut board = TaskBoard::default();
        assert!(board.add("   ", "Math", false, false).is_err());
        assert!(board.is_empty());
    }

    #[test]
    fn add_defaults_subject() {
        let mut board = TaskBoard::default();
        let task = board.add("  Read chapter 3 ", "", true, false).unwrap();
        assert_eq!(task.text, "Read chapter 3");
        assert_eq!(task.subject, DEFAULT_SUBJECT);
        assert!(!task.completed);
        assert!(task.completion_date.is_none());
    }

    #[test]
    fn toggle_maintains_completion_date() {
        let mut board = TaskBoard::default();
        let id = board.add("Essay", "English", false, true).unwrap().id.clone();
        let now = Utc::now();

        assert_eq!(board.toggle_complete(&id, now), Some(Toggle::Completed));
        let task = board.get(&id).unwrap();
        assert!(task.completed);
        assert_eq!(task.completion_date, Some(now));

        assert_eq!(board.toggle_complete(&id, now), Some(Toggle::Reopened));
        let task = board.get(&id).unwrap();
        assert!(!task.completed);
        assert!(task.completion_date.is_none());

        assert_eq!(board.toggle_complete("missing", now), None);
    }

    #[test]
    fn update_edits_fields_but_not_completion() {
        let mut board = TaskBoard::default();
        let id = board.add("Old", "Bio", false, false).unwrap().id.clone();
        let changed = board
            .update(
                &id,
                TaskEdit {
                    text: Some("New".into()),
                    subject: Some(" ".into()),
                    is_important: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(changed);
        let task = board.get(&id).unwrap();
        assert_eq!(task.text, "New");
        assert_eq!(task.subject, DEFAULT_SUBJECT);
        assert!(task.is_important);
        assert!(!task.completed);

        assert!(!board.update("missing", TaskEdit::default()).unwrap());
        assert!(board
            .update(&id, TaskEdit { text: Some("".into()), ..Default::default() })
            .is_err());
    }

    #[test]
    fn delete_by_id() {
        let mut board = TaskBoard::default();
        let id = board.add("A", "X", false, false).unwrap().id.clone();
        board.add("B", "X", false, false).unwrap();
        assert!(board.delete(&id));
        assert!(!board.delete(&id));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn completed_sorted_newest_first() {
        let mut board = TaskBoard::default();
        let a = board.add("A", "", false, false).unwrap().id.clone();
        let b = board.add("B", "", false, false).unwrap().id.clone();
        let now = Utc::now();
        board.toggle_complete(&a, now - Duration::hours(2));
        board.toggle_complete(&b, now);
        let done = board.completed();
        assert_eq!(done[0].text, "B");
        assert_eq!(done[1].text, "A");
        assert_eq!(board.completed_count(), 2);
    }

    #[test]
    fn subjects_lists_open_tasks_only() {
        let mut board = TaskBoard::default();
        board.add("A", "Math", false, false).unwrap();
        board.add("B", "Math", false, false).unwrap();
        let done = board.add("C", "Art", false, false).unwrap().id.clone();
        board.add("D", "Physics", false, false).unwrap();
        board.toggle_complete(&done, Utc::now());
        assert_eq!(board.subjects(), vec!["General", "Math", "Physics"]);
    }

    #[test]
    fn legacy_task_without_optional_fields_decodes() {
        let json = r#"[{"id":"1","text":"Old task","completed":true,"completionDate":"2026-01-02T03:04:05Z"}]"#;
        let board: TaskBoard = serde_json::from_str(json).unwrap();
        let task = &board.tasks()[0];
        assert_eq!(task.subject, DEFAULT_SUBJECT);
        assert!(!task.is_important);
        assert!(task.completion_date.is_some());
    }

    #[test]
    fn stored_tasks_with_inconsistent_completion_are_repaired() {
        let json = r#"[
            {"id":"a","text":"Done, no date","completed":true},
            {"id":"b","text":"Open, stray date","completed":false,"completionDate":"2026-01-02T03:04:05Z"},
            {"text":"No id"}
        ]"#;
        let board: TaskBoard = serde_json::from_str(json).unwrap();
        let tasks = board.tasks();

        assert!(tasks[0].completed);
        assert_eq!(tasks[0].completion_date, Some(DateTime::<Utc>::UNIX_EPOCH));
        assert!(!tasks[0].completed_on(Utc::now().date_naive(), &Utc));

        assert!(!tasks[1].completed);
        assert!(tasks[1].completion_date.is_none());

        assert!(!tasks[2].id.is_empty());

        let saved = serde_json::to_value(&board).unwrap();
        assert!(saved[1].get("completionDate").is_none());
    }
}
