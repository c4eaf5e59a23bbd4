//! Derived success/failed label.
//!
//! The label is a pure projection of a todo's timestamps against "now". It is
//! recomputed on every read and never stored, because "now" advances
//! independently of any mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Todo, TodoStatus};

/// Presentation-only outcome label for a todo.
///
/// `Option<StatusLabel>` is the full classifier result: `None` covers both
/// "incomplete, not yet due" and "complete but finished late".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLabel {
    /// Completed on or before the due date.
    Success,
    /// Still incomplete once the due day has been reached.
    Failed,
}

impl Todo {
    /// Derive the outcome label at the given instant.
    ///
    /// All three instants are truncated to their UTC calendar day before
    /// comparison. An incomplete todo is `Failed` from the first moment of
    /// its due day (same-day cutoff, not a 24-hour grace window); a todo
    /// completed on its due day counts as `Success` (inclusive boundary).
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{StatusLabel, Todo, TodoDraft, TodoStatus, TodoTitle, UserId};
    /// use chrono::{NaiveDate, TimeZone, Utc};
    /// use uuid::Uuid;
    ///
    /// let created = Utc.with_ymd_and_hms(2024, 1, 8, 9, 0, 0).unwrap();
    /// let todo = Todo::new(TodoDraft {
    ///     id: Uuid::new_v4(),
    ///     owner_id: UserId::random(),
    ///     title: TodoTitle::new("file the report")?,
    ///     description: None,
    ///     due_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
    ///     status: TodoStatus::Incomplete,
    ///     completed_at: None,
    ///     created_at: created,
    ///     updated_at: created,
    /// })?;
    ///
    /// // Failed from the first moment of the due day.
    /// let now = Utc.with_ymd_and_hms(2024, 1, 10, 0, 30, 0).unwrap();
    /// assert_eq!(todo.status_label(now), Some(StatusLabel::Failed));
    ///
    /// // Not yet due the evening before.
    /// let now = Utc.with_ymd_and_hms(2024, 1, 9, 23, 59, 0).unwrap();
    /// assert_eq!(todo.status_label(now), None);
    /// # Ok::<(), backend::domain::TodoValidationError>(())
    /// ```
    pub fn status_label(&self, now: DateTime<Utc>) -> Option<StatusLabel> {
        let due = self.due_date;
        match self.status {
            TodoStatus::Incomplete if now.date_naive() >= due => Some(StatusLabel::Failed),
            TodoStatus::Incomplete => None,
            TodoStatus::Complete => self
                .completed_at
                .filter(|completed| completed.date_naive() <= due)
                .map(|_| StatusLabel::Success),
        }
    }
}
