//! Todo aggregate: entity, draft input, field newtypes, and status label.
//!
//! A [`Todo`] is always constructed through [`Todo::new`], which enforces the
//! completion invariant (`completed_at` is present exactly when the status is
//! complete). Field-level rules live in the [`TodoTitle`] and
//! [`TodoDescription`] newtypes so invalid values cannot reach the entity.

mod label;
mod validation;

pub use self::label::StatusLabel;
pub use self::validation::{
    DESCRIPTION_MAX, TITLE_MAX, TodoDescription, TodoTitle, TodoValidationError,
};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::UserId;

/// Completion state of a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    /// The todo has not been finished yet.
    Incomplete,
    /// The todo has been finished.
    Complete,
}

impl TodoStatus {
    /// True when the status is [`TodoStatus::Complete`].
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }

    /// The opposite status.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Incomplete => Self::Complete,
            Self::Complete => Self::Incomplete,
        }
    }

    /// Canonical lowercase name, as stored and serialised.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Incomplete => "incomplete",
            Self::Complete => "complete",
        }
    }

    /// Parse the canonical lowercase name.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "incomplete" => Some(Self::Incomplete),
            "complete" => Some(Self::Complete),
            _ => None,
        }
    }
}

/// Input payload for [`Todo::new`].
#[derive(Debug, Clone)]
pub struct TodoDraft {
    pub id: Uuid,
    pub owner_id: UserId,
    pub title: TodoTitle,
    pub description: Option<TodoDescription>,
    pub due_date: NaiveDate,
    pub status: TodoStatus,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated todo record.
///
/// ## Invariants
/// - `completed_at` is present if and only if `status` is complete.
/// - `owner_id` never changes after creation.
/// - `title` and `description` satisfy the newtype bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Todo {
    id: Uuid,
    owner_id: UserId,
    title: TodoTitle,
    description: Option<TodoDescription>,
    due_date: NaiveDate,
    status: TodoStatus,
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a validated todo.
    pub fn new(draft: TodoDraft) -> Result<Self, TodoValidationError> {
        Self::try_from(draft)
    }

    /// Returns the todo id.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the owning user id.
    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    /// Returns the title.
    pub fn title(&self) -> &TodoTitle {
        &self.title
    }

    /// Returns the optional description.
    pub fn description(&self) -> Option<&TodoDescription> {
        self.description.as_ref()
    }

    /// Returns the due date.
    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the completion state.
    pub fn status(&self) -> TodoStatus {
        self.status
    }

    /// Returns the completion timestamp, present exactly when complete.
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-modification timestamp.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests;
