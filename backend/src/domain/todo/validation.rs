//! Todo field validation and conversion helpers.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Todo, TodoDraft};

/// Maximum allowed length for a todo title, in characters.
pub const TITLE_MAX: usize = 100;
/// Maximum allowed length for a todo description, in characters.
pub const DESCRIPTION_MAX: usize = 500;

/// Validation errors returned by the todo constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoValidationError {
    EmptyTitle,
    TitleTooLong { max: usize },
    EmptyDescription,
    DescriptionTooLong { max: usize },
    CompletedAtMissing,
    CompletedAtNotAllowed,
}

impl fmt::Display for TodoValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::TitleTooLong { max } => {
                write!(f, "title must be at most {max} characters")
            }
            Self::EmptyDescription => write!(f, "description must not be empty"),
            Self::DescriptionTooLong { max } => {
                write!(f, "description must be at most {max} characters")
            }
            Self::CompletedAtMissing => {
                write!(f, "a complete todo must carry its completion timestamp")
            }
            Self::CompletedAtNotAllowed => {
                write!(f, "an incomplete todo must not carry a completion timestamp")
            }
        }
    }
}

impl std::error::Error for TodoValidationError {}

/// Todo title: trimmed, non-empty, at most [`TITLE_MAX`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TodoTitle(String);

impl TodoTitle {
    /// Validate and construct a [`TodoTitle`], trimming surrounding whitespace.
    pub fn new(title: impl Into<String>) -> Result<Self, TodoValidationError> {
        Self::from_owned(title.into())
    }

    fn from_owned(title: String) -> Result<Self, TodoValidationError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(TodoValidationError::EmptyTitle);
        }
        if trimmed.chars().count() > TITLE_MAX {
            return Err(TodoValidationError::TitleTooLong { max: TITLE_MAX });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for TodoTitle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TodoTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<TodoTitle> for String {
    fn from(value: TodoTitle) -> Self {
        value.0
    }
}

impl TryFrom<String> for TodoTitle {
    type Error = TodoValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Todo description: trimmed, non-empty, at most [`DESCRIPTION_MAX`] characters.
///
/// Absent descriptions are modelled as `Option<TodoDescription>`;
/// [`TodoDescription::from_optional`] folds whitespace-only input into `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TodoDescription(String);

impl TodoDescription {
    /// Validate and construct a [`TodoDescription`], trimming surrounding
    /// whitespace.
    pub fn new(description: impl Into<String>) -> Result<Self, TodoValidationError> {
        Self::from_owned(description.into())
    }

    /// Normalise optional input: `None` and whitespace-only strings become
    /// `None`, anything else is validated.
    pub fn from_optional(
        description: Option<impl Into<String>>,
    ) -> Result<Option<Self>, TodoValidationError> {
        match description {
            None => Ok(None),
            Some(raw) => {
                let raw = raw.into();
                if raw.trim().is_empty() {
                    Ok(None)
                } else {
                    Self::from_owned(raw).map(Some)
                }
            }
        }
    }

    fn from_owned(description: String) -> Result<Self, TodoValidationError> {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Err(TodoValidationError::EmptyDescription);
        }
        if trimmed.chars().count() > DESCRIPTION_MAX {
            return Err(TodoValidationError::DescriptionTooLong {
                max: DESCRIPTION_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for TodoDescription {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TodoDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<TodoDescription> for String {
    fn from(value: TodoDescription) -> Self {
        value.0
    }
}

impl TryFrom<String> for TodoDescription {
    type Error = TodoValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

impl TryFrom<TodoDraft> for Todo {
    type Error = TodoValidationError;

    fn try_from(value: TodoDraft) -> Result<Self, Self::Error> {
        if value.status.is_complete() && value.completed_at.is_none() {
            return Err(TodoValidationError::CompletedAtMissing);
        }
        if !value.status.is_complete() && value.completed_at.is_some() {
            return Err(TodoValidationError::CompletedAtNotAllowed);
        }

        Ok(Self {
            id: value.id,
            owner_id: value.owner_id,
            title: value.title,
            description: value.description,
            due_date: value.due_date,
            status: value.status,
            completed_at: value.completed_at,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}
