//! Driving port for todo mutations.
//!
//! One request struct per operation: the embedding layer deserialises into
//! these shapes and malformed input never reaches the service. Responses
//! carry the resulting record as a [`TodoPayload`] with the derived status
//! label attached for presentation.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Error, StatusLabel, Todo, TodoStatus, UserId};

/// Serializable todo payload for driving ports.
///
/// `status_label` is derived at response time and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPayload {
    pub id: Uuid,
    pub owner_id: UserId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub status: TodoStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_label: Option<StatusLabel>,
}

impl TodoPayload {
    /// Project a stored record into its response shape, deriving the label
    /// at the given instant.
    pub fn from_todo(todo: Todo, now: DateTime<Utc>) -> Self {
        let status_label = todo.status_label(now);
        Self {
            id: todo.id(),
            owner_id: todo.owner_id().clone(),
            title: todo.title().to_string(),
            description: todo.description().map(ToString::to_string),
            due_date: todo.due_date(),
            status: todo.status(),
            completed_at: todo.completed_at(),
            created_at: todo.created_at(),
            updated_at: todo.updated_at(),
            status_label,
        }
    }
}

/// Request to create a todo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct CreateTodoRequest {
    pub owner_id: UserId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub due_date: NaiveDate,
}

/// Response from creating a todo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoResponse {
    pub todo: TodoPayload,
}

/// Request to update a todo.
///
/// Absent fields retain their stored values; this is a partial-update
/// contract even when invoked as a full replace. A present but blank
/// `description` clears the stored description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct UpdateTodoRequest {
    pub owner_id: UserId,
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TodoStatus>,
}

/// Response from updating a todo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoResponse {
    pub todo: TodoPayload,
}

/// Request to flip a todo between incomplete and complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ToggleTodoStatusRequest {
    pub owner_id: UserId,
    pub id: Uuid,
}

/// Response from toggling a todo's status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleTodoStatusResponse {
    pub todo: TodoPayload,
}

/// Request to delete a todo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct DeleteTodoRequest {
    pub owner_id: UserId,
    pub id: Uuid,
}

/// Response from deleting a todo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTodoResponse {
    pub id: Uuid,
}

/// Driving port for todo write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoCommand: Send + Sync {
    /// Create a todo owned by the requesting user.
    async fn create_todo(&self, request: CreateTodoRequest) -> Result<CreateTodoResponse, Error>;

    /// Partially update a todo after existence and ownership checks.
    async fn update_todo(&self, request: UpdateTodoRequest) -> Result<UpdateTodoResponse, Error>;

    /// Flip completion state, managing the completion timestamp.
    async fn toggle_todo_status(
        &self,
        request: ToggleTodoStatusRequest,
    ) -> Result<ToggleTodoStatusResponse, Error>;

    /// Permanently remove a todo after existence and ownership checks.
    async fn delete_todo(&self, request: DeleteTodoRequest) -> Result<DeleteTodoResponse, Error>;
}
