//! Driving port for todo reads.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Error, UserId};

use super::TodoPayload;

/// Request to fetch a single todo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct GetTodoRequest {
    pub owner_id: UserId,
    pub id: Uuid,
}

/// Response from fetching a single todo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTodoResponse {
    pub todo: TodoPayload,
}

/// Request to list an owner's todos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ListTodosRequest {
    pub owner_id: UserId,
}

/// Response from listing an owner's todos, most recently created first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTodosResponse {
    pub count: usize,
    pub todos: Vec<TodoPayload>,
}

/// Driving port for todo read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoQuery: Send + Sync {
    /// Fetch one todo after existence and ownership checks, label attached.
    async fn get_todo(&self, request: GetTodoRequest) -> Result<GetTodoResponse, Error>;

    /// List the owner's todos, newest first, labels attached.
    async fn list_todos(&self, request: ListTodosRequest) -> Result<ListTodosResponse, Error>;
}
