//! Todo domain service.
//!
//! The service is the only writer of todo state. It enforces per-record
//! ownership, validates fields before any store write, stamps record
//! timestamps from its injected clock, and manages the completion timestamp
//! across status transitions. It implements both driving ports.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::warn;
use uuid::Uuid;

use crate::domain::ports::{
    CreateTodoRequest, CreateTodoResponse, DeleteTodoRequest, DeleteTodoResponse, GetTodoRequest,
    GetTodoResponse, ListTodosRequest, ListTodosResponse, TodoCommand, TodoPayload, TodoQuery,
    TodoRepository, TodoRepositoryError, ToggleTodoStatusRequest, ToggleTodoStatusResponse,
    UpdateTodoRequest, UpdateTodoResponse,
};
use crate::domain::{
    Error, Todo, TodoDescription, TodoDraft, TodoStatus, TodoTitle, TodoValidationError, UserId,
};

fn map_repository_error(error: TodoRepositoryError) -> Error {
    match error {
        TodoRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("todo repository unavailable: {message}"))
        }
        TodoRepositoryError::Query { message } => {
            Error::internal(format!("todo repository error: {message}"))
        }
    }
}

fn map_validation_error(error: TodoValidationError) -> Error {
    Error::invalid_request(format!("invalid todo payload: {error}"))
}

// Rebuild failures can only mean the service broke its own completion
// invariant; user input never reaches this path unvalidated.
fn map_rebuild_error(error: TodoValidationError) -> Error {
    Error::internal(format!("todo record violates invariants: {error}"))
}

/// Todo service implementing the command and query driving ports.
#[derive(Clone)]
pub struct TodoService<R> {
    todo_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> TodoService<R> {
    /// Create a new service with the todo repository and a clock.
    /// ```rust
    /// # use std::sync::Arc;
    /// # use backend::domain::ports::FixtureTodoRepository;
    /// # use mockable::DefaultClock;
    /// let service = backend::domain::TodoService::new(
    ///     Arc::new(FixtureTodoRepository),
    ///     Arc::new(DefaultClock),
    /// );
    /// ```
    pub fn new(todo_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { todo_repo, clock }
    }
}

impl<R> TodoService<R>
where
    R: TodoRepository,
{
    /// Load a todo for an id-addressed operation.
    ///
    /// Existence is checked before ownership: a missing id is always
    /// `NotFound`, a foreign-owned id is always `Forbidden`.
    async fn load_owned(&self, todo_id: &Uuid, owner_id: &UserId) -> Result<Todo, Error> {
        let todo = self
            .todo_repo
            .find_by_id(todo_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("todo {todo_id} not found")))?;

        if todo.owner_id() != owner_id {
            warn!(todo_id = %todo_id, "rejected access to another owner's todo");
            return Err(Error::forbidden(
                "todo owner does not match requesting user",
            ));
        }

        Ok(todo)
    }
}

#[async_trait]
impl<R> TodoCommand for TodoService<R>
where
    R: TodoRepository,
{
    async fn create_todo(&self, request: CreateTodoRequest) -> Result<CreateTodoResponse, Error> {
        let title = TodoTitle::new(request.title).map_err(map_validation_error)?;
        let description =
            TodoDescription::from_optional(request.description).map_err(map_validation_error)?;

        let now = self.clock.utc();
        let todo = Todo::new(TodoDraft {
            id: Uuid::new_v4(),
            owner_id: request.owner_id,
            title,
            description,
            due_date: request.due_date,
            status: TodoStatus::Incomplete,
            completed_at: None,
            created_at: now,
            updated_at: now,
        })
        .map_err(map_rebuild_error)?;

        self.todo_repo
            .insert(&todo)
            .await
            .map_err(map_repository_error)?;

        Ok(CreateTodoResponse {
            todo: TodoPayload::from_todo(todo, now),
        })
    }

    async fn update_todo(&self, request: UpdateTodoRequest) -> Result<UpdateTodoResponse, Error> {
        let current = self.load_owned(&request.id, &request.owner_id).await?;

        let title = match request.title {
            Some(raw) => TodoTitle::new(raw).map_err(map_validation_error)?,
            None => current.title().clone(),
        };
        let description = match request.description {
            Some(raw) => {
                TodoDescription::from_optional(Some(raw)).map_err(map_validation_error)?
            }
            None => current.description().cloned(),
        };
        let due_date = request.due_date.unwrap_or(current.due_date());
        let status = request.status.unwrap_or(current.status());

        let now = self.clock.utc();
        // A status change through update manages the completion timestamp the
        // same way toggling does; an unchanged status leaves it alone.
        let completed_at = if status == current.status() {
            current.completed_at()
        } else if status.is_complete() {
            Some(now)
        } else {
            None
        };

        let todo = Todo::new(TodoDraft {
            id: current.id(),
            owner_id: current.owner_id().clone(),
            title,
            description,
            due_date,
            status,
            completed_at,
            created_at: current.created_at(),
            updated_at: now,
        })
        .map_err(map_rebuild_error)?;

        self.todo_repo
            .save(&todo)
            .await
            .map_err(map_repository_error)?;

        Ok(UpdateTodoResponse {
            todo: TodoPayload::from_todo(todo, now),
        })
    }

    async fn toggle_todo_status(
        &self,
        request: ToggleTodoStatusRequest,
    ) -> Result<ToggleTodoStatusResponse, Error> {
        let current = self.load_owned(&request.id, &request.owner_id).await?;

        let now = self.clock.utc();
        let status = current.status().toggled();
        let completed_at = status.is_complete().then_some(now);

        let todo = Todo::new(TodoDraft {
            id: current.id(),
            owner_id: current.owner_id().clone(),
            title: current.title().clone(),
            description: current.description().cloned(),
            due_date: current.due_date(),
            status,
            completed_at,
            created_at: current.created_at(),
            updated_at: now,
        })
        .map_err(map_rebuild_error)?;

        self.todo_repo
            .save(&todo)
            .await
            .map_err(map_repository_error)?;

        Ok(ToggleTodoStatusResponse {
            todo: TodoPayload::from_todo(todo, now),
        })
    }

    async fn delete_todo(&self, request: DeleteTodoRequest) -> Result<DeleteTodoResponse, Error> {
        let current = self.load_owned(&request.id, &request.owner_id).await?;

        let deleted = self
            .todo_repo
            .delete_by_id(&request.id)
            .await
            .map_err(map_repository_error)?;
        if !deleted {
            // Lost a race with a concurrent delete of the same record.
            return Err(Error::not_found(format!("todo {} not found", request.id)));
        }

        Ok(DeleteTodoResponse { id: current.id() })
    }
}

#[async_trait]
impl<R> TodoQuery for TodoService<R>
where
    R: TodoRepository,
{
    async fn get_todo(&self, request: GetTodoRequest) -> Result<GetTodoResponse, Error> {
        let todo = self.load_owned(&request.id, &request.owner_id).await?;

        Ok(GetTodoResponse {
            todo: TodoPayload::from_todo(todo, self.clock.utc()),
        })
    }

    async fn list_todos(&self, request: ListTodosRequest) -> Result<ListTodosResponse, Error> {
        let todos = self
            .todo_repo
            .find_by_owner(&request.owner_id)
            .await
            .map_err(map_repository_error)?;

        let now = self.clock.utc();
        let todos: Vec<TodoPayload> = todos
            .into_iter()
            .map(|todo| TodoPayload::from_todo(todo, now))
            .collect();

        Ok(ListTodosResponse {
            count: todos.len(),
            todos,
        })
    }
}

#[cfg(test)]
#[path = "todo_service_tests.rs"]
mod tests;
