//! PostgreSQL-backed `TodoRepository` implementation using Diesel ORM.
//!
//! This adapter persists todo records and reloads them through the validated
//! domain constructors. It carries no business rules: ownership and
//! validation are enforced by the service above it.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{TodoRepository, TodoRepositoryError};
use crate::domain::{Todo, TodoDescription, TodoDraft, TodoStatus, TodoTitle, UserId};

use super::models::{NewTodoRow, TodoRow, TodoRowUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::todos;

/// Diesel-backed implementation of the todo repository port.
#[derive(Clone)]
pub struct DieselTodoRepository {
    pool: DbPool,
}

impl DieselTodoRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to port errors.
fn map_pool_error(error: PoolError) -> TodoRepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    TodoRepositoryError::connection(message)
}

/// Map Diesel errors to port errors.
fn map_diesel_error(error: diesel::result::Error) -> TodoRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => TodoRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => TodoRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            TodoRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => TodoRepositoryError::query("database error"),
        _ => TodoRepositoryError::query("database error"),
    }
}

/// Convert a database row into a validated domain todo.
fn row_to_todo(row: TodoRow) -> Result<Todo, TodoRepositoryError> {
    let TodoRow {
        id,
        owner_id,
        title,
        description,
        due_date,
        status,
        completed_at,
        created_at,
        updated_at,
    } = row;

    let status = TodoStatus::parse(&status)
        .ok_or_else(|| TodoRepositoryError::query(format!("unknown status value: {status}")))?;
    let title = TodoTitle::new(title).map_err(|err| TodoRepositoryError::query(err.to_string()))?;
    let description = TodoDescription::from_optional(description)
        .map_err(|err| TodoRepositoryError::query(err.to_string()))?;

    Todo::new(TodoDraft {
        id,
        owner_id: UserId::from_uuid(owner_id),
        title,
        description,
        due_date,
        status,
        completed_at,
        created_at,
        updated_at,
    })
    .map_err(|err| TodoRepositoryError::query(err.to_string()))
}

#[async_trait]
impl TodoRepository for DieselTodoRepository {
    async fn insert(&self, todo: &Todo) -> Result<(), TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewTodoRow {
            id: todo.id(),
            owner_id: *todo.owner_id().as_uuid(),
            title: todo.title().as_ref(),
            description: todo.description().map(AsRef::as_ref),
            due_date: todo.due_date(),
            status: todo.status().as_str(),
            completed_at: todo.completed_at(),
            created_at: todo.created_at(),
            updated_at: todo.updated_at(),
        };

        diesel::insert_into(todos::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, todo_id: &Uuid) -> Result<Option<Todo>, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = todos::table
            .filter(todos::id.eq(todo_id))
            .select(TodoRow::as_select())
            .first::<TodoRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_todo).transpose()
    }

    async fn find_by_owner(&self, owner_id: &UserId) -> Result<Vec<Todo>, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TodoRow> = todos::table
            .filter(todos::owner_id.eq(owner_id.as_uuid()))
            .order((todos::created_at.desc(), todos::id.desc()))
            .select(TodoRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_todo).collect()
    }

    async fn save(&self, todo: &Todo) -> Result<(), TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let update_row = TodoRowUpdate {
            title: todo.title().as_ref(),
            description: todo.description().map(AsRef::as_ref),
            due_date: todo.due_date(),
            status: todo.status().as_str(),
            completed_at: todo.completed_at(),
            updated_at: todo.updated_at(),
        };

        let updated = diesel::update(todos::table.find(todo.id()))
            .set(&update_row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if updated == 0 {
            return Err(TodoRepositoryError::query("record no longer exists"));
        }
        Ok(())
    }

    async fn delete_by_id(&self, todo_id: &Uuid) -> Result<bool, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(todos::table.find(todo_id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}
