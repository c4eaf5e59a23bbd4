//! Port for todo persistence.
//!
//! The [`TodoRepository`] trait is the contract between the service layer and
//! durable storage. No business rules live behind it: adapters translate
//! records and map their failures, nothing more. Ownership and validation are
//! enforced above, in the service.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Todo, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by todo repository adapters.
    pub enum TodoRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "todo repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "todo repository query failed: {message}",
    }
}

/// Port for todo storage and retrieval.
///
/// Implementations persist records exactly as handed to them, including the
/// `created_at`/`updated_at` stamps the service sets. Conflicting concurrent
/// writes to one record resolve last-writer-wins; there is no revision or
/// ETag concept.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Persist a new todo record.
    async fn insert(&self, todo: &Todo) -> Result<(), TodoRepositoryError>;

    /// Fetch a todo by its unique identifier.
    ///
    /// Returns `None` if no todo exists with the given id.
    async fn find_by_id(&self, todo_id: &Uuid) -> Result<Option<Todo>, TodoRepositoryError>;

    /// Fetch all todos belonging to an owner, most recently created first.
    ///
    /// Returns an empty vector if the owner has no todos.
    async fn find_by_owner(&self, owner_id: &UserId) -> Result<Vec<Todo>, TodoRepositoryError>;

    /// Overwrite a previously-read record in full.
    async fn save(&self, todo: &Todo) -> Result<(), TodoRepositoryError>;

    /// Delete a todo by its unique identifier.
    ///
    /// Returns `Ok(true)` if a record was deleted, `Ok(false)` if it didn't
    /// exist.
    async fn delete_by_id(&self, todo_id: &Uuid) -> Result<bool, TodoRepositoryError>;
}

/// Fixture implementation for tests that do not exercise todo persistence.
///
/// Lookups return empty results and writes are discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTodoRepository;

#[async_trait]
impl TodoRepository for FixtureTodoRepository {
    async fn insert(&self, _todo: &Todo) -> Result<(), TodoRepositoryError> {
        Ok(())
    }

    async fn find_by_id(&self, _todo_id: &Uuid) -> Result<Option<Todo>, TodoRepositoryError> {
        Ok(None)
    }

    async fn find_by_owner(&self, _owner_id: &UserId) -> Result<Vec<Todo>, TodoRepositoryError> {
        Ok(Vec::new())
    }

    async fn save(&self, _todo: &Todo) -> Result<(), TodoRepositoryError> {
        Ok(())
    }

    async fn delete_by_id(&self, _todo_id: &Uuid) -> Result<bool, TodoRepositoryError> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    use super::*;
    use crate::domain::{TodoDraft, TodoStatus, TodoTitle};

    fn build_todo(owner_id: UserId) -> Todo {
        let created_at = Utc
            .with_ymd_and_hms(2024, 1, 8, 9, 0, 0)
            .single()
            .expect("valid instant");
        Todo::new(TodoDraft {
            id: Uuid::new_v4(),
            owner_id,
            title: TodoTitle::new("water the plants").expect("valid title"),
            description: None,
            due_date: created_at.date_naive(),
            status: TodoStatus::Incomplete,
            completed_at: None,
            created_at,
            updated_at: created_at,
        })
        .expect("valid todo")
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_find_returns_none() {
        let repo = FixtureTodoRepository;
        let found = repo
            .find_by_id(&Uuid::new_v4())
            .await
            .expect("fixture lookup succeeds");
        assert!(found.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_list_returns_empty() {
        let repo = FixtureTodoRepository;
        let listed = repo
            .find_by_owner(&UserId::random())
            .await
            .expect("fixture list succeeds");
        assert!(listed.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_accepts_writes() {
        let repo = FixtureTodoRepository;
        let todo = build_todo(UserId::random());

        repo.insert(&todo).await.expect("fixture insert succeeds");
        repo.save(&todo).await.expect("fixture save succeeds");
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_delete_returns_false() {
        let repo = FixtureTodoRepository;
        let deleted = repo
            .delete_by_id(&Uuid::new_v4())
            .await
            .expect("fixture delete succeeds");
        assert!(!deleted);
    }

    #[rstest]
    fn connection_error_formats_message() {
        let err = TodoRepositoryError::connection("pool unavailable");
        assert!(err.to_string().contains("pool unavailable"));
    }

    #[rstest]
    fn query_error_formats_message() {
        let err = TodoRepositoryError::query("broken sql");
        assert!(err.to_string().contains("broken sql"));
    }
}
