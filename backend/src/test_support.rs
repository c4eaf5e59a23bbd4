//! Test utilities for the backend crate.
//!
//! This module provides shared helpers for both unit tests (in `src/`) and
//! integration tests (in `tests/`). It is only compiled when running tests or
//! when the `test-support` feature is enabled.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;
use uuid::Uuid;

use crate::domain::ports::{TodoRepository, TodoRepositoryError};
use crate::domain::{Todo, UserId};

/// Settable clock for driving the service through time in tests.
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    /// Create a clock frozen at the given instant.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    /// Move the clock to a new instant.
    pub fn set(&self, now: DateTime<Utc>) {
        *self.lock_clock() = now;
    }

    /// Advance the clock by a duration.
    pub fn advance(&self, delta: Duration) {
        let delta = match TimeDelta::from_std(delta) {
            Ok(delta) => delta,
            Err(error) => {
                panic!("failed to convert Duration to TimeDelta: {error}; delta={delta:?}",)
            }
        };
        *self.lock_clock() += delta;
    }

    /// Advance the clock by whole days.
    pub fn advance_days(&self, days: i64) {
        *self.lock_clock() += TimeDelta::days(days);
    }

    fn lock_clock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("clock mutex"),
        }
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

/// In-memory todo repository honouring the full port contract.
///
/// Backed by a `Mutex<HashMap>`; listing applies the same ordering as the
/// PostgreSQL adapter (descending `created_at`, descending id as tie-break).
#[derive(Default)]
pub struct InMemoryTodoRepository {
    store: Mutex<HashMap<Uuid, Todo>>,
}

impl InMemoryTodoRepository {
    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.lock_store().len()
    }

    /// True when no records are held.
    pub fn is_empty(&self) -> bool {
        self.lock_store().is_empty()
    }

    fn lock_store(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, Todo>> {
        match self.store.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("store mutex"),
        }
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn insert(&self, todo: &Todo) -> Result<(), TodoRepositoryError> {
        let mut guard = self.lock_store();
        if guard.contains_key(&todo.id()) {
            return Err(TodoRepositoryError::query("duplicate todo id"));
        }
        guard.insert(todo.id(), todo.clone());
        Ok(())
    }

    async fn find_by_id(&self, todo_id: &Uuid) -> Result<Option<Todo>, TodoRepositoryError> {
        Ok(self.lock_store().get(todo_id).cloned())
    }

    async fn find_by_owner(&self, owner_id: &UserId) -> Result<Vec<Todo>, TodoRepositoryError> {
        let mut todos: Vec<Todo> = self
            .lock_store()
            .values()
            .filter(|todo| todo.owner_id() == owner_id)
            .cloned()
            .collect();
        todos.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });
        Ok(todos)
    }

    async fn save(&self, todo: &Todo) -> Result<(), TodoRepositoryError> {
        let mut guard = self.lock_store();
        if !guard.contains_key(&todo.id()) {
            return Err(TodoRepositoryError::query("record no longer exists"));
        }
        guard.insert(todo.id(), todo.clone());
        Ok(())
    }

    async fn delete_by_id(&self, todo_id: &Uuid) -> Result<bool, TodoRepositoryError> {
        Ok(self.lock_store().remove(todo_id).is_some())
    }
}
