//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! This module provides the concrete implementation of the todo repository
//! port, backed by PostgreSQL via Diesel with async support through
//! `diesel-async` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapter**: the repository only translates between Diesel row
//!   models and domain types. No business logic resides here.
//! - **Internal models**: row structs (`models.rs`) and schema definitions
//!   (`schema.rs`) are implementation details, never exposed to the domain.
//! - **Strongly typed errors**: database failures are mapped to the port's
//!   `TodoRepositoryError` variants.
//!
//! # Example
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, DieselTodoRepository, PoolConfig};
//!
//! let config = PoolConfig::new("postgres://localhost/todos");
//! let pool = DbPool::new(config).await?;
//! let repo = DieselTodoRepository::new(pool);
//! ```

mod diesel_todo_repository;
mod models;
mod pool;
mod schema;

pub use diesel_todo_repository::DieselTodoRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
