//! Domain primitives, aggregates, and services.
//!
//! Purpose: Define strongly typed domain entities and the services that
//! orchestrate them. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode — transport-agnostic failure payload and taxonomy.
//! - UserId — trusted identifier of the authenticated owner.
//! - Todo and its field newtypes — the sole aggregate.
//! - StatusLabel — derived success/failed presentation label.
//! - TodoService — ownership and validation enforcement over the store port.

pub mod error;
pub mod ports;
pub mod todo;
pub mod todo_service;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::todo::{
    DESCRIPTION_MAX, StatusLabel, TITLE_MAX, Todo, TodoDescription, TodoDraft, TodoStatus,
    TodoTitle, TodoValidationError,
};
pub use self::todo_service::TodoService;
pub use self::user::UserId;
