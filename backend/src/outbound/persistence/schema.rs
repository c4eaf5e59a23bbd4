//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation; regenerate with `diesel print-schema` when migrations change.

diesel::table! {
    /// Todo records.
    ///
    /// Stores one row per todo. Listing is served by the composite index on
    /// `(owner_id, created_at)` created by the migrations.
    todos (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Owning user; immutable after creation.
        owner_id -> Uuid,
        /// Trimmed title (max 100 characters).
        title -> Varchar,
        /// Optional trimmed description (max 500 characters).
        description -> Nullable<Varchar>,
        /// Calendar due date; no time-of-day component.
        due_date -> Date,
        /// Completion state: `incomplete` or `complete`.
        status -> Varchar,
        /// Completion timestamp, present exactly when status is `complete`.
        completed_at -> Nullable<Timestamptz>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}
