//! Diesel row models for the `todos` table.
//!
//! These structs are internal to the persistence layer; the adapter converts
//! them to and from validated domain types at the boundary.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::{AsChangeset, Insertable, Queryable, Selectable};
use uuid::Uuid;

use super::schema::todos;

/// Row struct for reading from the todos table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TodoRow {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub status: String,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating todo records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub(crate) struct NewTodoRow<'a> {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub due_date: NaiveDate,
    pub status: &'a str,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Changeset struct for overwriting todo records.
///
/// `treat_none_as_null` makes clearing `description` and `completed_at`
/// explicit writes rather than skipped columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = todos)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct TodoRowUpdate<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub due_date: NaiveDate,
    pub status: &'a str,
    pub completed_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}
