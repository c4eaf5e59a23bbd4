//! Tests for todo construction, field validation, and the status label.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rstest::rstest;
use uuid::Uuid;

use super::*;
use crate::domain::UserId;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn instant(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).single().expect("valid instant")
}

fn build_todo(
    status: TodoStatus,
    due_date: NaiveDate,
    completed_at: Option<DateTime<Utc>>,
) -> Todo {
    let created_at = instant(2024, 1, 1, 9);
    Todo::new(TodoDraft {
        id: Uuid::new_v4(),
        owner_id: UserId::random(),
        title: TodoTitle::new("file the report").expect("valid title"),
        description: None,
        due_date,
        status,
        completed_at,
        created_at,
        updated_at: created_at,
    })
    .expect("valid todo")
}

// --- Field validation ---

#[rstest]
#[case::empty("")]
#[case::whitespace_only("   \t ")]
fn title_rejects_blank_input(#[case] raw: &str) {
    assert_eq!(TodoTitle::new(raw), Err(TodoValidationError::EmptyTitle));
}

#[rstest]
fn title_is_trimmed() {
    let title = TodoTitle::new("  buy milk  ").expect("valid title");
    assert_eq!(title.as_ref(), "buy milk");
}

#[rstest]
fn title_accepts_exactly_max_length() {
    let raw = "a".repeat(TITLE_MAX);
    let title = TodoTitle::new(raw).expect("valid title");
    assert_eq!(title.as_ref().chars().count(), TITLE_MAX);
}

#[rstest]
fn title_rejects_over_max_length() {
    let raw = "a".repeat(TITLE_MAX + 1);
    assert_eq!(
        TodoTitle::new(raw),
        Err(TodoValidationError::TitleTooLong { max: TITLE_MAX })
    );
}

#[rstest]
fn description_accepts_exactly_max_length() {
    let raw = "d".repeat(DESCRIPTION_MAX);
    let description = TodoDescription::new(raw).expect("valid description");
    assert_eq!(description.as_ref().chars().count(), DESCRIPTION_MAX);
}

#[rstest]
fn description_rejects_over_max_length() {
    let raw = "d".repeat(DESCRIPTION_MAX + 1);
    assert_eq!(
        TodoDescription::new(raw),
        Err(TodoValidationError::DescriptionTooLong {
            max: DESCRIPTION_MAX
        })
    );
}

#[rstest]
fn optional_description_folds_blank_input_to_none() {
    assert_eq!(TodoDescription::from_optional(None::<String>), Ok(None));
    assert_eq!(TodoDescription::from_optional(Some("   ")), Ok(None));

    let kept = TodoDescription::from_optional(Some(" details ")).expect("valid description");
    assert_eq!(kept.map(String::from), Some("details".to_owned()));
}

// --- Completion invariant ---

#[rstest]
fn complete_todo_requires_completion_timestamp() {
    let created_at = instant(2024, 1, 1, 9);
    let result = Todo::new(TodoDraft {
        id: Uuid::new_v4(),
        owner_id: UserId::random(),
        title: TodoTitle::new("file the report").expect("valid title"),
        description: None,
        due_date: date(2024, 1, 10),
        status: TodoStatus::Complete,
        completed_at: None,
        created_at,
        updated_at: created_at,
    });
    assert_eq!(result, Err(TodoValidationError::CompletedAtMissing));
}

#[rstest]
fn incomplete_todo_rejects_completion_timestamp() {
    let created_at = instant(2024, 1, 1, 9);
    let result = Todo::new(TodoDraft {
        id: Uuid::new_v4(),
        owner_id: UserId::random(),
        title: TodoTitle::new("file the report").expect("valid title"),
        description: None,
        due_date: date(2024, 1, 10),
        status: TodoStatus::Incomplete,
        completed_at: Some(created_at),
        created_at,
        updated_at: created_at,
    });
    assert_eq!(result, Err(TodoValidationError::CompletedAtNotAllowed));
}

#[rstest]
fn toggled_flips_both_ways() {
    assert_eq!(TodoStatus::Incomplete.toggled(), TodoStatus::Complete);
    assert_eq!(TodoStatus::Complete.toggled(), TodoStatus::Incomplete);
}

#[rstest]
fn status_names_round_trip() {
    for status in [TodoStatus::Incomplete, TodoStatus::Complete] {
        assert_eq!(TodoStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(TodoStatus::parse("done"), None);
}

// --- Status label ---

#[rstest]
#[case::due_day_reached_while_incomplete(
    TodoStatus::Incomplete, None, instant(2024, 1, 10, 0), Some(StatusLabel::Failed)
)]
#[case::long_past_due_while_incomplete(
    TodoStatus::Incomplete, None, instant(2024, 2, 1, 12), Some(StatusLabel::Failed)
)]
#[case::not_yet_due(TodoStatus::Incomplete, None, instant(2024, 1, 9, 23), None)]
#[case::completed_before_due(
    TodoStatus::Complete,
    Some(instant(2024, 1, 9, 18)),
    instant(2024, 1, 15, 8),
    Some(StatusLabel::Success)
)]
#[case::completed_on_due_day(
    TodoStatus::Complete,
    Some(instant(2024, 1, 10, 23)),
    instant(2024, 1, 15, 8),
    Some(StatusLabel::Success)
)]
#[case::completed_late(
    TodoStatus::Complete,
    Some(instant(2024, 1, 12, 7)),
    instant(2024, 1, 15, 8),
    None
)]
fn status_label_matrix(
    #[case] status: TodoStatus,
    #[case] completed_at: Option<DateTime<Utc>>,
    #[case] now: DateTime<Utc>,
    #[case] expected: Option<StatusLabel>,
) {
    let todo = build_todo(status, date(2024, 1, 10), completed_at);
    assert_eq!(todo.status_label(now), expected);
}

#[rstest]
fn status_label_is_deterministic() {
    let todo = build_todo(TodoStatus::Incomplete, date(2024, 1, 10), None);
    let now = instant(2024, 1, 10, 6);
    assert_eq!(todo.status_label(now), todo.status_label(now));
}

#[rstest]
fn status_label_serialises_lowercase() {
    let success = serde_json::to_string(&StatusLabel::Success).expect("serialises");
    let failed = serde_json::to_string(&StatusLabel::Failed).expect("serialises");
    assert_eq!(success, "\"success\"");
    assert_eq!(failed, "\"failed\"");
}
