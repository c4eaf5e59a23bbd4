//! Regression coverage for this module.

use rstest::rstest;
use uuid::Uuid;

use super::*;

#[rstest]
fn display_matches_inner_uuid() {
    let raw = Uuid::new_v4();
    let id = UserId::from_uuid(raw);
    assert_eq!(id.to_string(), raw.to_string());
}

#[rstest]
fn serialises_as_bare_uuid_string() {
    let id = UserId::random();
    let encoded = serde_json::to_string(&id).expect("serialises");
    assert_eq!(encoded, format!("\"{id}\""));

    let decoded: UserId = serde_json::from_str(&encoded).expect("deserialises");
    assert_eq!(decoded, id);
}

#[rstest]
fn random_ids_are_distinct() {
    assert_ne!(UserId::random(), UserId::random());
}
