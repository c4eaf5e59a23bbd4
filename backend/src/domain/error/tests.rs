//! Tests for the error payload formatting and serialisation contract.

use rstest::rstest;
use serde_json::json;

use super::*;

#[rstest]
#[case::invalid_request(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case::forbidden(Error::forbidden("nope"), ErrorCode::Forbidden)]
#[case::not_found(Error::not_found("missing"), ErrorCode::NotFound)]
#[case::service_unavailable(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case::internal(Error::internal("boom"), ErrorCode::InternalError)]
fn convenience_constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn display_uses_message() {
    let error = Error::not_found("todo 42 not found");
    assert_eq!(error.to_string(), "todo 42 not found");
}

#[rstest]
fn codes_serialise_as_snake_case() {
    let error = Error::invalid_request("bad");
    let value = serde_json::to_value(&error).expect("serialises");
    assert_eq!(value["code"], json!("invalid_request"));
    assert_eq!(value["message"], json!("bad"));
}

#[rstest]
fn details_round_trip() {
    let error = Error::invalid_request("bad").with_details(json!({ "field": "title" }));
    let encoded = serde_json::to_string(&error).expect("serialises");
    let decoded: Error = serde_json::from_str(&encoded).expect("deserialises");
    assert_eq!(decoded, error);
}

#[rstest]
fn deserialisation_rejects_empty_messages() {
    let payload = json!({ "code": "not_found", "message": "   " });
    let result = serde_json::from_value::<Error>(payload);
    assert!(result.is_err());
}
