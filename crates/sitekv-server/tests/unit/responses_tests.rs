//! Error envelope tests

use rocket::http::Status;
use sitekv_domain::error::Error;
use sitekv_server::responses::ApiError;

#[test]
fn test_messages_match_wire_contract() {
    assert_eq!(ApiError::MissingKey.to_string(), "Key is required");
    assert_eq!(ApiError::MissingValue.to_string(), "Value is required");
    assert_eq!(
        ApiError::Retrieve(Error::backing_store("down")).to_string(),
        "Failed to retrieve value"
    );
    assert_eq!(
        ApiError::Store(Error::backing_store("down")).to_string(),
        "Failed to store value"
    );
}

#[test]
fn test_statuses() {
    assert_eq!(ApiError::MissingKey.status(), Status::BadRequest);
    assert_eq!(ApiError::MissingValue.status(), Status::BadRequest);
    assert_eq!(
        ApiError::Retrieve(Error::backing_store("down")).status(),
        Status::InternalServerError
    );
    assert_eq!(
        ApiError::Store(Error::backing_store("down")).status(),
        Status::InternalServerError
    );
}

#[test]
fn test_cause_is_kept_as_source() {
    use std::error::Error as _;

    let error = ApiError::Store(Error::backing_store("namespace unavailable"));
    let source = error.source().expect("source");
    assert!(source.to_string().contains("namespace unavailable"));
}
