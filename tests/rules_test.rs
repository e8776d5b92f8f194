//! Integration tests for accumulating rule checks.

use clienthub_errors::{ErrorMessageList, HubError, Rules, ValidationFailure};
use stillwater::Validation;

struct ClientRequest {
    name: String,
    email: String,
}

fn validate(request: &ClientRequest) -> Result<(), ValidationFailure> {
    Rules::new()
        .not_empty(&request.name, "Name is required")
        .max_len(&request.name, 100, "Name is too long")
        .email(&request.email, "Email invalid")
        .finish()
}

#[test]
fn test_valid_request_passes() {
    let request = ClientRequest {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
    };
    assert!(validate(&request).is_ok());
}

#[test]
fn test_all_failures_are_reported() {
    let request = ClientRequest {
        name: String::new(),
        email: "ana".to_string(),
    };

    let failure = validate(&request).unwrap_err();
    assert_eq!(failure.errors(), ["Name is required", "Email invalid"]);
}

#[test]
fn test_failure_reaches_response_body() {
    fn register(request: &ClientRequest) -> Result<u64, HubError> {
        validate(request)?;
        Ok(1)
    }

    let request = ClientRequest {
        name: "x".repeat(101),
        email: "ana@example.com".to_string(),
    };

    let body = ErrorMessageList::from(register(&request).unwrap_err());
    assert_eq!(body.to_json().unwrap(), r#"{"Errors":["Name is too long"]}"#);
}

#[test]
fn test_into_validation_success() {
    match Rules::new().check(true, "unused").into_validation() {
        Validation::Success(()) => {}
        Validation::Failure(_) => panic!("Expected success"),
    }
}

#[test]
fn test_into_validation_failure_accumulates() {
    match Rules::new().check(false, "a").check(false, "b").into_validation() {
        Validation::Success(_) => panic!("Expected failure"),
        Validation::Failure(errors) => assert_eq!(errors.len(), 2),
    }
}

#[test]
fn test_default_is_empty() {
    assert!(Rules::default().is_valid());
}
