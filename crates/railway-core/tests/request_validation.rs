//! Request validation scenarios built from the public API only.

use railway_core::{ErrorKind, Result, StepError, boxed, failure, from_step, plus, success};

#[derive(Debug, Clone, PartialEq)]
struct Request {
    name: String,
    email: String,
}

impl Request {
    fn new(name: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

fn validate_name(request: Request) -> Result<Request> {
    if request.name.trim().is_empty() {
        return failure("Name must not be blank");
    }
    success(request)
}

fn validate_email(request: Request) -> Result<Request> {
    if request.email.trim().is_empty() {
        return failure("Email must not be blank");
    }
    success(request)
}

fn name_to_upper(request: Request) -> Request {
    Request {
        name: request.name.to_uppercase(),
        ..request
    }
}

fn keep_first(first: Request, _second: Request) -> Request {
    first
}

#[test]
fn test_blank_name_fails_first_validation() {
    let pipeline = from_step(validate_name).on_success_step(validate_email);

    let result = pipeline.run(Request::new("", "a@b.c"));

    assert_eq!(result, Err(StepError::new("Name must not be blank")));
}

#[test]
fn test_valid_request_is_upper_cased() {
    let pipeline = from_step(validate_name)
        .on_success_step(validate_email)
        .on_success_transform(name_to_upper);

    let result = pipeline.run(Request::new("Kirill", "a@b.c"));

    assert_eq!(result, Ok(Request::new("KIRILL", "a@b.c")));
}

#[test]
fn test_blank_email_is_reported_after_name_passes() {
    let pipeline = from_step(validate_name)
        .on_success_step(validate_email)
        .on_success_transform(name_to_upper);

    let result = pipeline.run(Request::new("Kirill", ""));

    assert_eq!(result, Err(StepError::new("Email must not be blank")));
}

#[test]
fn test_parallel_validation_collects_both_errors() {
    let validate = plus(validate_name, validate_email, keep_first, StepError::aggregate);

    let error = validate(Request::new("", "")).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Aggregate);
    assert!(error.contains("Name must not be blank"));
    assert!(error.contains("Email must not be blank"));
}

#[test]
fn test_parallel_validation_through_the_facade() {
    let pipeline = from_step(|request: Request| success(request))
        .on_success_all(
            boxed(validate_name),
            [boxed(validate_email)],
            keep_first,
            StepError::aggregate,
        )
        .on_success_transform(name_to_upper);

    assert_eq!(
        pipeline.run(Request::new("Kirill", "a@b.c")),
        Ok(Request::new("KIRILL", "a@b.c"))
    );
    assert_eq!(
        pipeline.run(Request::new("", "")).unwrap_err().messages(),
        vec!["Name must not be blank", "Email must not be blank"]
    );
}
