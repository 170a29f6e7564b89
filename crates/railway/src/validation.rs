//! Request validation pipelines
//!
//! The validators are plain functions; the pipelines decide how they are
//! connected. The sequential pipeline stops at the first broken rule, the
//! parallel one runs every validator and reports all failures together.

use crate::request::Request;
use railway_core::{BoxStep, Result, StepError, boxed, failure, from_effect, from_step, success};
use tracing::debug;

pub const NAME_BLANK: &str = "Name must not be blank";
pub const EMAIL_BLANK: &str = "Email must not be blank";
pub const FAILING_FOR_FUN: &str = "I am failing just for fun";

/// How the validation pipeline is assembled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Run both validators and collect every failure.
    pub parallel: bool,
    /// Skip the stage that upper-cases the name.
    pub keep_case: bool,
    /// Add a stage that panics, to exercise panic containment.
    pub fail_for_fun: bool,
}

pub fn validate_name(request: Request) -> Result<Request> {
    if request.name.trim().is_empty() {
        return failure(NAME_BLANK);
    }
    success(request)
}

pub fn validate_email(request: Request) -> Result<Request> {
    if request.email.trim().is_empty() {
        return failure(EMAIL_BLANK);
    }
    success(request)
}

pub fn name_to_upper(request: Request) -> Request {
    Request {
        name: request.name.to_uppercase(),
        ..request
    }
}

pub fn fail_for_fun(_request: Request) -> Result<Request> {
    panic!("{}", FAILING_FOR_FUN)
}

/// Both validators passed the same request through; keep one copy.
fn keep_first(first: Request, _second: Request) -> Request {
    first
}

fn log_request(request: &Request) {
    debug!("Validating request name={:?} email={:?}", request.name, request.email);
}

/// Assemble the validation pipeline for the given options.
pub fn build_pipeline(options: ValidationOptions) -> BoxStep<Request, Request> {
    let validated = if options.parallel {
        from_effect(log_request)
            .on_success_all(
                boxed(validate_name),
                [boxed(validate_email)],
                keep_first,
                StepError::aggregate,
            )
            .boxed()
    } else {
        from_effect(log_request)
            .on_success_step(validate_name)
            .on_success_step(validate_email)
            .boxed()
    };

    let checked = if options.fail_for_fun {
        from_step(validated).on_success_step(fail_for_fun).boxed()
    } else {
        validated
    };

    if options.keep_case {
        checked
    } else {
        from_step(checked).on_success_transform(name_to_upper).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use railway_core::ErrorKind;
    use rstest::rstest;

    #[rstest]
    #[case("", "a@b.c", Err(StepError::new(NAME_BLANK)))]
    #[case("Kirill", "", Err(StepError::new(EMAIL_BLANK)))]
    #[case("", "", Err(StepError::new(NAME_BLANK)))]
    #[case("  ", "a@b.c", Err(StepError::new(NAME_BLANK)))]
    #[case("Kirill", "a@b.c", Ok(Request::new("KIRILL", "a@b.c")))]
    fn test_sequential_pipeline(
        #[case] name: &str,
        #[case] email: &str,
        #[case] expected: Result<Request>,
    ) {
        let pipeline = build_pipeline(ValidationOptions::default());
        assert_eq!(pipeline(Request::new(name, email)), expected);
    }

    #[test]
    fn test_keep_case_leaves_name_alone() {
        let pipeline = build_pipeline(ValidationOptions {
            keep_case: true,
            ..Default::default()
        });
        assert_eq!(
            pipeline(Request::new("Kirill", "a@b.c")),
            Ok(Request::new("Kirill", "a@b.c"))
        );
    }

    #[test]
    fn test_parallel_pipeline_reports_both_errors() {
        let pipeline = build_pipeline(ValidationOptions {
            parallel: true,
            ..Default::default()
        });

        let error = pipeline(Request::new("", "")).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Aggregate);
        assert_eq!(error.messages(), vec![NAME_BLANK, EMAIL_BLANK]);
    }

    #[test]
    fn test_parallel_pipeline_with_one_failure_keeps_it_unchanged() {
        let pipeline = build_pipeline(ValidationOptions {
            parallel: true,
            ..Default::default()
        });
        assert_eq!(
            pipeline(Request::new("Kirill", "")),
            Err(StepError::new(EMAIL_BLANK))
        );
    }

    #[test]
    fn test_fail_for_fun_is_contained() {
        let pipeline = build_pipeline(ValidationOptions {
            fail_for_fun: true,
            ..Default::default()
        });
        assert_eq!(
            pipeline(Request::new("Kirill", "a@b.c")),
            Err(StepError::panicked(FAILING_FOR_FUN))
        );
    }

    #[test]
    fn test_fail_for_fun_never_runs_after_a_validation_failure() {
        let pipeline = build_pipeline(ValidationOptions {
            fail_for_fun: true,
            ..Default::default()
        });
        assert_eq!(
            pipeline(Request::new("", "a@b.c")),
            Err(StepError::new(NAME_BLANK))
        );
    }
}
