//! Validate Command
//!
//! Runs one request through the validation pipeline and reports which rail
//! it ended on.

use crate::request::Request;
use crate::validation::{ValidationOptions, build_pipeline};
use anyhow::Context;
use miette::IntoDiagnostic;
use owo_colors::OwoColorize;
use railway_core::{Outcome, Result as StepResult};
use serde::Serialize;
use starbase::AppResult;
use std::path::PathBuf;
use tracing::debug;

/// Exit code when the request fails validation
pub const EXIT_INVALID: u8 = 1;
/// Exit code when the request could not be loaded
pub const EXIT_BAD_INPUT: u8 = 2;

/// Arguments of the validate command
#[derive(Debug, Clone, Default)]
pub struct ValidateArgs {
    pub name: Option<String>,
    pub email: Option<String>,
    pub request: Option<PathBuf>,
    pub options: ValidationOptions,
    pub json: bool,
}

/// JSON output for the validate command
#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<Request>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ValidateOutput {
    pub fn from_result(result: &StepResult<Request>) -> Self {
        match result {
            Ok(request) => Self {
                success: true,
                request: Some(request.clone()),
                kind: None,
                errors: Vec::new(),
            },
            Err(error) => Self {
                success: false,
                request: None,
                kind: Some(error.kind().to_string()),
                errors: error.messages(),
            },
        }
    }
}

/// Build the request from the optional file and the field overrides.
pub fn resolve_request(args: &ValidateArgs) -> anyhow::Result<Request> {
    let base = match &args.request {
        Some(path) => Request::load(path)
            .with_context(|| format!("Failed to load request from {}", path.display()))?,
        None => Request::default(),
    };
    Ok(base.with_overrides(args.name.clone(), args.email.clone()))
}

/// Human-readable line for a validation result.
pub fn render(result: &StepResult<Request>) -> String {
    match result {
        Ok(request) => format!("{} {} - {}", "Success.".green(), request.name, request.email),
        Err(error) => format!("{} {}", "Failure:".red(), error),
    }
}

/// Run the validate command.
pub fn run_validate(args: ValidateArgs) -> AppResult {
    let request = match resolve_request(&args) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("{:#}", e);
            return Ok(Some(EXIT_BAD_INPUT));
        }
    };

    let pipeline = build_pipeline(args.options);
    let result = pipeline(request);
    debug!("Validation ended on the {} rail", result.rail());

    if args.json {
        let output = ValidateOutput::from_result(&result);
        let json = serde_json::to_string_pretty(&output).into_diagnostic()?;
        println!("{}", json);
    } else {
        println!("{}", render(&result));
    }

    if result.is_success() {
        Ok(None)
    } else {
        Ok(Some(EXIT_INVALID))
    }
}
