//! Shared fixtures for the acceptance suite
//!
//! [`StageLog`] records which pipeline stages ran, so scenarios can assert
//! that stages after a failure were skipped.

use railway::Request;
use railway::validation::{validate_email, validate_name};
use railway_core::{BoxStep, Result, boxed};
use std::sync::{Arc, Mutex};

/// Ordered record of stage names, shared by the steps that write to it.
#[derive(Debug, Clone, Default)]
pub struct StageLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl StageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, stage: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(stage.to_string());
        }
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Wrap a step so that every call is recorded under `stage`.
    pub fn track<F>(&self, stage: &'static str, step: F) -> BoxStep<Request, Request>
    where
        F: Fn(Request) -> Result<Request> + Send + Sync + 'static,
    {
        let log = self.clone();
        boxed(move |request: Request| {
            log.record(stage);
            step(request)
        })
    }

    pub fn name_validator(&self) -> BoxStep<Request, Request> {
        self.track("validate_name", validate_name)
    }

    pub fn email_validator(&self) -> BoxStep<Request, Request> {
        self.track("validate_email", validate_email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_records_each_call() {
        let log = StageLog::new();
        let step = log.name_validator();

        assert!(step(Request::new("Kirill", "")).is_ok());
        assert!(step(Request::new("", "")).is_err());
        assert_eq!(log.entries(), vec!["validate_name", "validate_name"]);
    }
}
