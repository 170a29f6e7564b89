//! Demo Command
//!
//! Walks the sample requests through the sequential and parallel pipelines,
//! one line per run.

use crate::commands::validate::render;
use crate::request::Request;
use crate::validation::{ValidationOptions, build_pipeline};
use starbase::AppResult;

/// The sample requests: blank name, blank email, a valid one, and both blank.
pub fn sample_requests() -> Vec<Request> {
    vec![
        Request::new("", "a@b.c"),
        Request::new("Kirill", ""),
        Request::new("Kirill", "a@b.c"),
        Request::new("", ""),
    ]
}

/// Render every sample request through both pipelines.
pub fn demo_lines() -> Vec<String> {
    let modes = [
        ("sequential", ValidationOptions::default()),
        (
            "parallel",
            ValidationOptions {
                parallel: true,
                ..Default::default()
            },
        ),
    ];

    let mut lines = Vec::new();
    for (label, options) in modes {
        let pipeline = build_pipeline(options);
        for request in sample_requests() {
            let summary = format!("{{Name: {:?}, Email: {:?}}}", request.name, request.email);
            let result = pipeline(request);
            lines.push(format!("[{}] {} => {}", label, summary, render(&result)));
        }
    }
    lines
}

pub fn run_demo() -> AppResult {
    for line in demo_lines() {
        println!("{}", line);
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_covers_both_modes() {
        let lines = demo_lines();
        assert_eq!(lines.len(), 2 * sample_requests().len());
        assert!(lines.iter().any(|l| l.starts_with("[sequential]") && l.contains("KIRILL - a@b.c")));
        assert!(
            lines
                .iter()
                .any(|l| l.starts_with("[parallel]") && l.contains("Name must not be blank; Email must not be blank"))
        );
    }
}
