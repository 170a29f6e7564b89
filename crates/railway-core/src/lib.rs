//! Railway Core
//!
//! Combinators for railway-oriented programming: composing fallible,
//! single-input steps into pipelines while keeping error handling out of the
//! business logic.
//!
//! A pipeline value travels on one of two rails. Every stage runs on the
//! success rail; the first failure switches to the failure rail, where only
//! failure handlers run until the pipeline ends.
//!
//! # Example
//!
//! ```rust
//! use railway_core::{StepError, failure, from_step, success, Result};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Request {
//!     name: String,
//! }
//!
//! fn validate_name(request: Request) -> Result<Request> {
//!     if request.name.trim().is_empty() {
//!         return failure("Name must not be blank");
//!     }
//!     success(request)
//! }
//!
//! let pipeline = from_step(validate_name).on_success_transform(|request: Request| Request {
//!     name: request.name.to_uppercase(),
//! });
//!
//! let shouted = pipeline.run(Request { name: "kirill".into() });
//! assert_eq!(shouted, Ok(Request { name: "KIRILL".into() }));
//!
//! let blank = pipeline.run(Request { name: " ".into() });
//! assert_eq!(blank, Err(StepError::new("Name must not be blank")));
//! ```

pub mod adapters;
pub mod error;
pub mod pipeline;
pub mod plus;
pub mod result;

pub use adapters::{bind, compose, double_map, map, switch, tee, try_catch};
pub use error::{ErrorKind, StepError};
pub use pipeline::{BoxStep, Pipeline, boxed, from_effect, from_step, from_transform};
pub use plus::{plus, plus_all};
pub use result::{Outcome, Rail, Result, failure, success};
