//! Railway CLI Library
//!
//! Request validation built on `railway-core`, exposed for the binary and
//! for testing.

pub mod commands;
pub mod error;
pub mod logging;
pub mod request;
pub mod validation;

pub use error::CliError;
pub use request::Request;
pub use validation::{ValidationOptions, build_pipeline};
