//! Command modules for the Railway CLI

pub mod demo;
pub mod validate;

pub use demo::run_demo;
pub use validate::{ValidateArgs, run_validate};
