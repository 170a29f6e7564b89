//! Adapters that lift plain functions into steps
//!
//! A step is any `Fn(T) -> Result<V>`. The adapters here turn the other
//! shapes of function into steps, or into functions over whole results:
//!
//! | adapter      | from                          | to                         |
//! |--------------|-------------------------------|----------------------------|
//! | [`switch`]   | `T -> V`                      | `T -> Result<V>`           |
//! | [`try_catch`]| `T -> Result<V>` (may panic)  | `T -> Result<V>`           |
//! | [`tee`]      | `&T -> R` (side effect)       | `T -> T`                   |
//! | [`bind`]     | `T -> Result<V>`              | `Result<T> -> Result<V>`   |
//! | [`map`]      | `T -> V`                      | `Result<T> -> Result<V>`   |
//! | [`double_map`]| `T -> V`, `E -> E`           | `Result<T> -> Result<V>`   |
//! | [`compose`]  | `A -> B`, `B -> C`            | `A -> C`                   |

use crate::error::StepError;
use crate::result::Result;
use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use tracing::warn;

/// Lift a function that cannot fail into a step that always succeeds.
pub fn switch<T, V, F>(f: F) -> impl Fn(T) -> Result<V>
where
    F: Fn(T) -> V,
{
    move |input| Ok(f(input))
}

/// Guard a step so that a panic inside it lands on the failure rail as a
/// [`StepError::Panicked`] instead of unwinding through the pipeline.
///
/// Results the step returns normally pass through unchanged. Panics can only
/// be caught when the binary is built with `panic = "unwind"`.
pub fn try_catch<T, V, S>(step: S) -> impl Fn(T) -> Result<V>
where
    S: Fn(T) -> Result<V>,
{
    move |input| {
        catch_unwind(AssertUnwindSafe(|| step(input))).unwrap_or_else(|payload| {
            let message = panic_message(payload.as_ref());
            warn!("Step panicked, switching to the failure rail: {}", message);
            Err(StepError::panicked(message))
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "step panicked with a non-string payload".to_string()
    }
}

/// Turn a dead-end action into a pass-through function. The action's return
/// value is discarded.
pub fn tee<T, R, F>(action: F) -> impl Fn(T) -> T
where
    F: Fn(&T) -> R,
{
    move |input| {
        let _ = action(&input);
        input
    }
}

/// Accept a whole result: failures pass through untouched and the step is
/// never invoked for them.
pub fn bind<T, V, S>(step: S) -> impl Fn(Result<T>) -> Result<V>
where
    S: Fn(T) -> Result<V>,
{
    move |result| result.and_then(&step)
}

pub fn map<T, V, F>(f: F) -> impl Fn(Result<T>) -> Result<V>
where
    F: Fn(T) -> V,
{
    move |result| result.map(&f)
}

/// Apply `on_success` to a success or `on_failure` to a failure.
pub fn double_map<T, V, FS, FF>(on_success: FS, on_failure: FF) -> impl Fn(Result<T>) -> Result<V>
where
    FS: Fn(T) -> V,
    FF: Fn(StepError) -> StepError,
{
    move |result| result.map(&on_success).map_err(&on_failure)
}

/// Connect two functions in series: `compose(g, f)(x) == f(g(x))`.
pub fn compose<A, B, C, G, F>(g: G, f: F) -> impl Fn(A) -> C
where
    G: Fn(A) -> B,
    F: Fn(B) -> C,
{
    move |input| f(g(input))
}
