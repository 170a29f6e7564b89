//! Parallel aggregation of steps
//!
//! [`plus`] runs two steps against the same input and merges their outcomes.
//! Unlike the sequential adapters it never short-circuits: both branches
//! always run, so side effects in either branch happen even when the other
//! branch fails. This is what lets a validation pipeline report every broken
//! rule at once.

use crate::error::StepError;
use crate::pipeline::BoxStep;
use crate::result::Result;
use std::sync::Arc;

/// Combine two steps evaluated against the same input.
///
/// | first        | second       | result                                   |
/// |--------------|--------------|------------------------------------------|
/// | `Ok(a)`      | `Ok(b)`      | `Ok(aggregate_success(a, b))`            |
/// | `Err(e)`     | `Ok(_)`      | `Err(e)`                                 |
/// | `Ok(_)`      | `Err(e)`     | `Err(e)`                                 |
/// | `Err(e1)`    | `Err(e2)`    | `Err(aggregate_failure(e1, e2))`         |
///
/// The input is cloned for the first branch. Both branches run on the
/// calling thread, first then second; callers must not depend on that order.
pub fn plus<T, A, B, V, S1, S2, FS, FF>(
    first: S1,
    second: S2,
    aggregate_success: FS,
    aggregate_failure: FF,
) -> impl Fn(T) -> Result<V>
where
    T: Clone,
    S1: Fn(T) -> Result<A>,
    S2: Fn(T) -> Result<B>,
    FS: Fn(A, B) -> V,
    FF: Fn(StepError, StepError) -> StepError,
{
    move |input: T| {
        let left = first(input.clone());
        let right = second(input);
        match (left, right) {
            (Ok(a), Ok(b)) => Ok(aggregate_success(a, b)),
            (Err(error), Ok(_)) | (Ok(_), Err(error)) => Err(error),
            (Err(e1), Err(e2)) => Err(aggregate_failure(e1, e2)),
        }
    }
}

/// Fold any number of branches with [`plus`], pairwise from the left:
/// `plus(plus(plus(first, r1), r2), r3)`.
///
/// The aggregators are applied in that nesting, so with a non-associative
/// aggregator the outcome depends on the order of `rest`. With a single
/// branch the result is `first` itself.
pub fn plus_all<T, V, FS, FF>(
    first: BoxStep<T, V>,
    rest: impl IntoIterator<Item = BoxStep<T, V>>,
    aggregate_success: FS,
    aggregate_failure: FF,
) -> BoxStep<T, V>
where
    T: Clone + 'static,
    V: 'static,
    FS: Fn(V, V) -> V + Send + Sync + 'static,
    FF: Fn(StepError, StepError) -> StepError + Send + Sync + 'static,
{
    let aggregate_success = Arc::new(aggregate_success);
    let aggregate_failure = Arc::new(aggregate_failure);

    rest.into_iter().fold(first, |acc, next| {
        let on_success = Arc::clone(&aggregate_success);
        let on_failure = Arc::clone(&aggregate_failure);
        let combined: BoxStep<T, V> = Box::new(plus(
            acc,
            next,
            move |a: V, b: V| on_success(a, b),
            move |e1: StepError, e2: StepError| on_failure(e1, e2),
        ));
        combined
    })
}
