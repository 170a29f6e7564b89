//! Railway Pipeline
//!
//! A composable pipeline of fallible steps. A pipeline starts from one of
//! three function shapes and grows one stage at a time:
//!
//! - [`from_step`] / [`Pipeline::on_success_step`]: `T -> Result<V>`
//! - [`from_transform`] / [`Pipeline::on_success_transform`]: `T -> V`
//! - [`from_effect`] / [`Pipeline::on_success_effect`]: `&T -> R`, value passes through
//!
//! Every function handed to a pipeline is wrapped in [`try_catch`], so a
//! panicking stage ends on the failure rail instead of unwinding out of
//! [`Pipeline::run`]. Once a stage fails, later success stages are skipped
//! and only [`Pipeline::on_failure`] stages see the error.

use crate::adapters::{bind, compose, double_map, switch, tee, try_catch};
use crate::error::StepError;
use crate::plus::plus_all;
use crate::result::{Outcome, Result};
use std::convert::identity;
use std::marker::PhantomData;
use tracing::debug;

/// A type-erased step, for collections of branches and for storing
/// pipelines in structs.
pub type BoxStep<T, V> = Box<dyn Fn(T) -> Result<V> + Send + Sync>;

/// Erase the type of a step.
pub fn boxed<T, V, F>(step: F) -> BoxStep<T, V>
where
    F: Fn(T) -> Result<V> + Send + Sync + 'static,
{
    Box::new(step)
}

/// A pipeline from `T` to `Result<V>`.
///
/// Built once, then run any number of times. A pipeline holds no state of its
/// own; it is `Send`/`Sync` whenever its stages are.
pub struct Pipeline<T, V, S> {
    step: S,
    _marker: PhantomData<fn(T) -> V>,
}

/// Start a pipeline from a step that may fail.
pub fn from_step<T, V, F>(step: F) -> Pipeline<T, V, impl Fn(T) -> Result<V>>
where
    F: Fn(T) -> Result<V>,
{
    Pipeline::new(try_catch(step))
}

/// Start a pipeline from a transform that cannot fail.
pub fn from_transform<T, V, F>(transform: F) -> Pipeline<T, V, impl Fn(T) -> Result<V>>
where
    F: Fn(T) -> V,
{
    Pipeline::new(try_catch(switch(transform)))
}

/// Start a pipeline from a side effect; the input passes through unchanged.
pub fn from_effect<T, R, F>(effect: F) -> Pipeline<T, T, impl Fn(T) -> Result<T>>
where
    F: Fn(&T) -> R,
{
    Pipeline::new(try_catch(switch(tee(effect))))
}

impl<T, V, S> Pipeline<T, V, S> {
    fn new(step: S) -> Self {
        Self {
            step,
            _marker: PhantomData,
        }
    }
}

impl<T, V, S> Pipeline<T, V, S>
where
    S: Fn(T) -> Result<V>,
{
    pub fn run(&self, input: T) -> Result<V> {
        let result = (self.step)(input);
        debug!("Pipeline finished on the {} rail", result.rail());
        result
    }

    /// Chain a step that may fail. It only runs on the success rail.
    pub fn on_success_step<W, F>(self, next: F) -> Pipeline<T, W, impl Fn(T) -> Result<W>>
    where
        F: Fn(V) -> Result<W>,
    {
        Pipeline::new(compose(self.step, bind(try_catch(next))))
    }

    /// Chain a transform that cannot fail. It only runs on the success rail.
    pub fn on_success_transform<W, F>(self, next: F) -> Pipeline<T, W, impl Fn(T) -> Result<W>>
    where
        F: Fn(V) -> W,
    {
        Pipeline::new(compose(self.step, bind(try_catch(switch(next)))))
    }

    /// Chain a side effect. It only runs on the success rail and the value
    /// passes through unchanged.
    pub fn on_success_effect<R, F>(self, effect: F) -> Pipeline<T, V, impl Fn(T) -> Result<V>>
    where
        F: Fn(&V) -> R,
    {
        Pipeline::new(compose(self.step, bind(try_catch(switch(tee(effect))))))
    }

    /// Chain parallel branches that all receive the current value.
    ///
    /// Every branch runs, each behind its own [`try_catch`], and the outcomes
    /// are merged with [`plus_all`]: successes through `aggregate_success`,
    /// failures through `aggregate_failure`, folded from the left. A panicking
    /// aggregator also lands on the failure rail.
    pub fn on_success_all<W, FS, FF>(
        self,
        first: BoxStep<V, W>,
        rest: impl IntoIterator<Item = BoxStep<V, W>>,
        aggregate_success: FS,
        aggregate_failure: FF,
    ) -> Pipeline<T, W, impl Fn(T) -> Result<W>>
    where
        V: Clone + 'static,
        W: 'static,
        FS: Fn(W, W) -> W + Send + Sync + 'static,
        FF: Fn(StepError, StepError) -> StepError + Send + Sync + 'static,
    {
        let branches = plus_all(
            guard(first),
            rest.into_iter().map(guard),
            aggregate_success,
            aggregate_failure,
        );
        Pipeline::new(compose(self.step, bind(try_catch(branches))))
    }

    /// Rewrite the error of a failed pipeline. Successes pass through.
    pub fn on_failure<F>(self, mapper: F) -> Pipeline<T, V, impl Fn(T) -> Result<V>>
    where
        F: Fn(StepError) -> StepError,
    {
        Pipeline::new(compose(self.step, try_catch(double_map(identity, mapper))))
    }

    /// Observe the error of a failed pipeline without changing it.
    pub fn on_failure_effect<R, F>(self, effect: F) -> Pipeline<T, V, impl Fn(T) -> Result<V>>
    where
        F: Fn(&StepError) -> R,
    {
        self.on_failure(tee(effect))
    }

    /// Unwrap the composed step.
    pub fn into_step(self) -> S {
        self.step
    }

    pub fn boxed(self) -> BoxStep<T, V>
    where
        S: Send + Sync + 'static,
    {
        Box::new(self.step)
    }
}

fn guard<V: 'static, W: 'static>(branch: BoxStep<V, W>) -> BoxStep<V, W> {
    Box::new(try_catch(branch))
}

impl<T, V, S> std::fmt::Debug for Pipeline<T, V, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("input", &std::any::type_name::<T>())
            .field("output", &std::any::type_name::<V>())
            .finish_non_exhaustive()
    }
}
