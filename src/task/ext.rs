//! Extension trait providing combinator methods for all tasks.

use std::any::Any;

use crate::record::Record;
use crate::semigroup::Semigroup;
use crate::task::boxed::BoxedTask;
use crate::task::combinators::{
    Alt, AltValidated, AndThen, ApS, Bimap, Bind, BindTo, FilterOrElse, Flatten, Fold, GetOrElse,
    Instrument, Map, MapErr, OrElse, Swap, Tap, Zip, ZipValidated,
};
use crate::task::mode::ExecutionMode;
use crate::task::trait_def::Task;

/// Extension trait providing combinator methods for all tasks.
///
/// Implemented automatically for every [`Task`]. Methods that combine
/// independent tasks take an [`ExecutionMode`] as their first argument.
///
/// # Example
///
/// ```rust,ignore
/// use confluence::prelude::*;
/// use confluence::task::{self, Parallel};
///
/// let t = task::pure::<_, String>(21)
///     .map(|x| x * 2)
///     .zip(Parallel, task::pure("ok"))
///     .map_err(|e| format!("Error: {}", e));
///
/// assert_eq!(t.run().await, Ok((42, "ok")));
/// ```
pub trait TaskExt: Task {
    /// Transform the success value.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: FnOnce(Self::Output) -> U + Send,
        U: Send,
    {
        Map { inner: self, f }
    }

    /// Transform the failure value.
    fn map_err<E2, F>(self, f: F) -> MapErr<Self, F>
    where
        F: FnOnce(Self::Error) -> E2 + Send,
        E2: Send,
    {
        MapErr { inner: self, f }
    }

    /// Transform failure with `on_error` and success with `on_value`.
    fn bimap<E2, U, F, G>(self, on_error: F, on_value: G) -> Bimap<Self, F, G>
    where
        F: FnOnce(Self::Error) -> E2 + Send,
        G: FnOnce(Self::Output) -> U + Send,
        E2: Send,
        U: Send,
    {
        Bimap {
            inner: self,
            on_error,
            on_value,
        }
    }

    /// Chain a dependent task.
    ///
    /// The next task is built from this task's value; if this task fails,
    /// `f` is never called.
    fn and_then<T2, F>(self, f: F) -> AndThen<Self, F>
    where
        T2: Task<Error = Self::Error>,
        F: FnOnce(Self::Output) -> T2 + Send,
    {
        AndThen { inner: self, f }
    }

    /// Run a dependent task, keep this task's value.
    fn tap<T2, F>(self, f: F) -> Tap<Self, F>
    where
        T2: Task<Error = Self::Error>,
        F: FnOnce(&Self::Output) -> T2 + Send,
    {
        Tap { inner: self, f }
    }

    /// Remove one level of nesting.
    fn flatten(self) -> Flatten<Self>
    where
        Self::Output: Task<Error = Self::Error>,
    {
        Flatten { inner: self }
    }

    /// Fail with `on_false(&value)` unless `predicate(&value)` holds.
    fn filter_or_else<P, F>(self, predicate: P, on_false: F) -> FilterOrElse<Self, P, F>
    where
        P: FnOnce(&Self::Output) -> bool + Send,
        F: FnOnce(&Self::Output) -> Self::Error + Send,
    {
        FilterOrElse {
            inner: self,
            predicate,
            on_false,
        }
    }

    /// Recover from a failure with a task built from the error.
    ///
    /// ```rust,ignore
    /// let t = task::fail::<i32, _>("missing")
    ///     .or_else(|e| task::pure::<_, String>(e.len() as i32));
    /// assert_eq!(t.run().await, Ok(7));
    /// ```
    fn or_else<T2, F>(self, f: F) -> OrElse<Self, F>
    where
        T2: Task<Output = Self::Output>,
        F: FnOnce(Self::Error) -> T2 + Send,
    {
        OrElse { inner: self, f }
    }

    /// First-success alternative: run `fallback()` only if this fails.
    fn alt<T2, F>(self, fallback: F) -> Alt<Self, F>
    where
        T2: Task<Output = Self::Output, Error = Self::Error>,
        F: FnOnce() -> T2 + Send,
    {
        Alt {
            inner: self,
            fallback,
        }
    }

    /// Accumulating alternative: if both fail, combine both errors.
    fn alt_validated<T2, F>(self, fallback: F) -> AltValidated<Self, F>
    where
        Self::Error: Semigroup,
        T2: Task<Output = Self::Output, Error = Self::Error>,
        F: FnOnce() -> T2 + Send,
    {
        AltValidated {
            inner: self,
            fallback,
        }
    }

    /// Fail-fast product with an independent task.
    ///
    /// ```rust,ignore
    /// let t = task::fail::<i32, _>("a").zip(Sequential, task::pure::<_, &str>(1));
    /// assert_eq!(t.run().await, Err("a"));
    /// ```
    fn zip<T2, M>(self, mode: M, other: T2) -> Zip<Self, T2, M>
    where
        T2: Task<Error = Self::Error>,
        M: ExecutionMode,
    {
        Zip {
            first: self,
            second: other,
            mode,
        }
    }

    /// Error-accumulating product with an independent task.
    ///
    /// Both tasks always run; two failures are combined left to right.
    fn zip_validated<T2, M>(self, mode: M, other: T2) -> ZipValidated<Self, T2, M>
    where
        Self::Error: Semigroup,
        T2: Task<Error = Self::Error>,
        M: ExecutionMode,
    {
        ZipValidated {
            first: self,
            second: other,
            mode,
        }
    }

    /// Fail-fast product keeping only this task's value.
    #[allow(clippy::type_complexity)]
    fn zip_left<T2, M>(
        self,
        mode: M,
        other: T2,
    ) -> Map<Zip<Self, T2, M>, fn((Self::Output, T2::Output)) -> Self::Output>
    where
        T2: Task<Error = Self::Error>,
        M: ExecutionMode,
    {
        let first: fn((Self::Output, T2::Output)) -> Self::Output = |(first, _)| first;
        self.zip(mode, other).map(first)
    }

    /// Fail-fast product keeping only `other`'s value.
    #[allow(clippy::type_complexity)]
    fn zip_right<T2, M>(
        self,
        mode: M,
        other: T2,
    ) -> Map<Zip<Self, T2, M>, fn((Self::Output, T2::Output)) -> T2::Output>
    where
        T2: Task<Error = Self::Error>,
        M: ExecutionMode,
    {
        let second: fn((Self::Output, T2::Output)) -> T2::Output = |(_, second)| second;
        self.zip(mode, other).map(second)
    }

    /// Exchange success and failure.
    fn swap(self) -> Swap<Self> {
        Swap { inner: self }
    }

    /// Collapse both outcomes into one value.
    fn fold<B, F, G>(self, on_error: F, on_value: G) -> Fold<Self, F, G>
    where
        F: FnOnce(Self::Error) -> B + Send,
        G: FnOnce(Self::Output) -> B + Send,
        B: Send,
    {
        Fold {
            inner: self,
            on_error,
            on_value,
        }
    }

    /// Replace a failure with a value computed from the error.
    fn get_or_else<F>(self, f: F) -> GetOrElse<Self, F>
    where
        F: FnOnce(Self::Error) -> Self::Output + Send,
    {
        GetOrElse { inner: self, f }
    }

    /// Start a [`Record`] holding this task's value under `name`.
    fn bind_to(self, name: &'static str) -> BindTo<Self>
    where
        Self::Output: Any + Send + Sync,
    {
        BindTo { inner: self, name }
    }

    /// Add a field computed from the record built so far.
    ///
    /// ```rust,ignore
    /// let t = task::pure::<_, String>(1)
    ///     .bind_to("a")
    ///     .bind("b", |_| task::pure("b"));
    /// let record = t.run().await?;
    /// assert_eq!(record.get::<&str>("b"), Some(&"b"));
    /// ```
    fn bind<T2, F>(self, name: &'static str, f: F) -> Bind<Self, F>
    where
        Self: Task<Output = Record>,
        F: FnOnce(&Record) -> T2 + Send,
        T2: Task<Error = Self::Error>,
        T2::Output: Any + Send + Sync,
    {
        Bind {
            inner: self,
            name,
            f,
        }
    }

    /// Add a field from an independent task, fail-fast.
    ///
    /// Under a concurrent mode the field task overlaps the record built so
    /// far; the result is the same in every mode.
    fn ap_s<T2, M>(self, mode: M, name: &'static str, field: T2) -> ApS<Self, T2, M>
    where
        Self: Task<Output = Record>,
        T2: Task<Error = Self::Error>,
        T2::Output: Any + Send + Sync,
        M: ExecutionMode,
    {
        ApS {
            inner: self,
            name,
            field,
            mode,
        }
    }

    /// Run inside a tracing span.
    ///
    /// ```rust,ignore
    /// let t = fetch_order(id).instrument(tracing::debug_span!("fetch_order", %id));
    /// ```
    fn instrument(self, span: tracing::Span) -> Instrument<Self> {
        Instrument { inner: self, span }
    }

    /// Erase the concrete type.
    fn boxed(self) -> BoxedTask<Self::Output, Self::Error>
    where
        Self: 'static,
        Self::Output: 'static,
        Self::Error: 'static,
    {
        BoxedTask::new(self)
    }
}

impl<T: Task> TaskExt for T {}
