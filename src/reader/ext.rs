//! Extension trait providing combinator methods for all readers.

use std::any::Any;

use crate::reader::boxed::BoxedReader;
use crate::reader::combinators::{
    Alt, AltValidated, AndThen, ApS, Bimap, Bind, BindTo, FilterOrElse, Flatten, Fold, GetOrElse,
    Map, MapErr, OrElse, Swap, Tap, Zip, ZipValidated,
};
use crate::reader::environment::Local;
use crate::reader::trait_def::Reader;
use crate::record::Record;
use crate::semigroup::Semigroup;

/// Extension trait providing combinator methods for all readers.
///
/// Implemented automatically for every [`Reader`]. The method names match
/// [`TaskExt`](crate::task::TaskExt) so pipelines read the same whichever
/// shape they are built on.
///
/// # Example
///
/// ```rust,ignore
/// use confluence::prelude::*;
/// use confluence::reader;
///
/// let r = reader::pure::<_, String, ()>(21)
///     .map(|x| x * 2)
///     .and_then(|x| reader::pure(x + 1))
///     .map_err(|e| format!("Error: {}", e));
///
/// assert_eq!(r.run(&()), Ok(43));
/// ```
pub trait ReaderExt: Reader + Sized {
    /// Transform the success value.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map { inner: self, f }
    }

    /// Transform the failure value.
    fn map_err<E2, F>(self, f: F) -> MapErr<Self, F>
    where
        F: Fn(Self::Error) -> E2,
    {
        MapErr { inner: self, f }
    }

    /// Transform failure with `on_error` and success with `on_value`.
    fn bimap<E2, U, F, G>(self, on_error: F, on_value: G) -> Bimap<Self, F, G>
    where
        F: Fn(Self::Error) -> E2,
        G: Fn(Self::Output) -> U,
    {
        Bimap {
            inner: self,
            on_error,
            on_value,
        }
    }

    /// Chain a dependent reader.
    ///
    /// If this reader fails, `f` is never called.
    ///
    /// ```rust,ignore
    /// let r = reader::pure::<_, String, ()>("foo")
    ///     .and_then(|s| if s.len() > 2 { reader::from_result(Ok(s.len())) } else { reader::from_result(Err("foo".into())) });
    /// assert_eq!(r.run(&()), Ok(3));
    /// ```
    fn and_then<R2, F>(self, f: F) -> AndThen<Self, F>
    where
        R2: Reader<Env = Self::Env, Error = Self::Error>,
        F: Fn(Self::Output) -> R2,
    {
        AndThen { inner: self, f }
    }

    /// Run a dependent reader, keep this reader's value.
    ///
    /// The dependent reader's failure still fails the chain.
    fn tap<R2, F>(self, f: F) -> Tap<Self, F>
    where
        R2: Reader<Env = Self::Env, Error = Self::Error>,
        F: Fn(&Self::Output) -> R2,
    {
        Tap { inner: self, f }
    }

    /// Remove one level of nesting.
    fn flatten(self) -> Flatten<Self>
    where
        Self::Output: Reader<Env = Self::Env, Error = Self::Error>,
    {
        Flatten { inner: self }
    }

    /// Fail with `on_false(&value)` unless `predicate(&value)` holds.
    ///
    /// ```rust,ignore
    /// let r = reader::pure::<_, _, ()>(7).filter_or_else(|n| *n > 10, |_| "a");
    /// assert_eq!(r.run(&()), Err("a"));
    /// ```
    fn filter_or_else<P, F>(self, predicate: P, on_false: F) -> FilterOrElse<Self, P, F>
    where
        P: Fn(&Self::Output) -> bool,
        F: Fn(&Self::Output) -> Self::Error,
    {
        FilterOrElse {
            inner: self,
            predicate,
            on_false,
        }
    }

    /// Run this reader against an environment derived from `Env2`.
    fn local<F, Env2>(self, f: F) -> Local<Self, F, Env2>
    where
        F: Fn(&Env2) -> Self::Env,
    {
        Local::new(self, f)
    }

    /// Recover from a failure with a reader built from the error.
    fn or_else<R2, F>(self, f: F) -> OrElse<Self, F>
    where
        R2: Reader<Env = Self::Env, Output = Self::Output>,
        F: Fn(Self::Error) -> R2,
    {
        OrElse { inner: self, f }
    }

    /// First-success alternative: run `fallback()` only if this fails.
    fn alt<R2, F>(self, fallback: F) -> Alt<Self, F>
    where
        R2: Reader<Env = Self::Env, Output = Self::Output, Error = Self::Error>,
        F: Fn() -> R2,
    {
        Alt {
            inner: self,
            fallback,
        }
    }

    /// Accumulating alternative: if both fail, combine both errors.
    ///
    /// ```rust,ignore
    /// let r = reader::fail::<i32, _, ()>("a".to_string())
    ///     .alt_validated(|| reader::fail("b".to_string()));
    /// assert_eq!(r.run(&()), Err("ab".to_string()));
    /// ```
    fn alt_validated<R2, F>(self, fallback: F) -> AltValidated<Self, F>
    where
        Self::Error: Semigroup,
        R2: Reader<Env = Self::Env, Output = Self::Output, Error = Self::Error>,
        F: Fn() -> R2,
    {
        AltValidated {
            inner: self,
            fallback,
        }
    }

    /// Fail-fast product with an independent reader.
    ///
    /// If this reader fails, `other` is not evaluated.
    fn zip<R2>(self, other: R2) -> Zip<Self, R2>
    where
        R2: Reader<Env = Self::Env, Error = Self::Error>,
    {
        Zip {
            first: self,
            second: other,
        }
    }

    /// Error-accumulating product with an independent reader.
    ///
    /// Both readers always run; two failures are combined left to right.
    fn zip_validated<R2>(self, other: R2) -> ZipValidated<Self, R2>
    where
        Self::Error: Semigroup,
        R2: Reader<Env = Self::Env, Error = Self::Error>,
    {
        ZipValidated {
            first: self,
            second: other,
        }
    }

    /// Fail-fast product keeping only this reader's value.
    #[allow(clippy::type_complexity)]
    fn zip_left<R2>(
        self,
        other: R2,
    ) -> Map<Zip<Self, R2>, fn((Self::Output, R2::Output)) -> Self::Output>
    where
        R2: Reader<Env = Self::Env, Error = Self::Error>,
    {
        let first: fn((Self::Output, R2::Output)) -> Self::Output = |(first, _)| first;
        self.zip(other).map(first)
    }

    /// Fail-fast product keeping only `other`'s value.
    #[allow(clippy::type_complexity)]
    fn zip_right<R2>(
        self,
        other: R2,
    ) -> Map<Zip<Self, R2>, fn((Self::Output, R2::Output)) -> R2::Output>
    where
        R2: Reader<Env = Self::Env, Error = Self::Error>,
    {
        let second: fn((Self::Output, R2::Output)) -> R2::Output = |(_, second)| second;
        self.zip(other).map(second)
    }

    /// Exchange success and failure.
    fn swap(self) -> Swap<Self> {
        Swap { inner: self }
    }

    /// Collapse both outcomes into one value.
    fn fold<B, F, G>(self, on_error: F, on_value: G) -> Fold<Self, F, G>
    where
        F: Fn(Self::Error) -> B,
        G: Fn(Self::Output) -> B,
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
        F: Fn(Self::Error) -> Self::Output,
    {
        GetOrElse { inner: self, f }
    }

    /// Start a [`Record`] holding this reader's value under `name`.
    fn bind_to(self, name: &'static str) -> BindTo<Self>
    where
        Self::Output: Any + Send + Sync,
    {
        BindTo { inner: self, name }
    }

    /// Add a field computed from the record built so far.
    ///
    /// Short-circuits on the first failure: later steps are not evaluated.
    fn bind<R2, F>(self, name: &'static str, f: F) -> Bind<Self, F>
    where
        Self: Reader<Output = Record>,
        F: Fn(&Record) -> R2,
        R2: Reader<Env = Self::Env, Error = Self::Error>,
        R2::Output: Any + Send + Sync,
    {
        Bind {
            inner: self,
            name,
            f,
        }
    }

    /// Add a field from an independent reader, fail-fast.
    fn ap_s<R2>(self, name: &'static str, field: R2) -> ApS<Self, R2>
    where
        Self: Reader<Output = Record>,
        R2: Reader<Env = Self::Env, Error = Self::Error>,
        R2::Output: Any + Send + Sync,
    {
        ApS {
            inner: self,
            name,
            field,
        }
    }

    /// Erase the concrete type.
    fn boxed(self) -> BoxedReader<Self::Env, Self::Output, Self::Error>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<R: Reader> ReaderExt for R {}
