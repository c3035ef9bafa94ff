//! Recovery and alternative strategies for readers.
//!
//! - `OrElse` - handler sees the failure and may change the error type
//! - `Alt` - first success: try a fallback when the primary fails
//! - `AltValidated` - like `Alt`, but a failing fallback combines both errors

use crate::reader::trait_def::Reader;
use crate::semigroup::Semigroup;

/// Substitute a recovery reader on failure.
///
/// Created by [`ReaderExt::or_else`](crate::reader::ReaderExt::or_else).
pub struct OrElse<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for OrElse<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrElse")
            .field("inner", &"<reader>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, R2> Reader for OrElse<Inner, F>
where
    Inner: Reader,
    R2: Reader<Env = Inner::Env, Output = Inner::Output>,
    F: Fn(Inner::Error) -> R2,
{
    type Env = Inner::Env;
    type Output = Inner::Output;
    type Error = R2::Error;

    fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        match self.inner.run(env) {
            Ok(value) => Ok(value),
            Err(error) => (self.f)(error).run(env),
        }
    }
}

/// First-success alternative.
///
/// The fallback is only built and run if the primary fails; its result is
/// adopted as is.
///
/// Created by [`ReaderExt::alt`](crate::reader::ReaderExt::alt).
pub struct Alt<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) fallback: F,
}

impl<Inner, F> std::fmt::Debug for Alt<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alt")
            .field("inner", &"<reader>")
            .field("fallback", &"<function>")
            .finish()
    }
}

impl<Inner, F, R2> Reader for Alt<Inner, F>
where
    Inner: Reader,
    R2: Reader<Env = Inner::Env, Output = Inner::Output, Error = Inner::Error>,
    F: Fn() -> R2,
{
    type Env = Inner::Env;
    type Output = Inner::Output;
    type Error = Inner::Error;

    fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        self.inner.run(env).or_else(|_| (self.fallback)().run(env))
    }
}

/// Error-accumulating alternative.
///
/// If the primary fails the fallback always runs; if the fallback fails
/// too, the result is `Err(primary.combine(fallback))`.
///
/// Created by [`ReaderExt::alt_validated`](crate::reader::ReaderExt::alt_validated).
pub struct AltValidated<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) fallback: F,
}

impl<Inner, F> std::fmt::Debug for AltValidated<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AltValidated")
            .field("inner", &"<reader>")
            .field("fallback", &"<function>")
            .finish()
    }
}

impl<Inner, F, R2> Reader for AltValidated<Inner, F>
where
    Inner: Reader,
    Inner::Error: Semigroup,
    R2: Reader<Env = Inner::Env, Output = Inner::Output, Error = Inner::Error>,
    F: Fn() -> R2,
{
    type Env = Inner::Env;
    type Output = Inner::Output;
    type Error = Inner::Error;

    fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        match self.inner.run(env) {
            Ok(value) => Ok(value),
            Err(first) => (self.fallback)()
                .run(env)
                .map_err(|second| first.combine(second)),
        }
    }
}
