//! Recovery and alternative strategies.
//!
//! - [`OrElse`] - recover using the failure value
//! - [`Alt`] - first success wins
//! - [`AltValidated`] - first success wins, two failures are combined

use crate::semigroup::Semigroup;
use crate::task::trait_def::Task;

/// Substitute a recovery task built from the failure.
///
/// Created by [`TaskExt::or_else`](crate::task::TaskExt::or_else).
pub struct OrElse<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for OrElse<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrElse")
            .field("inner", &"<task>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, T2> Task for OrElse<Inner, F>
where
    Inner: Task,
    F: FnOnce(Inner::Error) -> T2 + Send,
    T2: Task<Output = Inner::Output>,
{
    type Output = Inner::Output;
    type Error = T2::Error;

    async fn run(self) -> Result<Self::Output, Self::Error> {
        match self.inner.run().await {
            Ok(value) => Ok(value),
            Err(error) => (self.f)(error).run().await,
        }
    }
}

/// First-success alternative.
///
/// The fallback is only built and run when the primary task fails.
///
/// Created by [`TaskExt::alt`](crate::task::TaskExt::alt).
pub struct Alt<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) fallback: F,
}

impl<Inner, F> std::fmt::Debug for Alt<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alt")
            .field("inner", &"<task>")
            .field("fallback", &"<function>")
            .finish()
    }
}

impl<Inner, F, T2> Task for Alt<Inner, F>
where
    Inner: Task,
    F: FnOnce() -> T2 + Send,
    T2: Task<Output = Inner::Output, Error = Inner::Error>,
{
    type Output = Inner::Output;
    type Error = Inner::Error;

    async fn run(self) -> Result<Self::Output, Self::Error> {
        match self.inner.run().await {
            Ok(value) => Ok(value),
            Err(_) => (self.fallback)().run().await,
        }
    }
}

/// Error-accumulating alternative.
///
/// If the primary fails the fallback always runs; if the fallback fails
/// too, the result is `primary_error.combine(fallback_error)`.
///
/// Created by [`TaskExt::alt_validated`](crate::task::TaskExt::alt_validated).
pub struct AltValidated<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) fallback: F,
}

impl<Inner, F> std::fmt::Debug for AltValidated<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AltValidated")
            .field("inner", &"<task>")
            .field("fallback", &"<function>")
            .finish()
    }
}

impl<Inner, F, T2> Task for AltValidated<Inner, F>
where
    Inner: Task,
    Inner::Error: Semigroup,
    F: FnOnce() -> T2 + Send,
    T2: Task<Output = Inner::Output, Error = Inner::Error>,
{
    type Output = Inner::Output;
    type Error = Inner::Error;

    async fn run(self) -> Result<Self::Output, Self::Error> {
        match self.inner.run().await {
            Ok(value) => Ok(value),
            Err(first) => (self.fallback)()
                .run()
                .await
                .map_err(|second| first.combine(second)),
        }
    }
}
