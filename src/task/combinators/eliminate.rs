//! Combinators that fold or swap the failure channel.

use std::convert::Infallible;

use crate::task::trait_def::Task;

/// Collapse both outcomes into a single value.
///
/// Created by [`TaskExt::fold`](crate::task::TaskExt::fold).
pub struct Fold<Inner, F, G> {
    pub(crate) inner: Inner,
    pub(crate) on_error: F,
    pub(crate) on_value: G,
}

impl<Inner, F, G> std::fmt::Debug for Fold<Inner, F, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fold")
            .field("inner", &"<task>")
            .field("on_error", &"<function>")
            .field("on_value", &"<function>")
            .finish()
    }
}

impl<Inner, F, G, B> Task for Fold<Inner, F, G>
where
    Inner: Task,
    F: FnOnce(Inner::Error) -> B + Send,
    G: FnOnce(Inner::Output) -> B + Send,
    B: Send,
{
    type Output = B;
    type Error = Infallible;

    async fn run(self) -> Result<B, Infallible> {
        Ok(match self.inner.run().await {
            Ok(value) => (self.on_value)(value),
            Err(error) => (self.on_error)(error),
        })
    }
}

/// Replace a failure with a value computed from it.
///
/// Created by [`TaskExt::get_or_else`](crate::task::TaskExt::get_or_else).
pub struct GetOrElse<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for GetOrElse<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GetOrElse")
            .field("inner", &"<task>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F> Task for GetOrElse<Inner, F>
where
    Inner: Task,
    F: FnOnce(Inner::Error) -> Inner::Output + Send,
{
    type Output = Inner::Output;
    type Error = Infallible;

    async fn run(self) -> Result<Self::Output, Infallible> {
        Ok(self.inner.run().await.unwrap_or_else(self.f))
    }
}

/// Exchange the success and failure channels.
///
/// Created by [`TaskExt::swap`](crate::task::TaskExt::swap).
#[derive(Debug)]
pub struct Swap<Inner> {
    pub(crate) inner: Inner,
}

impl<Inner: Task> Task for Swap<Inner> {
    type Output = Inner::Error;
    type Error = Inner::Output;

    async fn run(self) -> Result<Inner::Error, Inner::Output> {
        match self.inner.run().await {
            Ok(value) => Err(value),
            Err(error) => Ok(error),
        }
    }
}
