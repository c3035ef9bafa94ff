//! Functor and bifunctor mapping over tasks.

use crate::task::trait_def::Task;

/// Transform the success value of a task.
///
/// Created by [`TaskExt::map`](crate::task::TaskExt::map).
pub struct Map<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for Map<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("inner", &"<task>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, U> Task for Map<Inner, F>
where
    Inner: Task,
    F: FnOnce(Inner::Output) -> U + Send,
    U: Send,
{
    type Output = U;
    type Error = Inner::Error;

    async fn run(self) -> Result<U, Self::Error> {
        let value = self.inner.run().await?;
        Ok((self.f)(value))
    }
}

/// Transform the failure value of a task.
///
/// Created by [`TaskExt::map_err`](crate::task::TaskExt::map_err).
pub struct MapErr<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for MapErr<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapErr")
            .field("inner", &"<task>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, E2> Task for MapErr<Inner, F>
where
    Inner: Task,
    F: FnOnce(Inner::Error) -> E2 + Send,
    E2: Send,
{
    type Output = Inner::Output;
    type Error = E2;

    async fn run(self) -> Result<Self::Output, E2> {
        self.inner.run().await.map_err(self.f)
    }
}

/// Transform both channels in one pass.
///
/// Created by [`TaskExt::bimap`](crate::task::TaskExt::bimap).
pub struct Bimap<Inner, F, G> {
    pub(crate) inner: Inner,
    pub(crate) on_error: F,
    pub(crate) on_value: G,
}

impl<Inner, F, G> std::fmt::Debug for Bimap<Inner, F, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bimap")
            .field("inner", &"<task>")
            .field("on_error", &"<function>")
            .field("on_value", &"<function>")
            .finish()
    }
}

impl<Inner, F, G, E2, U> Task for Bimap<Inner, F, G>
where
    Inner: Task,
    F: FnOnce(Inner::Error) -> E2 + Send,
    G: FnOnce(Inner::Output) -> U + Send,
    E2: Send,
    U: Send,
{
    type Output = U;
    type Error = E2;

    async fn run(self) -> Result<U, E2> {
        match self.inner.run().await {
            Ok(value) => Ok((self.on_value)(value)),
            Err(error) => Err((self.on_error)(error)),
        }
    }
}
