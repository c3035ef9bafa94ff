//! Dependent composition of tasks.

use crate::task::trait_def::Task;

/// Chain a task computed from the previous success value.
///
/// If the inner task fails, `f` is never called.
///
/// Created by [`TaskExt::and_then`](crate::task::TaskExt::and_then).
pub struct AndThen<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for AndThen<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AndThen")
            .field("inner", &"<task>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, T2> Task for AndThen<Inner, F>
where
    Inner: Task,
    F: FnOnce(Inner::Output) -> T2 + Send,
    T2: Task<Error = Inner::Error>,
{
    type Output = T2::Output;
    type Error = Inner::Error;

    async fn run(self) -> Result<Self::Output, Self::Error> {
        let value = self.inner.run().await?;
        (self.f)(value).run().await
    }
}

/// Run a dependent task for its effect, keeping the original value.
///
/// Created by [`TaskExt::tap`](crate::task::TaskExt::tap).
pub struct Tap<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for Tap<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tap")
            .field("inner", &"<task>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, T2> Task for Tap<Inner, F>
where
    Inner: Task,
    F: FnOnce(&Inner::Output) -> T2 + Send,
    T2: Task<Error = Inner::Error>,
{
    type Output = Inner::Output;
    type Error = Inner::Error;

    async fn run(self) -> Result<Self::Output, Self::Error> {
        let value = self.inner.run().await?;
        let side = (self.f)(&value);
        side.run().await?;
        Ok(value)
    }
}

/// Remove one level of task nesting.
///
/// Created by [`TaskExt::flatten`](crate::task::TaskExt::flatten).
#[derive(Debug)]
pub struct Flatten<Inner> {
    pub(crate) inner: Inner,
}

impl<Inner> Task for Flatten<Inner>
where
    Inner: Task,
    Inner::Output: Task<Error = Inner::Error>,
{
    type Output = <Inner::Output as Task>::Output;
    type Error = Inner::Error;

    async fn run(self) -> Result<Self::Output, Self::Error> {
        self.inner.run().await?.run().await
    }
}
