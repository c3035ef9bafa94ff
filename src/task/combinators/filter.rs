//! Predicate guard over a task's success value.

use crate::task::trait_def::Task;

/// Turn a success into a failure when a predicate does not hold.
///
/// Created by [`TaskExt::filter_or_else`](crate::task::TaskExt::filter_or_else).
pub struct FilterOrElse<Inner, P, F> {
    pub(crate) inner: Inner,
    pub(crate) predicate: P,
    pub(crate) on_false: F,
}

impl<Inner, P, F> std::fmt::Debug for FilterOrElse<Inner, P, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterOrElse")
            .field("inner", &"<task>")
            .field("predicate", &"<function>")
            .field("on_false", &"<function>")
            .finish()
    }
}

impl<Inner, P, F> Task for FilterOrElse<Inner, P, F>
where
    Inner: Task,
    P: FnOnce(&Inner::Output) -> bool + Send,
    F: FnOnce(&Inner::Output) -> Inner::Error + Send,
{
    type Output = Inner::Output;
    type Error = Inner::Error;

    async fn run(self) -> Result<Self::Output, Self::Error> {
        let value = self.inner.run().await?;
        if (self.predicate)(&value) {
            Ok(value)
        } else {
            Err((self.on_false)(&value))
        }
    }
}
