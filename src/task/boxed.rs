//! BoxedTask - type-erased task for opt-in boxing.
//!
//! Use `BoxedTask` when you need to:
//! - Store different task types in a collection
//! - Return different tasks from match arms
//! - Create recursive task functions

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::task::trait_def::Task;

/// A type-erased task.
///
/// # Example
///
/// ```rust,ignore
/// use confluence::prelude::*;
/// use confluence::task::{self, BoxedTask};
///
/// fn countdown(n: i32) -> BoxedTask<i32, String> {
///     if n <= 0 {
///         task::pure(0).boxed()
///     } else {
///         task::pure(n)
///             .and_then(move |x| countdown(x - 1).map(move |sum| x + sum))
///             .boxed()
///     }
/// }
/// ```
pub struct BoxedTask<T, E> {
    run_fn: Box<dyn FnOnce() -> BoxFuture<'static, Result<T, E>> + Send>,
}

impl<T, E> std::fmt::Debug for BoxedTask<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxedTask")
            .field("run_fn", &"<function>")
            .finish()
    }
}

impl<T, E> BoxedTask<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Box any task. The task is not started until the box is run.
    pub fn new<Tk>(task: Tk) -> Self
    where
        Tk: Task<Output = T, Error = E> + 'static,
    {
        BoxedTask {
            run_fn: Box::new(move || task.run().boxed()),
        }
    }
}

impl<T: Send, E: Send> Task for BoxedTask<T, E> {
    type Output = T;
    type Error = E;

    async fn run(self) -> Result<T, E> {
        (self.run_fn)().await
    }
}
