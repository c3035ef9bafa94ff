//! Constructor functions for creating tasks.
//!
//! All constructors are lazy: closures and futures are only invoked once
//! the task is run.

use std::any::Any;
use std::future::Future;
use std::marker::PhantomData;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use crate::task::trait_def::Task;

/// A task that succeeds with a value.
///
/// Created by [`pure`].
#[derive(Debug, Clone)]
pub struct Pure<T, E> {
    value: T,
    _phantom: PhantomData<fn() -> E>,
}

impl<T: Send, E: Send> Task for Pure<T, E> {
    type Output = T;
    type Error = E;

    async fn run(self) -> Result<T, E> {
        Ok(self.value)
    }
}

/// A task that fails with an error.
///
/// Created by [`fail`].
#[derive(Debug, Clone)]
pub struct Fail<T, E> {
    error: E,
    _phantom: PhantomData<fn() -> T>,
}

impl<T: Send, E: Send> Task for Fail<T, E> {
    type Output = T;
    type Error = E;

    async fn run(self) -> Result<T, E> {
        Err(self.error)
    }
}

/// A task lifted from an existing `Result`.
///
/// Created by [`from_result`], [`from_option`] and [`from_predicate`].
#[derive(Debug, Clone)]
pub struct FromResult<T, E> {
    result: Result<T, E>,
}

impl<T: Send, E: Send> Task for FromResult<T, E> {
    type Output = T;
    type Error = E;

    async fn run(self) -> Result<T, E> {
        self.result
    }
}

/// A task backed by a synchronous thunk, called when the task runs.
///
/// Created by [`from_fn`].
pub struct FromFn<F> {
    f: F,
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").field("f", &"<function>").finish()
    }
}

impl<F, T, E> Task for FromFn<F>
where
    F: FnOnce() -> Result<T, E> + Send,
    T: Send,
    E: Send,
{
    type Output = T;
    type Error = E;

    async fn run(self) -> Result<T, E> {
        (self.f)()
    }
}

/// A task backed by a future factory, called when the task runs.
///
/// Created by [`from_async`].
pub struct FromAsync<F> {
    f: F,
}

impl<F> std::fmt::Debug for FromAsync<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromAsync").field("f", &"<function>").finish()
    }
}

impl<F, Fut, T, E> Task for FromAsync<F>
where
    F: FnOnce() -> Fut + Send,
    Fut: Future<Output = Result<T, E>> + Send,
    T: Send,
    E: Send,
{
    type Output = T;
    type Error = E;

    async fn run(self) -> Result<T, E> {
        (self.f)().await
    }
}

/// A task that captures panics as failures.
///
/// Created by [`try_catch`].
pub struct TryCatch<F> {
    f: F,
}

impl<F> std::fmt::Debug for TryCatch<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryCatch").field("f", &"<function>").finish()
    }
}

impl<F, Fut, T> Task for TryCatch<F>
where
    F: FnOnce() -> Fut + Send,
    Fut: Future<Output = T> + Send,
    T: Send,
{
    type Output = T;
    type Error = Box<dyn Any + Send>;

    async fn run(self) -> Result<T, Self::Error> {
        let future = std::panic::catch_unwind(AssertUnwindSafe(self.f))?;
        AssertUnwindSafe(future).catch_unwind().await
    }
}

/// A task over a fallible future that also maps panics into its error type.
///
/// Created by [`try_catch_with`].
pub struct TryCatchWith<F, H> {
    f: F,
    on_panic: H,
}

impl<F, H> std::fmt::Debug for TryCatchWith<F, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryCatchWith")
            .field("f", &"<function>")
            .field("on_panic", &"<function>")
            .finish()
    }
}

impl<F, H, Fut, T, E> Task for TryCatchWith<F, H>
where
    F: FnOnce() -> Fut + Send,
    Fut: Future<Output = Result<T, E>> + Send,
    H: FnOnce(Box<dyn Any + Send>) -> E + Send,
    T: Send,
    E: Send,
{
    type Output = T;
    type Error = E;

    async fn run(self) -> Result<T, E> {
        let on_panic = self.on_panic;
        let future = match std::panic::catch_unwind(AssertUnwindSafe(self.f)) {
            Ok(future) => future,
            Err(payload) => return Err(on_panic(payload)),
        };
        match AssertUnwindSafe(future).catch_unwind().await {
            Ok(result) => result,
            Err(payload) => Err(on_panic(payload)),
        }
    }
}

/// Create a task that succeeds with `value`.
///
/// ```rust,ignore
/// let t = task::pure::<_, String>(42);
/// assert_eq!(t.run().await, Ok(42));
/// ```
pub fn pure<T: Send, E: Send>(value: T) -> Pure<T, E> {
    Pure {
        value,
        _phantom: PhantomData,
    }
}

/// Create a task that fails with `error`.
pub fn fail<T: Send, E: Send>(error: E) -> Fail<T, E> {
    Fail {
        error,
        _phantom: PhantomData,
    }
}

/// Lift a `Result` into a task.
pub fn from_result<T: Send, E: Send>(result: Result<T, E>) -> FromResult<T, E> {
    FromResult { result }
}

/// Lift an `Option`, failing with `on_none()` when it is empty.
pub fn from_option<T: Send, E: Send>(
    option: Option<T>,
    on_none: impl FnOnce() -> E,
) -> FromResult<T, E> {
    from_result(option.ok_or_else(on_none))
}

/// Succeed with `value` if it satisfies `predicate`, otherwise fail with
/// `on_false(&value)`.
///
/// ```rust,ignore
/// let t = task::from_predicate(3, |x| *x > 5, |x| *x);
/// assert_eq!(t.run().await, Err(3));
/// ```
pub fn from_predicate<T: Send, E: Send>(
    value: T,
    predicate: impl FnOnce(&T) -> bool,
    on_false: impl FnOnce(&T) -> E,
) -> FromResult<T, E> {
    let result = if predicate(&value) {
        Ok(value)
    } else {
        Err(on_false(&value))
    };
    from_result(result)
}

/// Create a task from a synchronous thunk.
///
/// The thunk runs when the task is run, not when it is created.
pub fn from_fn<T, E, F>(f: F) -> FromFn<F>
where
    F: FnOnce() -> Result<T, E> + Send,
    T: Send,
    E: Send,
{
    FromFn { f }
}

/// Create a task from a function returning a future.
///
/// ```rust,ignore
/// let t = task::from_async(|| async { Ok::<_, String>(42) });
/// assert_eq!(t.run().await, Ok(42));
/// ```
pub fn from_async<T, E, F, Fut>(f: F) -> FromAsync<F>
where
    F: FnOnce() -> Fut + Send,
    Fut: Future<Output = Result<T, E>> + Send,
    T: Send,
    E: Send,
{
    FromAsync { f }
}

/// Wrap a computation that may panic.
///
/// A panic while creating or polling the future becomes the failure value,
/// passed through verbatim as the panic payload.
///
/// ```rust,ignore
/// let t = task::try_catch(|| async { panic!("rejected") as i32 });
/// let payload = t.run().await.unwrap_err();
/// assert_eq!(payload.downcast_ref::<&str>(), Some(&"rejected"));
/// ```
pub fn try_catch<T, F, Fut>(f: F) -> TryCatch<F>
where
    F: FnOnce() -> Fut + Send,
    Fut: Future<Output = T> + Send,
    T: Send,
{
    TryCatch { f }
}

/// Wrap a fallible computation that may also panic.
///
/// An `Err` from the future is kept as is; a panic is turned into an error
/// by `on_panic`.
pub fn try_catch_with<T, E, F, Fut, H>(f: F, on_panic: H) -> TryCatchWith<F, H>
where
    F: FnOnce() -> Fut + Send,
    Fut: Future<Output = Result<T, E>> + Send,
    H: FnOnce(Box<dyn Any + Send>) -> E + Send,
    T: Send,
    E: Send,
{
    TryCatchWith { f, on_panic }
}
