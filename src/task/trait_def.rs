//! Task trait definition - deferred, single-shot asynchronous effects.
//!
//! A `Task` describes work that has not started yet. Nothing happens until
//! [`Task::run`] is called and the returned future is polled; running
//! consumes the task, so each value is invoked at most once.
//!
//! # Design
//!
//! This follows the same pattern as `Future` and `Iterator`:
//! - Combinators return concrete types (zero-cost abstractions)
//! - Use `.boxed()` when type erasure is needed

use std::future::Future;

/// A deferred computation that eventually yields a `Result`.
///
/// # Type Parameters
///
/// * `Output` - The success type (must be `Send`)
/// * `Error` - The failure type (must be `Send`)
///
/// # Example
///
/// ```rust,ignore
/// use confluence::prelude::*;
/// use confluence::task;
///
/// fn fetch_user(id: u64) -> impl Task<Output = User, Error = DbError> {
///     task::from_async(move || db::load_user(id))
///         .filter_or_else(|user| user.active, |_| DbError::Inactive)
/// }
/// ```
pub trait Task: Sized + Send {
    /// The success type produced by this task.
    type Output: Send;

    /// The failure type that may be produced.
    type Error: Send;

    /// Start the deferred work.
    ///
    /// The returned future resolves exactly once. There is no timeout: if
    /// the underlying work never completes, neither does the future.
    fn run(self) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send;
}
