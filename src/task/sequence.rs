//! Whole-collection sequencing of tasks.
//!
//! - [`sequence`] - ordered values, or the first failure by index
//! - [`traverse`] - build one task per item, then sequence them
//! - [`sequence_validated`] - run everything, combine all failures
//!
//! Each function takes an [`ExecutionMode`]; the result does not depend on
//! which one.

use crate::semigroup::Semigroup;
use crate::task::mode::ExecutionMode;
use crate::task::trait_def::Task;

/// Fail-fast sequencing of an ordered collection of tasks.
///
/// Created by [`sequence`].
#[derive(Debug)]
pub struct Sequence<T, M> {
    tasks: Vec<T>,
    mode: M,
}

impl<T: Task, M: ExecutionMode> Task for Sequence<T, M> {
    type Output = Vec<T::Output>;
    type Error = T::Error;

    async fn run(self) -> Result<Self::Output, Self::Error> {
        self.mode.run_sequence(self.tasks).await
    }
}

/// Fail-fast traversal over a collection of items.
///
/// Created by [`traverse`].
pub struct Traverse<I, F, M> {
    items: Vec<I>,
    f: F,
    mode: M,
}

impl<I, F, M: std::fmt::Debug> std::fmt::Debug for Traverse<I, F, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Traverse")
            .field("items", &self.items.len())
            .field("f", &"<function>")
            .field("mode", &self.mode)
            .finish()
    }
}

impl<I, F, T, M> Task for Traverse<I, F, M>
where
    I: Send,
    F: FnMut(I) -> T + Send,
    T: Task,
    M: ExecutionMode,
{
    type Output = Vec<T::Output>;
    type Error = T::Error;

    async fn run(self) -> Result<Self::Output, Self::Error> {
        let tasks: Vec<T> = self.items.into_iter().map(self.f).collect();
        self.mode.run_sequence(tasks).await
    }
}

/// Error-accumulating sequencing.
///
/// Created by [`sequence_validated`].
#[derive(Debug)]
pub struct SequenceValidated<T, M> {
    tasks: Vec<T>,
    mode: M,
}

impl<T, M> Task for SequenceValidated<T, M>
where
    T: Task,
    T::Error: Semigroup,
    M: ExecutionMode,
{
    type Output = Vec<T::Output>;
    type Error = T::Error;

    async fn run(self) -> Result<Self::Output, Self::Error> {
        let results = self.mode.run_all(self.tasks).await;
        let mut values = Vec::with_capacity(results.len());
        let mut failure: Option<T::Error> = None;

        for result in results {
            match result {
                Ok(value) => values.push(value),
                Err(error) => {
                    failure = Some(match failure {
                        Some(previous) => previous.combine(error),
                        None => error,
                    })
                }
            }
        }

        match failure {
            Some(error) => Err(error),
            None => Ok(values),
        }
    }
}

/// Turn an ordered collection of tasks into a task of the collection.
///
/// Values keep their positions. On failure, the reported error is the one
/// with the lowest index even if a later task failed earlier in time.
///
/// ```rust,ignore
/// let all = task::sequence(Parallel, vec![task::pure::<_, String>(1), task::pure(2)]);
/// assert_eq!(all.run().await, Ok(vec![1, 2]));
/// ```
pub fn sequence<T, M, I>(mode: M, tasks: I) -> Sequence<T, M>
where
    T: Task,
    M: ExecutionMode,
    I: IntoIterator<Item = T>,
{
    Sequence {
        tasks: tasks.into_iter().collect(),
        mode,
    }
}

/// Map each item to a task and sequence the results, fail-fast.
///
/// `f` only builds the tasks; whether they run concurrently is up to `mode`.
pub fn traverse<I, F, T, M, It>(mode: M, items: It, f: F) -> Traverse<I, F, M>
where
    It: IntoIterator<Item = I>,
    F: FnMut(I) -> T + Send,
    T: Task,
    M: ExecutionMode,
{
    Traverse {
        items: items.into_iter().collect(),
        f,
        mode,
    }
}

/// Run every task and combine all failures in collection order.
///
/// ```rust,ignore
/// let checks = task::sequence_validated(Parallel, vec![
///     task::from_result::<i32, _>(Err(vec!["a"])),
///     task::from_result(Ok(1)),
///     task::from_result(Err(vec!["b"])),
/// ]);
/// assert_eq!(checks.run().await, Err(vec!["a", "b"]));
/// ```
pub fn sequence_validated<T, M, I>(mode: M, tasks: I) -> SequenceValidated<T, M>
where
    T: Task,
    T::Error: Semigroup,
    M: ExecutionMode,
    I: IntoIterator<Item = T>,
{
    SequenceValidated {
        tasks: tasks.into_iter().collect(),
        mode,
    }
}
