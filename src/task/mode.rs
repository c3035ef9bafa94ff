//! Execution modes for combining independent tasks.
//!
//! The combining combinators (`zip`, `zip_validated`, `ap_s`, `sequence`,
//! `traverse`, `sequence_validated`) take a mode value and delegate the
//! scheduling of their operands to it:
//!
//! - [`Parallel`] - start every operand before awaiting any of them
//! - [`Sequential`] - start operand *n + 1* only after operand *n* finished
//! - [`Bounded`] - like `Parallel`, with at most `limit` operands in flight
//!
//! Modes only change wall-clock overlap. For identical inputs every mode
//! produces the same `Result`: values keep their positions and the failure
//! reported by a fail-fast combinator is the first one by position, never
//! the first one by time.
//!
//! # Example
//!
//! ```rust,ignore
//! use confluence::task::{self, Parallel, Sequential};
//!
//! let checks = |mode| task::traverse(mode, 0..10, |x| task::from_predicate(x, |x| *x > 5, |x| *x));
//!
//! assert_eq!(checks(Parallel).run().await, Err(0));
//! assert_eq!(checks(Sequential).run().await, Err(0));
//! ```

use std::future::Future;

use futures::stream::{self, StreamExt};

use crate::task::trait_def::Task;

/// Scheduling strategy for independent tasks.
///
/// Implemented by [`Parallel`], [`Sequential`] and [`Bounded`]. Callers pick
/// an instance; combinators never inspect which one they were given.
pub trait ExecutionMode: Copy + Send + Sync + 'static {
    /// Run two tasks and pair their values, fail-fast.
    ///
    /// If both fail, the first task's failure is reported.
    fn run_zip<A, B>(
        self,
        first: A,
        second: B,
    ) -> impl Future<Output = Result<(A::Output, B::Output), A::Error>> + Send
    where
        A: Task,
        B: Task<Error = A::Error>;

    /// Run two tasks to completion and return both outcomes.
    #[allow(clippy::type_complexity)]
    fn run_both<A, B>(
        self,
        first: A,
        second: B,
    ) -> impl Future<Output = (Result<A::Output, A::Error>, Result<B::Output, B::Error>)> + Send
    where
        A: Task,
        B: Task;

    /// Run an ordered collection of tasks, fail-fast.
    ///
    /// Yields all values in order, or the failure with the lowest index.
    fn run_sequence<T: Task>(
        self,
        tasks: Vec<T>,
    ) -> impl Future<Output = Result<Vec<T::Output>, T::Error>> + Send;

    /// Run every task in a collection and return all outcomes in order.
    fn run_all<T: Task>(
        self,
        tasks: Vec<T>,
    ) -> impl Future<Output = Vec<Result<T::Output, T::Error>>> + Send;
}

/// Start all operands concurrently, assemble the result once all resolved.
///
/// A fail-fast combinator still waits for every operand, so a later failure
/// is never left unobserved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parallel;

impl ExecutionMode for Parallel {
    async fn run_zip<A, B>(self, first: A, second: B) -> Result<(A::Output, B::Output), A::Error>
    where
        A: Task,
        B: Task<Error = A::Error>,
    {
        let (first, second) = futures::join!(first.run(), second.run());
        Ok((first?, second?))
    }

    async fn run_both<A, B>(
        self,
        first: A,
        second: B,
    ) -> (Result<A::Output, A::Error>, Result<B::Output, B::Error>)
    where
        A: Task,
        B: Task,
    {
        futures::join!(first.run(), second.run())
    }

    async fn run_sequence<T: Task>(self, tasks: Vec<T>) -> Result<Vec<T::Output>, T::Error> {
        let results = futures::future::join_all(tasks.into_iter().map(T::run)).await;
        results.into_iter().collect()
    }

    async fn run_all<T: Task>(self, tasks: Vec<T>) -> Vec<Result<T::Output, T::Error>> {
        futures::future::join_all(tasks.into_iter().map(T::run)).await
    }
}

/// Run operands one at a time in program order.
///
/// Fail-fast combinators stop at the first failure without starting the
/// remaining operands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sequential;

impl ExecutionMode for Sequential {
    async fn run_zip<A, B>(self, first: A, second: B) -> Result<(A::Output, B::Output), A::Error>
    where
        A: Task,
        B: Task<Error = A::Error>,
    {
        let first = first.run().await?;
        let second = second.run().await?;
        Ok((first, second))
    }

    async fn run_both<A, B>(
        self,
        first: A,
        second: B,
    ) -> (Result<A::Output, A::Error>, Result<B::Output, B::Error>)
    where
        A: Task,
        B: Task,
    {
        let first = first.run().await;
        let second = second.run().await;
        (first, second)
    }

    async fn run_sequence<T: Task>(self, tasks: Vec<T>) -> Result<Vec<T::Output>, T::Error> {
        let total = tasks.len();
        let mut values = Vec::with_capacity(total);
        for task in tasks {
            match task.run().await {
                Ok(value) => values.push(value),
                Err(error) => {
                    tracing::trace!(
                        index = values.len(),
                        skipped = total - values.len() - 1,
                        "sequential run stopped at first failure"
                    );
                    return Err(error);
                }
            }
        }
        Ok(values)
    }

    async fn run_all<T: Task>(self, tasks: Vec<T>) -> Vec<Result<T::Output, T::Error>> {
        let mut results = Vec::with_capacity(tasks.len());
        for task in tasks {
            results.push(task.run().await);
        }
        results
    }
}

/// Concurrent execution with at most `limit` operands in flight.
///
/// Every operand runs, including after a failure, and results are kept in
/// index order.
///
/// ```rust,ignore
/// let mode = Bounded::new(4);
/// let pages = task::traverse(mode, urls, |url| fetch(url));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounded {
    limit: usize,
}

impl Bounded {
    /// Create a bounded mode. A limit of 0 is treated as 1.
    pub fn new(limit: usize) -> Self {
        Bounded {
            limit: limit.max(1),
        }
    }

    /// Maximum number of operands in flight.
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl ExecutionMode for Bounded {
    async fn run_zip<A, B>(self, first: A, second: B) -> Result<(A::Output, B::Output), A::Error>
    where
        A: Task,
        B: Task<Error = A::Error>,
    {
        let (first, second) = self.run_both(first, second).await;
        Ok((first?, second?))
    }

    async fn run_both<A, B>(
        self,
        first: A,
        second: B,
    ) -> (Result<A::Output, A::Error>, Result<B::Output, B::Error>)
    where
        A: Task,
        B: Task,
    {
        if self.limit > 1 {
            Parallel.run_both(first, second).await
        } else {
            Sequential.run_both(first, second).await
        }
    }

    async fn run_sequence<T: Task>(self, tasks: Vec<T>) -> Result<Vec<T::Output>, T::Error> {
        self.run_all(tasks).await.into_iter().collect()
    }

    async fn run_all<T: Task>(self, tasks: Vec<T>) -> Vec<Result<T::Output, T::Error>> {
        stream::iter(tasks)
            .map(T::run)
            .buffered(self.limit)
            .collect()
            .await
    }
}
