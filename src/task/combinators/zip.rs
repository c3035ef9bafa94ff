//! Applicative combination of independent tasks.
//!
//! Both products take an [`ExecutionMode`] that decides whether the two
//! operands overlap. The mode never changes the result.

use crate::semigroup::Semigroup;
use crate::task::mode::ExecutionMode;
use crate::task::trait_def::Task;

/// Fail-fast product of two tasks.
///
/// If both fail, the first task's failure is reported. Under
/// [`Sequential`](crate::task::Sequential) the second task is not started
/// once the first has failed.
///
/// Created by [`TaskExt::zip`](crate::task::TaskExt::zip).
#[derive(Debug)]
pub struct Zip<T1, T2, M> {
    pub(crate) first: T1,
    pub(crate) second: T2,
    pub(crate) mode: M,
}

impl<T1, T2, M> Task for Zip<T1, T2, M>
where
    T1: Task,
    T2: Task<Error = T1::Error>,
    M: ExecutionMode,
{
    type Output = (T1::Output, T2::Output);
    type Error = T1::Error;

    async fn run(self) -> Result<Self::Output, Self::Error> {
        self.mode.run_zip(self.first, self.second).await
    }
}

/// Error-accumulating product of two tasks.
///
/// Both tasks always run to completion. Two failures are combined left to
/// right; a single failure propagates unchanged.
///
/// Created by [`TaskExt::zip_validated`](crate::task::TaskExt::zip_validated).
#[derive(Debug)]
pub struct ZipValidated<T1, T2, M> {
    pub(crate) first: T1,
    pub(crate) second: T2,
    pub(crate) mode: M,
}

impl<T1, T2, M> Task for ZipValidated<T1, T2, M>
where
    T1: Task,
    T1::Error: Semigroup,
    T2: Task<Error = T1::Error>,
    M: ExecutionMode,
{
    type Output = (T1::Output, T2::Output);
    type Error = T1::Error;

    async fn run(self) -> Result<Self::Output, Self::Error> {
        match self.mode.run_both(self.first, self.second).await {
            (Ok(a), Ok(b)) => Ok((a, b)),
            (Err(e1), Err(e2)) => Err(e1.combine(e2)),
            (Err(e), Ok(_)) | (Ok(_), Err(e)) => Err(e),
        }
    }
}
