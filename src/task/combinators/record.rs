//! Named-field building over tasks.

use std::any::Any;

use crate::record::Record;
use crate::task::mode::ExecutionMode;
use crate::task::trait_def::Task;

/// Start a record from a single named value.
///
/// Created by [`TaskExt::bind_to`](crate::task::TaskExt::bind_to).
#[derive(Debug)]
pub struct BindTo<Inner> {
    pub(crate) inner: Inner,
    pub(crate) name: &'static str,
}

impl<Inner> Task for BindTo<Inner>
where
    Inner: Task,
    Inner::Output: Any + Send + Sync,
{
    type Output = Record;
    type Error = Inner::Error;

    async fn run(self) -> Result<Record, Self::Error> {
        let value = self.inner.run().await?;
        Ok(Record::new().with(self.name, value))
    }
}

/// Compute one more field from the fields bound so far.
///
/// Steps run in declaration order and the chain stops at the first failure.
///
/// Created by [`TaskExt::bind`](crate::task::TaskExt::bind).
pub struct Bind<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) name: &'static str,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for Bind<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bind")
            .field("inner", &"<task>")
            .field("name", &self.name)
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, T2> Task for Bind<Inner, F>
where
    Inner: Task<Output = Record>,
    F: FnOnce(&Record) -> T2 + Send,
    T2: Task<Error = Inner::Error>,
    T2::Output: Any + Send + Sync,
{
    type Output = Record;
    type Error = Inner::Error;

    async fn run(self) -> Result<Record, Self::Error> {
        let record = self.inner.run().await?;
        let next = (self.f)(&record);
        let value = next.run().await?;
        Ok(record.with(self.name, value))
    }
}

/// Add an independently computed field using the fail-fast product.
///
/// Created by [`TaskExt::ap_s`](crate::task::TaskExt::ap_s).
#[derive(Debug)]
pub struct ApS<Inner, T2, M> {
    pub(crate) inner: Inner,
    pub(crate) name: &'static str,
    pub(crate) field: T2,
    pub(crate) mode: M,
}

impl<Inner, T2, M> Task for ApS<Inner, T2, M>
where
    Inner: Task<Output = Record>,
    T2: Task<Error = Inner::Error>,
    T2::Output: Any + Send + Sync,
    M: ExecutionMode,
{
    type Output = Record;
    type Error = Inner::Error;

    async fn run(self) -> Result<Record, Self::Error> {
        let (record, value) = self.mode.run_zip(self.inner, self.field).await?;
        Ok(record.with(self.name, value))
    }
}
