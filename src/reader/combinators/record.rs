//! Named-field building over readers.
//!
//! ```rust,ignore
//! let user = reader::pure::<_, String, ()>(1)
//!     .bind_to("a")
//!     .bind("b", |_| reader::pure("b"));
//!
//! let record = user.run(&())?;
//! assert_eq!(record.get::<i32>("a"), Some(&1));
//! ```

use std::any::Any;

use crate::reader::trait_def::Reader;
use crate::record::Record;

/// Start a record from a single named value.
///
/// Created by [`ReaderExt::bind_to`](crate::reader::ReaderExt::bind_to).
#[derive(Debug, Clone)]
pub struct BindTo<Inner> {
    pub(crate) inner: Inner,
    pub(crate) name: &'static str,
}

impl<Inner> Reader for BindTo<Inner>
where
    Inner: Reader,
    Inner::Output: Any + Send + Sync,
{
    type Env = Inner::Env;
    type Output = Record;
    type Error = Inner::Error;

    fn run(&self, env: &Self::Env) -> Result<Record, Self::Error> {
        let value = self.inner.run(env)?;
        Ok(Record::new().with(self.name, value))
    }
}

/// Compute one more field from the fields bound so far.
///
/// Created by [`ReaderExt::bind`](crate::reader::ReaderExt::bind).
pub struct Bind<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) name: &'static str,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for Bind<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bind")
            .field("inner", &"<reader>")
            .field("name", &self.name)
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, R2> Reader for Bind<Inner, F>
where
    Inner: Reader<Output = Record>,
    F: Fn(&Record) -> R2,
    R2: Reader<Env = Inner::Env, Error = Inner::Error>,
    R2::Output: Any + Send + Sync,
{
    type Env = Inner::Env;
    type Output = Record;
    type Error = Inner::Error;

    fn run(&self, env: &Self::Env) -> Result<Record, Self::Error> {
        let record = self.inner.run(env)?;
        let value = (self.f)(&record).run(env)?;
        Ok(record.with(self.name, value))
    }
}

/// Add an independently computed field, fail-fast.
///
/// Created by [`ReaderExt::ap_s`](crate::reader::ReaderExt::ap_s).
#[derive(Debug, Clone)]
pub struct ApS<Inner, R2> {
    pub(crate) inner: Inner,
    pub(crate) name: &'static str,
    pub(crate) field: R2,
}

impl<Inner, R2> Reader for ApS<Inner, R2>
where
    Inner: Reader<Output = Record>,
    R2: Reader<Env = Inner::Env, Error = Inner::Error>,
    R2::Output: Any + Send + Sync,
{
    type Env = Inner::Env;
    type Output = Record;
    type Error = Inner::Error;

    fn run(&self, env: &Self::Env) -> Result<Record, Self::Error> {
        let record = self.inner.run(env)?;
        let value = self.field.run(env)?;
        Ok(record.with(self.name, value))
    }
}
