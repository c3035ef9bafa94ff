//! Dependent sequencing of readers.

use crate::reader::trait_def::Reader;

/// Chain a dependent reader.
///
/// Runs the inner reader, feeds its value to `f` and runs the reader `f`
/// returns against the same environment. A failure short-circuits: `f` is
/// never called.
///
/// Created by [`ReaderExt::and_then`](crate::reader::ReaderExt::and_then).
pub struct AndThen<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for AndThen<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AndThen")
            .field("inner", &"<reader>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, R2> Reader for AndThen<Inner, F>
where
    Inner: Reader,
    R2: Reader<Env = Inner::Env, Error = Inner::Error>,
    F: Fn(Inner::Output) -> R2,
{
    type Env = Inner::Env;
    type Output = R2::Output;
    type Error = Inner::Error;

    fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        let value = self.inner.run(env)?;
        (self.f)(value).run(env)
    }
}

/// Run a dependent reader for its failure only, keeping the original value.
///
/// Created by [`ReaderExt::tap`](crate::reader::ReaderExt::tap).
pub struct Tap<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for Tap<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tap")
            .field("inner", &"<reader>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, R2> Reader for Tap<Inner, F>
where
    Inner: Reader,
    R2: Reader<Env = Inner::Env, Error = Inner::Error>,
    F: Fn(&Inner::Output) -> R2,
{
    type Env = Inner::Env;
    type Output = Inner::Output;
    type Error = Inner::Error;

    fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        let value = self.inner.run(env)?;
        (self.f)(&value).run(env)?;
        Ok(value)
    }
}

/// Remove one level of nesting from a reader that yields a reader.
///
/// Created by [`ReaderExt::flatten`](crate::reader::ReaderExt::flatten).
#[derive(Debug, Clone)]
pub struct Flatten<Inner> {
    pub(crate) inner: Inner,
}

impl<Inner> Reader for Flatten<Inner>
where
    Inner: Reader,
    Inner::Output: Reader<Env = Inner::Env, Error = Inner::Error>,
{
    type Env = Inner::Env;
    type Output = <Inner::Output as Reader>::Output;
    type Error = Inner::Error;

    fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        self.inner.run(env)?.run(env)
    }
}
