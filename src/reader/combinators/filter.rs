//! FilterOrElse combinator - turn a success into a failure.

use crate::reader::trait_def::Reader;

/// Fail with `on_false(&value)` when the predicate rejects the value.
///
/// Created by [`ReaderExt::filter_or_else`](crate::reader::ReaderExt::filter_or_else).
#[derive(Debug, Clone)]
pub struct FilterOrElse<Inner, P, F> {
    pub(crate) inner: Inner,
    pub(crate) predicate: P,
    pub(crate) on_false: F,
}

impl<Inner, P, F> Reader for FilterOrElse<Inner, P, F>
where
    Inner: Reader,
    P: Fn(&Inner::Output) -> bool,
    F: Fn(&Inner::Output) -> Inner::Error,
{
    type Env = Inner::Env;
    type Output = Inner::Output;
    type Error = Inner::Error;

    fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        let value = self.inner.run(env)?;
        if (self.predicate)(&value) {
            Ok(value)
        } else {
            Err((self.on_false)(&value))
        }
    }
}
