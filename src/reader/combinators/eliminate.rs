//! Combinators that reshape or remove the failure channel.

use std::convert::Infallible;

use crate::reader::trait_def::Reader;

/// Collapse both outcomes into one value; the result cannot fail.
///
/// Created by [`ReaderExt::fold`](crate::reader::ReaderExt::fold).
#[derive(Debug, Clone)]
pub struct Fold<Inner, F, G> {
    pub(crate) inner: Inner,
    pub(crate) on_error: F,
    pub(crate) on_value: G,
}

impl<Inner, F, G, B> Reader for Fold<Inner, F, G>
where
    Inner: Reader,
    F: Fn(Inner::Error) -> B,
    G: Fn(Inner::Output) -> B,
{
    type Env = Inner::Env;
    type Output = B;
    type Error = Infallible;

    fn run(&self, env: &Self::Env) -> Result<B, Infallible> {
        Ok(match self.inner.run(env) {
            Ok(value) => (self.on_value)(value),
            Err(error) => (self.on_error)(error),
        })
    }
}

/// Replace a failure with a value computed from it.
///
/// Created by [`ReaderExt::get_or_else`](crate::reader::ReaderExt::get_or_else).
#[derive(Debug, Clone)]
pub struct GetOrElse<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> Reader for GetOrElse<Inner, F>
where
    Inner: Reader,
    F: Fn(Inner::Error) -> Inner::Output,
{
    type Env = Inner::Env;
    type Output = Inner::Output;
    type Error = Infallible;

    fn run(&self, env: &Self::Env) -> Result<Self::Output, Infallible> {
        Ok(self.inner.run(env).unwrap_or_else(&self.f))
    }
}

/// Exchange success and failure.
///
/// Created by [`ReaderExt::swap`](crate::reader::ReaderExt::swap).
#[derive(Debug, Clone)]
pub struct Swap<Inner> {
    pub(crate) inner: Inner,
}

impl<Inner: Reader> Reader for Swap<Inner> {
    type Env = Inner::Env;
    type Output = Inner::Error;
    type Error = Inner::Output;

    fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        match self.inner.run(env) {
            Ok(value) => Err(value),
            Err(error) => Ok(error),
        }
    }
}
