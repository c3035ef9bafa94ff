//! Functor and bifunctor mapping over readers.

use crate::reader::trait_def::Reader;

/// Transform the success value.
///
/// Created by [`ReaderExt::map`](crate::reader::ReaderExt::map).
#[derive(Debug, Clone)]
pub struct Map<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F, U> Reader for Map<Inner, F>
where
    Inner: Reader,
    F: Fn(Inner::Output) -> U,
{
    type Env = Inner::Env;
    type Output = U;
    type Error = Inner::Error;

    fn run(&self, env: &Self::Env) -> Result<U, Self::Error> {
        self.inner.run(env).map(&self.f)
    }
}

/// Transform the failure value.
///
/// Created by [`ReaderExt::map_err`](crate::reader::ReaderExt::map_err).
#[derive(Debug, Clone)]
pub struct MapErr<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F, E2> Reader for MapErr<Inner, F>
where
    Inner: Reader,
    F: Fn(Inner::Error) -> E2,
{
    type Env = Inner::Env;
    type Output = Inner::Output;
    type Error = E2;

    fn run(&self, env: &Self::Env) -> Result<Self::Output, E2> {
        self.inner.run(env).map_err(&self.f)
    }
}

/// Transform both channels in one pass.
///
/// Created by [`ReaderExt::bimap`](crate::reader::ReaderExt::bimap).
#[derive(Debug, Clone)]
pub struct Bimap<Inner, F, G> {
    pub(crate) inner: Inner,
    pub(crate) on_error: F,
    pub(crate) on_value: G,
}

impl<Inner, F, G, E2, U> Reader for Bimap<Inner, F, G>
where
    Inner: Reader,
    F: Fn(Inner::Error) -> E2,
    G: Fn(Inner::Output) -> U,
{
    type Env = Inner::Env;
    type Output = U;
    type Error = E2;

    fn run(&self, env: &Self::Env) -> Result<U, E2> {
        match self.inner.run(env) {
            Ok(value) => Ok((self.on_value)(value)),
            Err(error) => Err((self.on_error)(error)),
        }
    }
}
