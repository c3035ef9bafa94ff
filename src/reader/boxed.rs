//! Type erasure for readers.
//!
//! `Reader` is object safe, so boxing is just `Box<dyn Reader<..>>`. The
//! blanket impls below let boxed and shared readers compose like any other.

use std::sync::Arc;

use crate::reader::trait_def::Reader;

/// A type-erased reader.
///
/// Use it to store different reader types in one collection, to return
/// different readers from match arms, or to write recursive readers.
///
/// ```rust,ignore
/// let readers: Vec<BoxedReader<(), i32, String>> = vec![
///     reader::pure(1).boxed(),
///     reader::pure(2).map(|x| x * 2).boxed(),
/// ];
/// ```
pub type BoxedReader<Env, T, E> = Box<dyn Reader<Env = Env, Output = T, Error = E> + Send + Sync>;

impl<R: Reader + ?Sized> Reader for Box<R> {
    type Env = R::Env;
    type Output = R::Output;
    type Error = R::Error;

    fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        (**self).run(env)
    }
}

impl<R: Reader + ?Sized> Reader for Arc<R> {
    type Env = R::Env;
    type Output = R::Output;
    type Error = R::Error;

    fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        (**self).run(env)
    }
}

impl<R: Reader + ?Sized> Reader for &R {
    type Env = R::Env;
    type Output = R::Output;
    type Error = R::Error;

    fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        (**self).run(env)
    }
}
