//! Applicative combination of independent readers.

use crate::reader::trait_def::Reader;
use crate::semigroup::Semigroup;

/// Fail-fast product of two readers.
///
/// The first reader runs first; if it fails the second is not evaluated.
///
/// Created by [`ReaderExt::zip`](crate::reader::ReaderExt::zip).
#[derive(Debug, Clone)]
pub struct Zip<R1, R2> {
    pub(crate) first: R1,
    pub(crate) second: R2,
}

impl<R1, R2> Reader for Zip<R1, R2>
where
    R1: Reader,
    R2: Reader<Env = R1::Env, Error = R1::Error>,
{
    type Env = R1::Env;
    type Output = (R1::Output, R2::Output);
    type Error = R1::Error;

    fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        let first = self.first.run(env)?;
        let second = self.second.run(env)?;
        Ok((first, second))
    }
}

/// Error-accumulating product of two readers.
///
/// Both readers are always evaluated. Two failures are combined left to
/// right; a single failure propagates unchanged.
///
/// Created by [`ReaderExt::zip_validated`](crate::reader::ReaderExt::zip_validated).
#[derive(Debug, Clone)]
pub struct ZipValidated<R1, R2> {
    pub(crate) first: R1,
    pub(crate) second: R2,
}

impl<R1, R2> Reader for ZipValidated<R1, R2>
where
    R1: Reader,
    R1::Error: Semigroup,
    R2: Reader<Env = R1::Env, Error = R1::Error>,
{
    type Env = R1::Env;
    type Output = (R1::Output, R2::Output);
    type Error = R1::Error;

    fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        match (self.first.run(env), self.second.run(env)) {
            (Ok(a), Ok(b)) => Ok((a, b)),
            (Err(e1), Err(e2)) => Err(e1.combine(e2)),
            (Err(e), Ok(_)) | (Ok(_), Err(e)) => Err(e),
        }
    }
}
