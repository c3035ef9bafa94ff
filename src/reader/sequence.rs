//! Whole-collection sequencing of readers.
//!
//! - [`sequence`] - run readers in order, stop at the first failure
//! - [`traverse`] - build one reader per item, then sequence them
//! - [`sequence_validated`] - run every reader, combining all failures

use crate::reader::trait_def::Reader;
use crate::semigroup::Semigroup;

/// Fail-fast sequencing of an ordered collection of readers.
///
/// Created by [`sequence`].
#[derive(Debug, Clone)]
pub struct Sequence<R> {
    readers: Vec<R>,
}

impl<R: Reader> Reader for Sequence<R> {
    type Env = R::Env;
    type Output = Vec<R::Output>;
    type Error = R::Error;

    fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        self.readers.iter().map(|reader| reader.run(env)).collect()
    }
}

/// Fail-fast traversal: one reader per item, built when run.
///
/// Created by [`traverse`].
pub struct Traverse<T, F> {
    items: Vec<T>,
    f: F,
}

impl<T, F> std::fmt::Debug for Traverse<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Traverse")
            .field("items", &self.items.len())
            .field("f", &"<function>")
            .finish()
    }
}

impl<T, F, R> Reader for Traverse<T, F>
where
    F: Fn(&T) -> R,
    R: Reader,
{
    type Env = R::Env;
    type Output = Vec<R::Output>;
    type Error = R::Error;

    fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        self.items.iter().map(|item| (self.f)(item).run(env)).collect()
    }
}

/// Error-accumulating sequencing.
///
/// Created by [`sequence_validated`].
#[derive(Debug, Clone)]
pub struct SequenceValidated<R> {
    readers: Vec<R>,
}

impl<R> Reader for SequenceValidated<R>
where
    R: Reader,
    R::Error: Semigroup,
{
    type Env = R::Env;
    type Output = Vec<R::Output>;
    type Error = R::Error;

    fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        let mut values = Vec::with_capacity(self.readers.len());
        let mut failure: Option<R::Error> = None;

        for reader in &self.readers {
            match reader.run(env) {
                Ok(value) => values.push(value),
                Err(error) => {
                    failure = Some(match failure {
                        Some(previous) => previous.combine(error),
                        None => error,
                    })
                }
            }
        }

        match failure {
            Some(error) => Err(error),
            None => Ok(values),
        }
    }
}

/// Turn an ordered collection of readers into a reader of the collection.
///
/// Readers run in order; the first failure (by position) is returned and
/// the remaining readers are not evaluated.
///
/// ```rust,ignore
/// let all = reader::sequence(vec![reader::pure::<_, String, ()>(1), reader::pure(2)]);
/// assert_eq!(all.run(&()), Ok(vec![1, 2]));
/// ```
pub fn sequence<R, I>(readers: I) -> Sequence<R>
where
    R: Reader,
    I: IntoIterator<Item = R>,
{
    Sequence {
        readers: readers.into_iter().collect(),
    }
}

/// Map each item to a reader and sequence the results, fail-fast.
pub fn traverse<T, F, R, I>(items: I, f: F) -> Traverse<T, F>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> R,
    R: Reader,
{
    Traverse {
        items: items.into_iter().collect(),
        f,
    }
}

/// Run every reader and combine all failures in collection order.
pub fn sequence_validated<R, I>(readers: I) -> SequenceValidated<R>
where
    R: Reader,
    R::Error: Semigroup,
    I: IntoIterator<Item = R>,
{
    SequenceValidated {
        readers: readers.into_iter().collect(),
    }
}
