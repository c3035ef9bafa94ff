//! Reader trait definition - synchronous effects over a read-only environment.
//!
//! A `Reader` is a rule that, given an environment of type `Env`, derives a
//! `Result<Output, Error>`. Evaluation never suspends and is performed by
//! shared reference, so the same reader can be run any number of times.
//!
//! # Referential Transparency
//!
//! The combinators in this crate only store `Fn` closures and never mutate
//! their state when run, so evaluating a reader twice against equal
//! environments produces equal results as long as the closures supplied by
//! the caller are pure. The functor and applicative laws rely on this.

/// A synchronous computation that reads an environment and may fail.
///
/// Combinators return concrete types (see `ReaderExt`), so a chain of
/// readers is a plain nested struct with no allocation. Use `.boxed()` for
/// type erasure.
///
/// # Example
///
/// ```rust,ignore
/// use confluence::prelude::*;
/// use confluence::reader;
///
/// #[derive(Clone)]
/// struct Config { retries: u32 }
///
/// let retries = reader::asks::<_, String, _, _>(|cfg: &Config| cfg.retries)
///     .filter_or_else(|n| *n > 0, |_| "retries must be positive".to_string());
///
/// assert_eq!(retries.run(&Config { retries: 3 }), Ok(3));
/// ```
pub trait Reader {
    /// The environment this reader needs.
    type Env;

    /// The success type.
    type Output;

    /// The failure type.
    type Error;

    /// Evaluate against an environment.
    fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error>;
}
