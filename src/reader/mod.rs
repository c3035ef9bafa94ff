//! Synchronous effects over a read-only environment.
//!
//! A [`Reader`] is a function from an environment to a `Result`. It never
//! suspends and is run by shared reference, so it can be evaluated as many
//! times as needed:
//!
//! ```rust,ignore
//! use confluence::prelude::*;
//! use confluence::reader;
//!
//! #[derive(Clone)]
//! struct Env { base_url: String, timeout_ms: u64 }
//!
//! let url = reader::asks::<_, String, _, _>(|env: &Env| env.base_url.clone());
//! let timeout = reader::asks(|env: &Env| env.timeout_ms)
//!     .filter_or_else(|ms| *ms > 0, |_| "timeout must be positive".to_string());
//!
//! let request = url.zip(timeout);
//! let env = Env { base_url: "http://localhost".into(), timeout_ms: 500 };
//! assert_eq!(request.run(&env), Ok(("http://localhost".to_string(), 500)));
//! ```
//!
//! Combinators are zero-cost structs (see [`combinators`]) returned by the
//! methods on [`ReaderExt`]. Collections of readers are handled by
//! [`sequence`], [`traverse`] and [`sequence_validated`].

pub mod boxed;
pub mod combinators;
pub mod constructors;
pub mod environment;
pub mod ext;
pub mod sequence;
mod trait_def;

pub use trait_def::Reader;

pub use boxed::BoxedReader;
pub use combinators::{
    Alt, AltValidated, AndThen, ApS, Bimap, Bind, BindTo, FilterOrElse, Flatten, Fold, GetOrElse,
    Map, MapErr, OrElse, Swap, Tap, Zip, ZipValidated,
};
pub use constructors::{
    ask, asks, fail, from_fn, from_option, from_predicate, from_result, local, pure, Fail, FromFn,
    FromResult, Pure,
};
pub use environment::{Ask, Asks, Local};
pub use ext::ReaderExt;
pub use sequence::{
    sequence, sequence_validated, traverse, Sequence, SequenceValidated, Traverse,
};

#[cfg(test)]
mod tests;
