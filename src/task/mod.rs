//! Deferred, single-shot asynchronous effects.
//!
//! A [`Task`] describes asynchronous work that has not started yet. Running
//! it consumes the value and yields a future that resolves to a `Result`
//! exactly once:
//!
//! ```rust,ignore
//! use confluence::prelude::*;
//! use confluence::task::{self, Parallel};
//!
//! let profile = task::from_async(|| fetch_user(42))
//!     .zip(Parallel, task::from_async(|| fetch_settings(42)))
//!     .map(|(user, settings)| Profile::new(user, settings));
//!
//! let profile = profile.run().await?;
//! ```
//!
//! Combinators that merge independent tasks take an [`ExecutionMode`]
//! ([`Parallel`], [`Sequential`] or [`Bounded`]). The mode changes when
//! operands run, never what the combined result is.
//!
//! Boundary adapters turn foreign failure channels into `Result`s:
//! [`try_catch`] captures panics and [`from_callback`] wraps
//! callback-style functions. [`bracket`] guarantees release of acquired
//! resources.

pub mod boxed;
pub mod bracket;
pub mod callback;
pub mod combinators;
pub mod constructors;
pub mod ext;
pub mod mode;
pub mod sequence;
mod trait_def;

pub use trait_def::Task;

pub use boxed::BoxedTask;
pub use bracket::{bracket, bracket_full, Bracket, BracketError, BracketFull};
pub use callback::{from_callback, Callback, CallbackAdapter, FromCallback};
pub use combinators::{
    Alt, AltValidated, AndThen, ApS, Bimap, Bind, BindTo, FilterOrElse, Flatten, Fold, GetOrElse,
    Instrument, Map, MapErr, OrElse, Swap, Tap, Zip, ZipValidated,
};
pub use constructors::{
    fail, from_async, from_fn, from_option, from_predicate, from_result, pure, try_catch,
    try_catch_with, Fail, FromAsync, FromFn, FromResult, Pure, TryCatch, TryCatchWith,
};
pub use ext::TaskExt;
pub use mode::{Bounded, ExecutionMode, Parallel, Sequential};
pub use sequence::{
    sequence, sequence_validated, traverse, Sequence, SequenceValidated, Traverse,
};
