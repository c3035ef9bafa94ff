//! Zero-cost combinator types for task composition.
//!
//! These are the concrete types returned by the methods on
//! [`TaskExt`](crate::task::TaskExt). Each one owns its operands and is
//! consumed when run.

mod and_then;
mod eliminate;
mod filter;
mod instrument;
mod map;
mod record;
mod recover;
mod zip;

pub use and_then::{AndThen, Flatten, Tap};
pub use eliminate::{Fold, GetOrElse, Swap};
pub use filter::FilterOrElse;
pub use instrument::Instrument;
pub use map::{Bimap, Map, MapErr};
pub use record::{ApS, Bind, BindTo};
pub use recover::{Alt, AltValidated, OrElse};
pub use zip::{Zip, ZipValidated};
