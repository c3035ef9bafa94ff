//! Zero-cost combinator types for reader composition.
//!
//! These are the concrete types returned by the methods on
//! [`ReaderExt`](crate::reader::ReaderExt). Each one stores its operands
//! inline and borrows them when run.

mod and_then;
mod eliminate;
mod filter;
mod map;
mod record;
mod recover;
mod zip;

pub use and_then::{AndThen, Flatten, Tap};
pub use eliminate::{Fold, GetOrElse, Swap};
pub use filter::FilterOrElse;
pub use map::{Bimap, Map, MapErr};
pub use record::{ApS, Bind, BindTo};
pub use recover::{Alt, AltValidated, OrElse};
pub use zip::{Zip, ZipValidated};
