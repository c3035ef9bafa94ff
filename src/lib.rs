//! # Confluence
//!
//! Composable effects over `Result`, for synchronous and asynchronous code.
//!
//! Two effect shapes share one combinator surface:
//!
//! - [`Reader`] - a synchronous rule that derives a `Result` from a
//!   read-only environment, evaluated by reference as often as needed
//! - [`Task`] - a deferred asynchronous computation that resolves to a
//!   `Result` exactly once
//!
//! Both offer mapping over either channel, dependent chaining, fail-fast and
//! error-accumulating products, first-success and accumulating
//! alternatives, named-field building with [`Record`] and whole-collection
//! sequencing. Accumulating combinators require a [`Semigroup`] on the error
//! type, so combining failures without a combining rule does not compile.
//!
//! Tasks that combine independent operands take an execution mode
//! ([`Parallel`](task::Parallel), [`Sequential`](task::Sequential) or
//! [`Bounded`](task::Bounded)). The mode decides how much the operands
//! overlap in time; it never changes the result.
//!
//! ## Quick Example
//!
//! ```rust
//! use confluence::prelude::*;
//! use confluence::reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     max_items: usize,
//!     name: String,
//! }
//!
//! let max_items = reader::asks::<_, Vec<String>, _, _>(|cfg: &Config| cfg.max_items)
//!     .filter_or_else(|n| *n > 0, |_| vec!["max_items must be positive".to_string()]);
//! let name = reader::asks(|cfg: &Config| cfg.name.clone())
//!     .filter_or_else(|s| !s.is_empty(), |_| vec!["name is required".to_string()]);
//!
//! // Report every problem at once instead of stopping at the first.
//! let settings = max_items.zip_validated(name);
//!
//! let broken = Config { max_items: 0, name: String::new() };
//! assert_eq!(
//!     settings.run(&broken),
//!     Err(vec![
//!         "max_items must be positive".to_string(),
//!         "name is required".to_string(),
//!     ])
//! );
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod reader;
pub mod record;
pub mod result;
pub mod semigroup;
pub mod task;

// Re-exports
pub use reader::{Reader, ReaderExt};
pub use record::Record;
pub use result::ResultExt;
pub use semigroup::Semigroup;
pub use task::{Task, TaskExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::reader::{Reader, ReaderExt};
    pub use crate::record::Record;
    pub use crate::result::ResultExt;
    pub use crate::semigroup::Semigroup;
    pub use crate::task::{Bounded, ExecutionMode, Parallel, Sequential, Task, TaskExt};
}
