//! Named-field accumulator for incremental ("do-notation") building.
//!
//! A [`Record`] is what `bind_to`, `bind` and `ap_s` thread through a chain
//! of effects: an insertion-ordered set of named, type-erased values. Each
//! step can read the fields bound before it and add one more.
//!
//! ```
//! use confluence::Record;
//!
//! let record = Record::new().with("a", 1).with("b", "b");
//!
//! assert_eq!(record.get::<i32>("a"), Some(&1));
//! assert_eq!(record.get::<&str>("b"), Some(&"b"));
//! assert_eq!(record.names().collect::<Vec<_>>(), vec!["a", "b"]);
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;

type Field = Arc<dyn Any + Send + Sync>;

/// An ordered mapping from field names to values of any type.
///
/// Values are stored behind `Arc`, so cloning a record is cheap and never
/// clones the values themselves.
#[derive(Clone, Default)]
pub struct Record {
    fields: Vec<(&'static str, Field)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Record { fields: Vec::new() }
    }

    /// Add a field, returning the extended record.
    ///
    /// Binding a name that already exists replaces its value and keeps the
    /// field's original position.
    pub fn with<T>(mut self, name: &'static str, value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        self.insert(name, value);
        self
    }

    /// Add or replace a field in place.
    pub fn insert<T>(&mut self, name: &'static str, value: T)
    where
        T: Any + Send + Sync,
    {
        let value: Field = Arc::new(value);
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Look up a field by name and type.
    ///
    /// Returns `None` if the field is missing or holds a different type.
    pub fn get<T: Any>(&self, name: &str) -> Option<&T> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .and_then(|(_, value)| value.downcast_ref::<T>())
    }

    /// Whether a field with this name has been bound.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(field, _)| *field == name)
    }

    /// Field names in binding order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    /// Number of bound fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field has been bound yet.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("fields", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
