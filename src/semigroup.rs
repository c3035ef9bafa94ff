//! The combining rule used by accumulating strategies.
//!
//! A `Semigroup` is a type with an associative binary operation. The
//! accumulating applicative (`zip_validated`, `sequence_validated`) and the
//! accumulating alternative (`alt_validated`) require it as a type bound on
//! the error channel: without an implementation, accumulation does not
//! typecheck.
//!
//! # Law
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use confluence::Semigroup;
//!
//! assert_eq!("a".to_string().combine("b".to_string()), "ab");
//! assert_eq!(vec![1].combine(vec![2, 3]), vec![1, 2, 3]);
//! assert_eq!(
//!     (vec![1], "x".to_string()).combine((vec![2], "y".to_string())),
//!     (vec![1, 2], "xy".to_string())
//! );
//! ```
//!
//! Domain error types opt in by implementing the trait:
//!
//! ```
//! use confluence::Semigroup;
//!
//! #[derive(Debug, PartialEq)]
//! struct Problems(Vec<String>);
//!
//! impl Semigroup for Problems {
//!     fn combine(mut self, other: Self) -> Self {
//!         self.0.extend(other.0);
//!         self
//!     }
//! }
//! ```

/// A type that supports an associative binary operation.
///
/// `combine` takes both operands by value; clone first if the originals
/// are still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another, left operand first.
    fn combine(self, other: Self) -> Self;

    /// Fold a non-empty run of values left to right.
    ///
    /// Returns `None` for an empty iterator.
    ///
    /// ```
    /// use confluence::Semigroup;
    ///
    /// let all = String::combine_all(["a", "b", "c"].map(String::from));
    /// assert_eq!(all, Some("abc".to_string()));
    /// ```
    fn combine_all<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        values.into_iter().reduce(Self::combine)
    }
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

macro_rules! impl_semigroup_tuple {
    ($($idx:tt $T:ident),+) => {
        impl<$($T: Semigroup),+> Semigroup for ($($T,)+) {
            #[inline]
            fn combine(self, other: Self) -> Self {
                (
                    $(self.$idx.combine(other.$idx)),+
                )
            }
        }
    };
}

impl_semigroup_tuple!(0 T1, 1 T2);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5, 5 T6);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5, 5 T6, 6 T7);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5, 5 T6, 6 T7, 7 T8);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5, 5 T6, 6 T7, 7 T8, 8 T9);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5, 5 T6, 6 T7, 7 T8, 8 T9, 9 T10);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5, 5 T6, 6 T7, 7 T8, 8 T9, 9 T10, 10 T11);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5, 5 T6, 6 T7, 7 T8, 8 T9, 9 T10, 10 T11, 11 T12);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_concatenation() {
        assert_eq!("a".to_string().combine("b".to_string()), "ab");
        assert_eq!(String::new().combine("b".to_string()), "b");
    }

    #[test]
    fn test_vec_concatenation_keeps_order() {
        assert_eq!(vec![3, 1].combine(vec![2]), vec![3, 1, 2]);
    }

    #[test]
    fn test_tuple_is_componentwise() {
        let t1 = (vec![1], "a".to_string(), vec!["x"]);
        let t2 = (vec![2], "b".to_string(), vec!["y"]);
        assert_eq!(
            t1.combine(t2),
            (vec![1, 2], "ab".to_string(), vec!["x", "y"])
        );
    }

    #[test]
    fn test_combine_all() {
        assert_eq!(Vec::<i32>::combine_all(Vec::new()), None);
        assert_eq!(
            Vec::combine_all(vec![vec![1], vec![2], vec![3]]),
            Some(vec![1, 2, 3])
        );
    }

    #[test]
    fn test_string_associativity() {
        let a = "left ".to_string();
        let b = "middle ".to_string();
        let c = "right".to_string();

        let grouped_left = a.clone().combine(b.clone()).combine(c.clone());
        let grouped_right = a.combine(b.combine(c));

        assert_eq!(grouped_left, grouped_right);
    }
}
