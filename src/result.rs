//! Right-biased helpers for `Result`.
//!
//! The effects in this crate all resolve to a plain `std::result::Result`,
//! read as `Right(value)` for `Ok` and `Left(error)` for `Err`. This module
//! adds the handful of constructors and bifunctor operations that `Result`
//! does not provide itself.
//!
//! # Example
//!
//! ```
//! use confluence::result::{left, right, ResultExt};
//!
//! let ok = right::<_, String>(21).bimap(|e| e.len(), |n| n * 2);
//! assert_eq!(ok, Ok(42));
//!
//! let err = left::<i32, _>("boom".to_string()).map_left(|e| e.len());
//! assert_eq!(err, Err(4));
//! ```

/// Construct a failed `Result`.
#[inline]
pub fn left<A, E>(error: E) -> Result<A, E> {
    Err(error)
}

/// Construct a successful `Result`.
#[inline]
pub fn right<A, E>(value: A) -> Result<A, E> {
    Ok(value)
}

/// Bifunctor operations for `Result`.
///
/// Implemented for every `Result<A, E>`; all operations are total and
/// return a new value without touching the untouched side.
pub trait ResultExt<A, E>: Sized {
    /// Transform the failure value, leaving success untouched.
    ///
    /// Equivalent to `map_err`, named for symmetry with the effect shapes.
    fn map_left<E2, F>(self, f: F) -> Result<A, E2>
    where
        F: FnOnce(E) -> E2;

    /// Transform failure with `f` and success with `g` in one pass.
    fn bimap<E2, B, F, G>(self, f: F, g: G) -> Result<B, E2>
    where
        F: FnOnce(E) -> E2,
        G: FnOnce(A) -> B;

    /// Collapse both variants into a single value.
    ///
    /// ```
    /// use confluence::result::ResultExt;
    ///
    /// let r: Result<i32, &str> = Err("bad");
    /// assert_eq!(r.fold(|e| e.len() as i32, |n| n), 3);
    /// ```
    fn fold<B, F, G>(self, on_left: F, on_right: G) -> B
    where
        F: FnOnce(E) -> B,
        G: FnOnce(A) -> B;

    /// Exchange the success and failure channels.
    fn swap(self) -> Result<E, A>;
}

impl<A, E> ResultExt<A, E> for Result<A, E> {
    #[inline]
    fn map_left<E2, F>(self, f: F) -> Result<A, E2>
    where
        F: FnOnce(E) -> E2,
    {
        self.map_err(f)
    }

    #[inline]
    fn bimap<E2, B, F, G>(self, f: F, g: G) -> Result<B, E2>
    where
        F: FnOnce(E) -> E2,
        G: FnOnce(A) -> B,
    {
        match self {
            Ok(value) => Ok(g(value)),
            Err(error) => Err(f(error)),
        }
    }

    #[inline]
    fn fold<B, F, G>(self, on_left: F, on_right: G) -> B
    where
        F: FnOnce(E) -> B,
        G: FnOnce(A) -> B,
    {
        match self {
            Ok(value) => on_right(value),
            Err(error) => on_left(error),
        }
    }

    #[inline]
    fn swap(self) -> Result<E, A> {
        match self {
            Ok(value) => Err(value),
            Err(error) => Ok(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(right::<_, String>(1), Ok(1));
        assert_eq!(left::<i32, _>("e"), Err("e"));
    }

    #[test]
    fn test_map_left_passes_success_through() {
        let r: Result<i32, String> = Ok(1);
        assert_eq!(r.map_left(|e| e.len()), Ok(1));

        let r: Result<i32, String> = Err("aa".to_string());
        assert_eq!(r.map_left(|e| e.len()), Err(2));
    }

    #[test]
    fn test_bimap_applies_the_matching_side() {
        let len = |s: String| s.len();
        let gt2 = |n: usize| n > 2;

        assert_eq!(right::<usize, String>(1).bimap(len, gt2), Ok(false));
        assert_eq!(left::<usize, _>("foo".to_string()).bimap(len, gt2), Err(3));
    }

    #[test]
    fn test_fold() {
        let ok: Result<i32, String> = Ok(2);
        let err: Result<i32, String> = Err("aaa".to_string());

        assert_eq!(ok.fold(|e| e.len() as i32, |n| n * 2), 4);
        assert_eq!(err.fold(|e| e.len() as i32, |n| n * 2), 3);
    }

    #[test]
    fn test_swap() {
        assert_eq!(right::<i32, String>(1).swap(), Err(1));
        assert_eq!(left::<i32, _>("a").swap(), Ok("a"));
    }
}
