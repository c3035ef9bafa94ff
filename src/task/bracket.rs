//! Acquire/use/release with guaranteed release.
//!
//! - [`bracket`] - release always runs; a release failure wins over the use
//!   outcome
//! - [`bracket_full`] - same protocol, but both failures are kept in a
//!   [`BracketError`]
//!
//! In both variants, if acquisition fails neither `use` nor `release` runs.
//! Once acquisition succeeds, `release` runs exactly once and receives the
//! resource together with the outcome of `use`.
//!
//! # Example
//!
//! ```rust,ignore
//! use confluence::task;
//!
//! let result = task::bracket(
//!     open_connection(),
//!     |conn| fetch_user(conn, user_id),
//!     |conn, _outcome| close_connection(conn),
//! )
//! .run()
//! .await;
//! ```

use crate::task::trait_def::Task;

/// Failure of a [`bracket_full`] run, tagged with the phase that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BracketError<E> {
    /// Acquisition failed; nothing else ran.
    Acquire(E),
    /// `use` failed and release succeeded.
    Use(E),
    /// `use` succeeded and release failed.
    Release(E),
    /// Both `use` and release failed.
    Both {
        /// The failure from `use`.
        use_error: E,
        /// The failure from release.
        release_error: E,
    },
}

impl<E> BracketError<E> {
    /// Returns the acquire error, if any.
    pub fn acquire_error(&self) -> Option<&E> {
        match self {
            BracketError::Acquire(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the use error, if any.
    pub fn use_error(&self) -> Option<&E> {
        match self {
            BracketError::Use(e) | BracketError::Both { use_error: e, .. } => Some(e),
            _ => None,
        }
    }

    /// Returns the release error, if any.
    pub fn release_error(&self) -> Option<&E> {
        match self {
            BracketError::Release(e)
            | BracketError::Both {
                release_error: e, ..
            } => Some(e),
            _ => None,
        }
    }

    /// Collapse into the single failure plain [`bracket`] would report.
    pub fn into_lossy(self) -> E {
        match self {
            BracketError::Acquire(e) | BracketError::Use(e) | BracketError::Release(e) => e,
            BracketError::Both { release_error, .. } => release_error,
        }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for BracketError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BracketError::Acquire(e) => write!(f, "acquire failed: {}", e),
            BracketError::Use(e) => write!(f, "{}", e),
            BracketError::Release(e) => write!(f, "release failed: {}", e),
            BracketError::Both {
                use_error,
                release_error,
            } => write!(
                f,
                "use failed: {}; release also failed: {}",
                use_error, release_error
            ),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for BracketError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BracketError::Acquire(e) | BracketError::Use(e) | BracketError::Release(e) => Some(e),
            BracketError::Both { use_error, .. } => Some(use_error),
        }
    }
}

/// Resource-safe task built by [`bracket`].
pub struct Bracket<Acq, Use, Rel> {
    acquire: Acq,
    use_fn: Use,
    release: Rel,
}

impl<Acq, Use, Rel> std::fmt::Debug for Bracket<Acq, Use, Rel> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bracket")
            .field("acquire", &"<task>")
            .field("use_fn", &"<function>")
            .field("release", &"<function>")
            .finish()
    }
}

impl<Acq, Use, Rel, U, RelTask> Task for Bracket<Acq, Use, Rel>
where
    Acq: Task,
    Use: FnOnce(&Acq::Output) -> U + Send,
    U: Task<Error = Acq::Error>,
    Rel: FnOnce(Acq::Output, &Result<U::Output, Acq::Error>) -> RelTask + Send,
    RelTask: Task<Output = (), Error = Acq::Error>,
{
    type Output = U::Output;
    type Error = Acq::Error;

    async fn run(self) -> Result<Self::Output, Self::Error> {
        let Bracket {
            acquire,
            use_fn,
            release,
        } = self;

        let resource = acquire.run().await?;
        let used = use_fn(&resource);
        let outcome = used.run().await;

        tracing::debug!(use_failed = outcome.is_err(), "releasing bracketed resource");
        let released = release(resource, &outcome);
        match (outcome, released.run().await) {
            (outcome, Ok(())) => outcome,
            (Err(_), Err(release_error)) => {
                tracing::warn!("resource release failed; the use failure is discarded");
                Err(release_error)
            }
            (Ok(_), Err(release_error)) => {
                tracing::warn!("resource release failed after a successful use");
                Err(release_error)
            }
        }
    }
}

/// Resource-safe task built by [`bracket_full`].
pub struct BracketFull<Acq, Use, Rel> {
    acquire: Acq,
    use_fn: Use,
    release: Rel,
}

impl<Acq, Use, Rel> std::fmt::Debug for BracketFull<Acq, Use, Rel> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BracketFull")
            .field("acquire", &"<task>")
            .field("use_fn", &"<function>")
            .field("release", &"<function>")
            .finish()
    }
}

impl<Acq, Use, Rel, U, RelTask> Task for BracketFull<Acq, Use, Rel>
where
    Acq: Task,
    Use: FnOnce(&Acq::Output) -> U + Send,
    U: Task<Error = Acq::Error>,
    Rel: FnOnce(Acq::Output, &Result<U::Output, Acq::Error>) -> RelTask + Send,
    RelTask: Task<Output = (), Error = Acq::Error>,
{
    type Output = U::Output;
    type Error = BracketError<Acq::Error>;

    async fn run(self) -> Result<Self::Output, Self::Error> {
        let BracketFull {
            acquire,
            use_fn,
            release,
        } = self;

        let resource = acquire.run().await.map_err(BracketError::Acquire)?;
        let used = use_fn(&resource);
        let outcome = used.run().await;

        tracing::debug!(use_failed = outcome.is_err(), "releasing bracketed resource");
        let released = release(resource, &outcome);
        match (outcome, released.run().await) {
            (Ok(value), Ok(())) => Ok(value),
            (Err(use_error), Ok(())) => Err(BracketError::Use(use_error)),
            (Ok(_), Err(release_error)) => {
                tracing::warn!("resource release failed after a successful use");
                Err(BracketError::Release(release_error))
            }
            (Err(use_error), Err(release_error)) => {
                tracing::warn!("resource release failed after a failed use");
                Err(BracketError::Both {
                    use_error,
                    release_error,
                })
            }
        }
    }
}

/// Acquire a resource, use it, and always release it.
///
/// Final result precedence:
///
/// | acquire | use   | release | result              |
/// |---------|-------|---------|---------------------|
/// | `Err`   | -     | -       | acquire failure     |
/// | `Ok`    | `Ok`  | `Ok`    | use value           |
/// | `Ok`    | `Err` | `Ok`    | use failure         |
/// | `Ok`    | any   | `Err`   | release failure     |
///
/// A release failure shadows a use failure. Use [`bracket_full`] to keep
/// both.
///
/// ```rust,ignore
/// let t = task::bracket(
///     task::pure::<_, String>("handle"),
///     |h| task::pure(h.len()),
///     |_h, _outcome| task::pure(()),
/// );
/// assert_eq!(t.run().await, Ok(6));
/// ```
pub fn bracket<Acq, Use, Rel, U, RelTask>(
    acquire: Acq,
    use_fn: Use,
    release: Rel,
) -> Bracket<Acq, Use, Rel>
where
    Acq: Task,
    Use: FnOnce(&Acq::Output) -> U + Send,
    U: Task<Error = Acq::Error>,
    Rel: FnOnce(Acq::Output, &Result<U::Output, Acq::Error>) -> RelTask + Send,
    RelTask: Task<Output = (), Error = Acq::Error>,
{
    Bracket {
        acquire,
        use_fn,
        release,
    }
}

/// Like [`bracket`], but reports which phase failed and keeps both
/// failures when use and release both fail.
pub fn bracket_full<Acq, Use, Rel, U, RelTask>(
    acquire: Acq,
    use_fn: Use,
    release: Rel,
) -> BracketFull<Acq, Use, Rel>
where
    Acq: Task,
    Use: FnOnce(&Acq::Output) -> U + Send,
    U: Task<Error = Acq::Error>,
    Rel: FnOnce(Acq::Output, &Result<U::Output, Acq::Error>) -> RelTask + Send,
    RelTask: Task<Output = (), Error = Acq::Error>,
{
    BracketFull {
        acquire,
        use_fn,
        release,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::constructors::{fail, from_fn, pure};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing_test::traced_test;

    #[tokio::test]
    async fn test_acquire_failure_skips_use_and_release() {
        let used = Arc::new(AtomicBool::new(false));
        let released = Arc::new(AtomicBool::new(false));
        let (u, r) = (used.clone(), released.clone());

        let result = bracket(
            fail::<i32, _>("acquire failure".to_string()),
            move |_| {
                u.store(true, Ordering::SeqCst);
                pure(1)
            },
            move |_, _| {
                r.store(true, Ordering::SeqCst);
                pure(())
            },
        )
        .run()
        .await;

        assert_eq!(result, Err("acquire failure".to_string()));
        assert!(!used.load(Ordering::SeqCst));
        assert!(!released.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_use_failure_still_releases_once() {
        let releases = Arc::new(AtomicUsize::new(0));
        let r = releases.clone();

        let result = bracket(
            pure::<_, String>("a"),
            |_| fail::<i32, _>("use failure".to_string()),
            move |_, outcome: &Result<i32, String>| {
                assert!(outcome.is_err());
                r.fetch_add(1, Ordering::SeqCst);
                pure(())
            },
        )
        .run()
        .await;

        assert_eq!(result, Err("use failure".to_string()));
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_release_failure_after_success() {
        let result = bracket(
            pure::<_, String>("a"),
            |a| pure(a.len()),
            |_, _| fail("release failure".to_string()),
        )
        .run()
        .await;

        assert_eq!(result, Err("release failure".to_string()));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_release_failure_shadows_use_failure() {
        let result = bracket(
            pure::<_, String>("a"),
            |_| fail::<usize, _>("use failure".to_string()),
            |_, _| fail("release failure".to_string()),
        )
        .run()
        .await;

        assert_eq!(result, Err("release failure".to_string()));
        assert!(logs_contain("use failure is discarded"));
    }

    #[tokio::test]
    async fn test_success_returns_use_value() {
        let log = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let (l1, l2, l3) = (log.clone(), log.clone(), log.clone());

        let result = bracket(
            from_fn(move || {
                l1.lock().push("acquire");
                Ok::<_, String>(String::from("resource"))
            }),
            move |res: &String| {
                let len = res.len();
                from_fn(move || {
                    l2.lock().push("use");
                    Ok(len)
                })
            },
            move |_, _| {
                l3.lock().push("release");
                pure(())
            },
        )
        .run()
        .await;

        assert_eq!(result, Ok(8));
        assert_eq!(*log.lock(), vec!["acquire", "use", "release"]);
    }

    #[tokio::test]
    async fn test_bracket_full_keeps_both_failures() {
        let result = bracket_full(
            pure::<_, String>(()),
            |_| fail::<i32, _>("use failure".to_string()),
            |_, _| fail("release failure".to_string()),
        )
        .run()
        .await;

        let error = result.unwrap_err();
        assert_eq!(error.use_error(), Some(&"use failure".to_string()));
        assert_eq!(error.release_error(), Some(&"release failure".to_string()));
        assert_eq!(error.into_lossy(), "release failure".to_string());
    }

    #[tokio::test]
    async fn test_bracket_full_phases() {
        let acquire = bracket_full(
            fail::<(), _>("nope".to_string()),
            |_| pure::<i32, _>(1),
            |_, _| pure(()),
        )
        .run()
        .await;
        assert_eq!(acquire, Err(BracketError::Acquire("nope".to_string())));

        let used = bracket_full(
            pure::<_, String>(()),
            |_| fail::<i32, _>("bad".to_string()),
            |_, _| pure(()),
        )
        .run()
        .await;
        assert_eq!(used, Err(BracketError::Use("bad".to_string())));

        let ok = bracket_full(pure::<_, String>(2), |n| pure(n * 3), |_, _| pure(()))
            .run()
            .await;
        assert_eq!(ok, Ok(6));
    }

    #[test]
    fn test_bracket_error_display() {
        let both: BracketError<String> = BracketError::Both {
            use_error: "use".into(),
            release_error: "release".into(),
        };
        assert_eq!(
            both.to_string(),
            "use failed: use; release also failed: release"
        );
        assert_eq!(BracketError::Acquire("x").to_string(), "acquire failed: x");
        assert_eq!(BracketError::Release("x").to_string(), "release failed: x");
        assert_eq!(BracketError::Use("x").to_string(), "x");
    }
}
