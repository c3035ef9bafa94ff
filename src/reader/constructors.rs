//! Constructor functions for creating readers.
//!
//! Values are cloned out on every run, since a reader can be evaluated
//! repeatedly.

use std::marker::PhantomData;

use crate::reader::environment::{Ask, Asks, Local};
use crate::reader::trait_def::Reader;

/// A reader that always succeeds with a value.
///
/// Created by [`pure`].
#[derive(Debug, Clone)]
pub struct Pure<T, E, Env> {
    value: T,
    _phantom: PhantomData<fn(&Env) -> E>,
}

impl<T: Clone, E, Env> Reader for Pure<T, E, Env> {
    type Env = Env;
    type Output = T;
    type Error = E;

    fn run(&self, _env: &Env) -> Result<T, E> {
        Ok(self.value.clone())
    }
}

/// A reader that always fails with an error.
///
/// Created by [`fail`].
#[derive(Debug, Clone)]
pub struct Fail<T, E, Env> {
    error: E,
    _phantom: PhantomData<fn(&Env) -> T>,
}

impl<T, E: Clone, Env> Reader for Fail<T, E, Env> {
    type Env = Env;
    type Output = T;
    type Error = E;

    fn run(&self, _env: &Env) -> Result<T, E> {
        Err(self.error.clone())
    }
}

/// A reader lifted from an existing `Result`.
///
/// Created by [`from_result`], [`from_option`] and [`from_predicate`].
#[derive(Debug, Clone)]
pub struct FromResult<T, E, Env> {
    result: Result<T, E>,
    _phantom: PhantomData<fn(&Env)>,
}

impl<T: Clone, E: Clone, Env> Reader for FromResult<T, E, Env> {
    type Env = Env;
    type Output = T;
    type Error = E;

    fn run(&self, _env: &Env) -> Result<T, E> {
        self.result.clone()
    }
}

/// A reader backed by a function of the environment.
///
/// Created by [`from_fn`].
pub struct FromFn<F, Env> {
    f: F,
    _phantom: PhantomData<fn(&Env)>,
}

impl<F, Env> std::fmt::Debug for FromFn<F, Env> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").field("f", &"<function>").finish()
    }
}

impl<F, T, E, Env> Reader for FromFn<F, Env>
where
    F: Fn(&Env) -> Result<T, E>,
{
    type Env = Env;
    type Output = T;
    type Error = E;

    fn run(&self, env: &Env) -> Result<T, E> {
        (self.f)(env)
    }
}

/// Create a reader that always succeeds with `value`.
///
/// ```rust,ignore
/// let r = reader::pure::<_, String, ()>(42);
/// assert_eq!(r.run(&()), Ok(42));
/// ```
pub fn pure<T: Clone, E, Env>(value: T) -> Pure<T, E, Env> {
    Pure {
        value,
        _phantom: PhantomData,
    }
}

/// Create a reader that always fails with `error`.
pub fn fail<T, E: Clone, Env>(error: E) -> Fail<T, E, Env> {
    Fail {
        error,
        _phantom: PhantomData,
    }
}

/// Lift a `Result` into a reader.
pub fn from_result<T: Clone, E: Clone, Env>(result: Result<T, E>) -> FromResult<T, E, Env> {
    FromResult {
        result,
        _phantom: PhantomData,
    }
}

/// Lift an `Option`, failing with `on_none()` when it is empty.
pub fn from_option<T: Clone, E: Clone, Env>(
    option: Option<T>,
    on_none: impl FnOnce() -> E,
) -> FromResult<T, E, Env> {
    from_result(option.ok_or_else(on_none))
}

/// Succeed with `value` if it satisfies `predicate`, otherwise fail with
/// `on_false(&value)`.
///
/// ```rust,ignore
/// let r = reader::from_predicate::<_, _, ()>(1, |n| *n >= 2, |n| format!("Invalid number {}", n));
/// assert_eq!(r.run(&()), Err("Invalid number 1".to_string()));
/// ```
pub fn from_predicate<T: Clone, E: Clone, Env>(
    value: T,
    predicate: impl FnOnce(&T) -> bool,
    on_false: impl FnOnce(&T) -> E,
) -> FromResult<T, E, Env> {
    let result = if predicate(&value) {
        Ok(value)
    } else {
        Err(on_false(&value))
    };
    from_result(result)
}

/// Create a reader from a function of the environment.
///
/// This is the most general constructor: every reader is equivalent to
/// some `from_fn`.
pub fn from_fn<T, E, Env, F>(f: F) -> FromFn<F, Env>
where
    F: Fn(&Env) -> Result<T, E>,
{
    FromFn {
        f,
        _phantom: PhantomData,
    }
}

/// Read the whole environment (cloned).
pub fn ask<E, Env: Clone>() -> Ask<E, Env> {
    Ask::new()
}

/// Derive a value from the environment.
///
/// ```rust,ignore
/// let r = reader::asks::<_, String, _, _>(|env: &Env| env.a);
/// assert_eq!(r.run(&Env { a: 1 }), Ok(1));
/// ```
pub fn asks<U, E, Env, F>(f: F) -> Asks<F, E, Env>
where
    F: Fn(&Env) -> U,
{
    Asks::new(f)
}

/// Run `inner` against an environment derived from the outer one.
pub fn local<Inner, F, Env2>(f: F, inner: Inner) -> Local<Inner, F, Env2>
where
    Inner: Reader,
    F: Fn(&Env2) -> Inner::Env,
{
    Local::new(inner, f)
}
