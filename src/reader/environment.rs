//! Environment access for readers.
//!
//! - `Ask` - Get the entire environment (cloned)
//! - `Asks` - Query a value from the environment
//! - `Local` - Run a reader against a transformed environment

use std::marker::PhantomData;

use crate::reader::trait_def::Reader;

/// Get the entire environment (cloned).
///
/// Created by [`ask`](crate::reader::ask).
pub struct Ask<E, Env> {
    _phantom: PhantomData<fn(&Env) -> E>,
}

impl<E, Env> std::fmt::Debug for Ask<E, Env> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ask").finish()
    }
}

impl<E, Env> Ask<E, Env> {
    /// Create a new Ask reader.
    pub fn new() -> Self {
        Ask {
            _phantom: PhantomData,
        }
    }
}

impl<E, Env> Default for Ask<E, Env> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, Env: Clone> Reader for Ask<E, Env> {
    type Env = Env;
    type Output = Env;
    type Error = E;

    fn run(&self, env: &Env) -> Result<Env, E> {
        Ok(env.clone())
    }
}

/// Query a value from the environment.
///
/// Created by [`asks`](crate::reader::asks).
pub struct Asks<F, E, Env> {
    f: F,
    _phantom: PhantomData<fn(&Env) -> E>,
}

impl<F, E, Env> std::fmt::Debug for Asks<F, E, Env> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Asks").field("f", &"<function>").finish()
    }
}

impl<F, E, Env> Asks<F, E, Env> {
    /// Create a new Asks reader.
    pub fn new(f: F) -> Self {
        Asks {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<F, U, E, Env> Reader for Asks<F, E, Env>
where
    F: Fn(&Env) -> U,
{
    type Env = Env;
    type Output = U;
    type Error = E;

    fn run(&self, env: &Env) -> Result<U, E> {
        Ok((self.f)(env))
    }
}

/// Run a reader against an environment derived from an outer one.
///
/// The transformation is contravariant: `f` maps the *outer* environment
/// `Env2` into the environment the inner reader expects.
///
/// ```rust,ignore
/// let inner = reader::from_fn(|env: &Inner| Ok::<_, String>(env.a));
/// let outer = inner.local(|n: &i32| Inner { a: *n });
/// assert_eq!(outer.run(&1), Ok(1));
/// ```
pub struct Local<Inner, F, Env2> {
    inner: Inner,
    f: F,
    _phantom: PhantomData<fn(&Env2)>,
}

impl<Inner, F, Env2> std::fmt::Debug for Local<Inner, F, Env2> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Local")
            .field("inner", &"<reader>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, Env2> Local<Inner, F, Env2> {
    /// Create a new Local reader.
    pub fn new(inner: Inner, f: F) -> Self {
        Local {
            inner,
            f,
            _phantom: PhantomData,
        }
    }
}

impl<Inner, F, Env2> Reader for Local<Inner, F, Env2>
where
    Inner: Reader,
    F: Fn(&Env2) -> Inner::Env,
{
    type Env = Env2;
    type Output = Inner::Output;
    type Error = Inner::Error;

    fn run(&self, env: &Env2) -> Result<Self::Output, Self::Error> {
        let inner_env = (self.f)(env);
        self.inner.run(&inner_env)
    }
}
