//! Adapting callback-style functions into tasks.
//!
//! A callback-style function takes its arguments plus a completion
//! [`Callback`] and reports its outcome by completing that callback once.
//! [`from_callback`] turns such a function into a [`CallbackAdapter`], whose
//! [`call`](CallbackAdapter::call) produces a lazy task per invocation.
//!
//! Adapters are memoized per function: asking twice for the same `Arc`'d
//! function yields the same adapter as long as one is still alive. The cache
//! holds only weak references, so it never keeps a function or its adapter
//! alive on its own.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use confluence::task::{self, Callback};
//!
//! let read = Arc::new(|path: String, done: Callback<String, io::Error>| {
//!     legacy::read_file(&path, move |err, contents| done.complete(err, contents));
//! });
//!
//! let adapter = task::from_callback(&read);
//! let contents = adapter.call("Cargo.toml".to_string()).run().await?;
//! ```

use std::any::Any;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, LazyLock, Weak};

use futures::channel::oneshot;
use parking_lot::Mutex;

use crate::task::trait_def::Task;

type AdapterCache = HashMap<usize, Weak<dyn Any + Send + Sync>>;

static ADAPTERS: LazyLock<Mutex<AdapterCache>> = LazyLock::new(|| Mutex::new(HashMap::new()));

/// Completion handle passed to a callback-style function.
///
/// Completing consumes the handle, so a function can report at most one
/// outcome. Dropping it without completing leaves the task pending forever.
pub struct Callback<A, E> {
    sender: oneshot::Sender<Result<A, E>>,
}

impl<A, E> std::fmt::Debug for Callback<A, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callback")
            .field("canceled", &self.sender.is_canceled())
            .finish()
    }
}

impl<A, E> Callback<A, E> {
    /// Complete with an explicit outcome.
    pub fn resolve(self, result: Result<A, E>) {
        if self.sender.send(result).is_err() {
            tracing::trace!("callback completed after its task was dropped");
        }
    }

    /// Complete successfully.
    pub fn succeed(self, value: A) {
        self.resolve(Ok(value))
    }

    /// Complete with a failure.
    pub fn fail(self, error: E) {
        self.resolve(Err(error))
    }

    /// Complete from the conventional `(error, value)` callback pair.
    ///
    /// A present error wins. Without an error the value is used, falling
    /// back to `A::default()` when no value was given either.
    ///
    /// ```rust,ignore
    /// done.complete(None, Some(1));           // Ok(1)
    /// done.complete(Some("boom"), None);      // Err("boom")
    /// done.complete(None, None);              // Ok(A::default())
    /// ```
    pub fn complete(self, error: Option<E>, value: Option<A>)
    where
        A: Default,
    {
        match error {
            Some(error) => self.fail(error),
            None => self.succeed(value.unwrap_or_default()),
        }
    }
}

/// A callback-style function lifted into task form.
///
/// Created by [`from_callback`].
pub struct CallbackAdapter<F, Args, A, E> {
    f: Arc<F>,
    _phantom: PhantomData<fn(Args) -> Result<A, E>>,
}

impl<F, Args, A, E> std::fmt::Debug for CallbackAdapter<F, Args, A, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackAdapter")
            .field("f", &"<function>")
            .finish()
    }
}

impl<F, Args, A, E> CallbackAdapter<F, Args, A, E>
where
    F: Fn(Args, Callback<A, E>) + Send + Sync,
{
    /// Build a task that calls the function with `args` when run.
    pub fn call(&self, args: Args) -> FromCallback<F, Args, A, E> {
        FromCallback {
            f: Arc::clone(&self.f),
            args,
            _phantom: PhantomData,
        }
    }

    /// Whether this adapter wraps exactly the function `f`.
    pub fn wraps(&self, f: &Arc<F>) -> bool {
        Arc::ptr_eq(&self.f, f)
    }
}

/// One pending invocation of a callback-style function.
///
/// Created by [`CallbackAdapter::call`].
pub struct FromCallback<F, Args, A, E> {
    f: Arc<F>,
    args: Args,
    _phantom: PhantomData<fn() -> Result<A, E>>,
}

impl<F, Args: Clone, A, E> Clone for FromCallback<F, Args, A, E> {
    fn clone(&self) -> Self {
        FromCallback {
            f: Arc::clone(&self.f),
            args: self.args.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<F, Args, A, E> std::fmt::Debug for FromCallback<F, Args, A, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromCallback")
            .field("f", &"<function>")
            .finish()
    }
}

impl<F, Args, A, E> Task for FromCallback<F, Args, A, E>
where
    F: Fn(Args, Callback<A, E>) + Send + Sync,
    Args: Send,
    A: Send,
    E: Send,
{
    type Output = A;
    type Error = E;

    async fn run(self) -> Result<A, E> {
        let (sender, receiver) = oneshot::channel();
        (self.f)(self.args, Callback { sender });
        match receiver.await {
            Ok(result) => result,
            Err(oneshot::Canceled) => {
                tracing::warn!("callback dropped without completing; task will never resolve");
                futures::future::pending().await
            }
        }
    }
}

/// Adapt a callback-style function, reusing a live adapter for the same
/// function.
///
/// Identity is the `Arc` allocation of `f`: two calls with clones of the
/// same `Arc` return the same adapter while it is alive.
///
/// ```rust,ignore
/// let first = task::from_callback(&read);
/// let second = task::from_callback(&read);
/// assert!(Arc::ptr_eq(&first, &second));
/// ```
pub fn from_callback<F, Args, A, E>(f: &Arc<F>) -> Arc<CallbackAdapter<F, Args, A, E>>
where
    F: Fn(Args, Callback<A, E>) + Send + Sync + 'static,
    Args: 'static,
    A: 'static,
    E: 'static,
{
    let key = Arc::as_ptr(f) as *const () as usize;
    let mut adapters = ADAPTERS.lock();

    if let Some(cached) = adapters.get(&key).and_then(Weak::upgrade) {
        if let Ok(adapter) = cached.downcast::<CallbackAdapter<F, Args, A, E>>() {
            if adapter.wraps(f) {
                tracing::trace!(key, "reusing callback adapter");
                return adapter;
            }
        }
    }

    adapters.retain(|_, adapter| adapter.strong_count() > 0);

    let adapter = Arc::new(CallbackAdapter {
        f: Arc::clone(f),
        _phantom: PhantomData,
    });
    let erased: Arc<dyn Any + Send + Sync> = adapter.clone();
    adapters.insert(key, Arc::downgrade(&erased));
    tracing::trace!(key, cached = adapters.len(), "created callback adapter");

    adapter
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing_test::traced_test;

    fn double(n: i32, done: Callback<i32, String>) {
        if n < 0 {
            done.fail(format!("negative: {}", n));
        } else {
            done.succeed(n * 2);
        }
    }

    #[tokio::test]
    async fn test_adapter_resolves_success_and_failure() {
        let f = Arc::new(double);
        let adapter = from_callback(&f);

        assert_eq!(adapter.call(21).run().await, Ok(42));
        assert_eq!(adapter.call(-1).run().await, Err("negative: -1".to_string()));
    }

    #[tokio::test]
    async fn test_adapter_is_memoized_per_function() {
        let f = Arc::new(double);
        let first = from_callback(&f);
        let second = from_callback(&f);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.call(1).run().await, Ok(2));
        assert_eq!(second.call(1).run().await, Ok(2));
    }

    #[tokio::test]
    async fn test_distinct_functions_get_distinct_adapters() {
        let f = Arc::new(double);
        let g = Arc::new(double);

        let first = from_callback(&f);
        let second = from_callback(&g);

        assert!(!Arc::ptr_eq(&first, &second));
        assert!(first.wraps(&f));
        assert!(second.wraps(&g));
    }

    #[test]
    fn test_cache_does_not_keep_function_alive() {
        let f = Arc::new(double);
        let adapter = from_callback(&f);
        assert_eq!(Arc::strong_count(&f), 2);

        drop(adapter);
        assert_eq!(Arc::strong_count(&f), 1);

        let weak = Arc::downgrade(&f);
        drop(f);
        assert!(weak.upgrade().is_none());
    }

    #[tokio::test]
    async fn test_call_is_lazy() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let f = Arc::new(move |(): (), done: Callback<usize, String>| {
            done.succeed(counter.fetch_add(1, Ordering::SeqCst) + 1);
        });
        let adapter = from_callback(&f);

        let pending = adapter.call(());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(pending.clone().run().await, Ok(1));
        assert_eq!(pending.run().await, Ok(2));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_complete_with_error_value_pairs() {
        type Input = (Option<&'static str>, Option<i32>);
        let f = Arc::new(|(error, value): Input, done: Callback<i32, &'static str>| {
            done.complete(error, value);
        });
        let adapter = from_callback(&f);

        assert_eq!(adapter.call((None, Some(1))).run().await, Ok(1));
        assert_eq!(adapter.call((Some("error"), None)).run().await, Err("error"));
        assert_eq!(
            adapter.call((Some("error"), Some(1))).run().await,
            Err("error")
        );
        assert_eq!(adapter.call((None, None)).run().await, Ok(0));
    }

    #[tokio::test]
    async fn test_completion_from_another_thread() {
        let f = Arc::new(|n: u64, done: Callback<u64, String>| {
            std::thread::spawn(move || {
                std::thread::sleep(std::time::Duration::from_millis(5));
                done.succeed(n + 1);
            });
        });

        assert_eq!(from_callback(&f).call(1).run().await, Ok(2));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_dropped_callback_never_resolves() {
        let f = Arc::new(|_: (), done: Callback<i32, String>| drop(done));
        let run = from_callback(&f).call(()).run();

        let outcome = tokio::time::timeout(std::time::Duration::from_millis(20), run).await;

        assert!(outcome.is_err());
        assert!(logs_contain("callback dropped without completing"));
    }
}
