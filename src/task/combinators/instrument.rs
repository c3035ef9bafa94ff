//! Tracing spans around tasks.

use crate::task::trait_def::Task;

/// A task that runs inside a tracing span.
///
/// The span is entered every time the underlying future is polled.
///
/// Created by [`TaskExt::instrument`](crate::task::TaskExt::instrument).
#[derive(Debug)]
pub struct Instrument<Inner> {
    pub(crate) inner: Inner,
    pub(crate) span: tracing::Span,
}

impl<Inner: Task> Task for Instrument<Inner> {
    type Output = Inner::Output;
    type Error = Inner::Error;

    async fn run(self) -> Result<Self::Output, Self::Error> {
        use tracing::Instrument as _;
        self.inner.run().instrument(self.span).await
    }
}
