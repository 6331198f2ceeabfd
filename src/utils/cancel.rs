use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;

/// Marker returned when a [`CancelToken`] fired before the wrapped future finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

/// Cooperative cancellation handle shared between a caller and in-flight requests
///
/// Clones observe the same state. Cancelling is one-way: once fired the token
/// stays cancelled and every future run through it resolves to `Err(Cancelled)`.
#[derive(Debug, Clone)]
pub struct CancelToken {
    state: Arc<watch::Sender<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        let (state, _) = watch::channel(false);
        Self {
            state: Arc::new(state),
        }
    }

    pub fn cancel(&self) {
        self.state.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.state.borrow()
    }

    /// Resolves once `cancel()` has been called (immediately if it already was)
    pub async fn cancelled(&self) {
        let mut rx = self.state.subscribe();
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }

    /// Drive `future` until it completes or the token fires, whichever is first.
    /// The future is dropped on cancellation, which aborts an in-flight request.
    pub async fn run<F: Future>(&self, future: F) -> Result<F::Output, Cancelled> {
        tokio::select! {
            biased;
            _ = self.cancelled() => Err(Cancelled),
            output = future => Ok(output),
        }
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Run `future` under an optional token; `None` never cancels.
pub async fn run_cancellable<F: Future>(
    future: F,
    cancel: Option<&CancelToken>,
) -> Result<F::Output, Cancelled> {
    match cancel {
        Some(token) => token.run(future).await,
        None => Ok(future.await),
    }
}
