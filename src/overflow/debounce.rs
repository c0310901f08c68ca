//! Trailing-edge debounce for resize notifications

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;

/// Trailing-edge debouncer backed by a single timer task.
///
/// Each [`call`](Debouncer::call) aborts the pending timer and arms a new
/// one carrying the latest value. When the window elapses without another
/// call, the value is sent on the receiver returned by [`Debouncer::new`].
/// Dropping the debouncer cancels the pending timer.
pub struct Debouncer<T: Send + 'static> {
    delay: Duration,
    sender: mpsc::UnboundedSender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                delay,
                sender: tx,
                pending: None,
            },
            rx,
        )
    }

    /// Re-arm the timer with `value`. Must be called within a tokio runtime.
    pub fn call(&mut self, value: T) {
        self.cancel();

        let sender = self.sender.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = sender.send(value);
        }));
    }

    /// Disarm the pending timer, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}
