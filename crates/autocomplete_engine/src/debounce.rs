use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Coalesces bursts of triggers into one delayed call of `action`.
///
/// Every [`schedule`](Self::schedule) restarts the quiet period and replaces
/// the pending payload, so only the last trigger of a burst reaches `action`.
/// One instance serves one input stream. Must be used inside a tokio runtime.
pub struct Debouncer<T> {
    action: Arc<dyn Fn(T) + Send + Sync>,
    quiet_period: Duration,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(quiet_period: Duration, action: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            action: Arc::new(action),
            quiet_period,
            pending: None,
        }
    }

    pub fn schedule(&mut self, payload: T) {
        self.cancel();
        let action = Arc::clone(&self.action);
        let quiet_period = self.quiet_period;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            action(payload);
        }));
    }

    /// Drops the pending payload, if any, without running `action`.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| !pending.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
