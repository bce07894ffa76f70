//! Trailing-edge debouncing for rapid triggers

use std::future::Future;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use log::debug;
use tokio::task::JoinHandle;

/// Collapses bursts of `schedule` calls into one invocation of the last
/// scheduled action, fired once `delay` passes without another call.
///
/// Only the waiting period can be cancelled. An action that has started runs
/// to completion even if a new one is scheduled meanwhile.
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Replace any waiting action with `action`, restarting the quiet period.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F, Fut>(&self, action: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let mut pending = self.lock_pending();
        if let Some(previous) = pending.take() {
            if !previous.is_finished() {
                debug!("Debounce: superseding pending action");
            }
            previous.abort();
        }

        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Detached so that a later abort of this waiter cannot cut the
            // action short once it has fired
            let fired = tokio::spawn(action());
            let _ = fired.await;
        }));
    }

    /// Drop the waiting action, if any
    pub fn cancel(&self) {
        if let Some(previous) = self.lock_pending().take() {
            previous.abort();
        }
    }

    /// Whether an action is waiting or running
    pub fn is_pending(&self) -> bool {
        self.lock_pending()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Wait until the most recently scheduled action has fired and finished.
    pub async fn flush(&self) {
        let handle = self.lock_pending().take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }

    fn lock_pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
