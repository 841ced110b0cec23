// debounce.rs - Cancellable "fire once after a quiet period" scheduler

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Delay used for status bar size updates unless configured otherwise.
pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// Coalesces bursts of events into a single delayed action.
///
/// At most one action is outstanding at any time: every call to
/// [`schedule`](Self::schedule) aborts the previous timer before arming a new
/// one. The pending timer is also aborted when the scheduler is dropped.
pub struct DebounceScheduler {
    runtime: Handle,
    pending: Option<JoinHandle<()>>,
}

impl DebounceScheduler {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            pending: None,
        }
    }

    /// Run `action` once `delay` has passed without another call to `schedule`.
    pub fn schedule<F>(&mut self, delay: Duration, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if self.cancel_pending() {
            log::trace!("debounce: restarting {:?} timer", delay);
        }

        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            log::trace!("debounce: timer fired after {:?}", delay);
            action();
        });
        self.pending = Some(task);
    }

    /// Abort the outstanding timer, if any.
    ///
    /// Returns `true` when a timer was still waiting and has been cancelled.
    pub fn cancel_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(task) => {
                let waiting = !task.is_finished();
                task.abort();
                waiting
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for DebounceScheduler {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
