//! Single-shot cancellable timer.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::{Error, Result};

/// A single-shot timer backed by a tokio task.
///
/// Arming always cancels the previous shot, so repeated arming behaves as a
/// trailing-edge debounce. Dropping the timer cancels any pending shot.
///
/// Callbacks should hold weak references to their owner: the owner holds the
/// timer, and a strong reference would keep both alive until the shot fires.
#[derive(Debug)]
pub struct Timer {
    label: &'static str,
    pending: Option<JoinHandle<()>>,
}

impl Timer {
    /// Create an idle timer. The label names the timer in errors and logs.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            pending: None,
        }
    }

    /// Schedule `f` to run once after `delay`, cancelling any pending shot.
    ///
    /// Fails with [`Error::NoRuntime`] when called outside a tokio runtime;
    /// the previous shot is cancelled either way.
    pub fn arm<F>(&mut self, delay: Duration, f: F) -> Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let runtime = Handle::try_current().map_err(|_| Error::NoRuntime(self.label))?;
        log::trace!("{} armed for {:?}", self.label, delay);
        self.pending = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            f();
        }));
        Ok(())
    }

    /// Cancel the pending shot. Returns true if one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                let waiting = !handle.is_finished();
                handle.abort();
                if waiting {
                    log::trace!("{} cancelled", self.label);
                }
                waiting
            }
            None => false,
        }
    }

    /// Check whether a shot is still waiting to fire.
    pub fn is_armed(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.cancel();
    }
}
