//! Change notification from table parts to the host.
//!
//! Each stateful part owns a [`ChangeTracker`]: a dirty flag plus an optional
//! [`ChangeNotifier`] installed by the host. Marking a part changed records
//! which part it was, so the host re-reads only those parts. Changes that
//! arrive before the host looks coalesce into one set.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use crate::search::SearchFieldId;
use crate::section::SectionId;
use crate::sort::SortHeaderId;
use crate::table::TableId;

/// The part whose state changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Changed {
    /// Row count, header count, loading or filtering.
    Table(TableId),
    Section(SectionId),
    Search(SearchFieldId),
    Sort(SortHeaderId),
}

#[derive(Debug, Default)]
struct Pending {
    changed: Mutex<HashSet<Changed>>,
    notify: Notify,
}

/// Handed to table parts; records changes for one [`ChangeListener`].
#[derive(Debug, Clone)]
pub struct ChangeNotifier {
    pending: Arc<Pending>,
}

impl ChangeNotifier {
    pub fn notify(&self, source: Changed) {
        let inserted = self
            .pending
            .changed
            .lock()
            .map(|mut changed| changed.insert(source))
            .unwrap_or(false);
        if inserted {
            self.pending.notify.notify_one();
        }
    }
}

/// Host side: collects the parts that changed since the last look.
#[derive(Debug)]
pub struct ChangeListener {
    pending: Arc<Pending>,
}

impl ChangeListener {
    /// Wait until at least one part changed, then take the whole set.
    pub async fn changed(&self) -> HashSet<Changed> {
        loop {
            let changed = self.take();
            if !changed.is_empty() {
                return changed;
            }
            self.pending.notify.notified().await;
        }
    }

    /// Take the parts changed so far without waiting. Empty if none.
    pub fn take(&self) -> HashSet<Changed> {
        self.pending
            .changed
            .lock()
            .map(|mut changed| std::mem::take(&mut *changed))
            .unwrap_or_default()
    }
}

/// Create a connected notifier and listener.
pub fn channel() -> (ChangeNotifier, ChangeListener) {
    let pending = Arc::new(Pending::default());
    (
        ChangeNotifier {
            pending: Arc::clone(&pending),
        },
        ChangeListener { pending },
    )
}

/// Dirty flag and notifier slot of one part, shared by all clones of its handle.
#[derive(Debug, Clone)]
pub(crate) struct ChangeTracker {
    source: Changed,
    dirty: Arc<AtomicBool>,
    notifier: Arc<Mutex<Option<ChangeNotifier>>>,
}

impl ChangeTracker {
    pub(crate) fn new(source: Changed) -> Self {
        Self {
            source,
            dirty: Arc::new(AtomicBool::new(false)),
            notifier: Arc::new(Mutex::new(None)),
        }
    }

    /// Install the host's notifier, replacing any previous one.
    pub(crate) fn install(&self, notifier: ChangeNotifier) {
        if let Ok(mut slot) = self.notifier.lock() {
            *slot = Some(notifier);
        }
    }

    /// Set the dirty flag and tell the host, if one is listening.
    pub(crate) fn mark(&self) {
        self.dirty.store(true, Ordering::SeqCst);
        if let Ok(slot) = self.notifier.lock()
            && let Some(notifier) = slot.as_ref()
        {
            notifier.notify(self.source);
        }
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub(crate) fn clear(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}
