//! Shared table state.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::changes::{ChangeNotifier, ChangeTracker, Changed};

use super::view::{self, ViewState};

/// Unique identifier for a table instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// A consistent copy of the table state.
///
/// Placeholder renderers evaluated against the same snapshot are mutually
/// exclusive. The default snapshot is what a component sees outside of any
/// table: no rows, no headers, not loading, not filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableSnapshot {
    /// Column count reported by the most recent header render.
    pub header_count: u16,
    /// Number of currently mounted rows.
    pub row_count: usize,
    pub loading: bool,
    pub filtering: bool,
}

impl TableSnapshot {
    /// Which of content, loading, searching or empty the table shows.
    pub fn view_state(&self) -> ViewState {
        view::resolve(self.row_count, self.loading, self.filtering)
    }

    /// Column span for a placeholder cell: the explicit span, or the header count.
    pub fn col_span(&self, explicit: Option<u16>) -> u16 {
        explicit.unwrap_or(self.header_count)
    }
}

/// Internal state for a table
#[derive(Debug, Default)]
struct TableInner {
    header_count: u16,
    loading: bool,
    filtering: bool,
    row_count: usize,
}

impl TableInner {
    fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            header_count: self.header_count,
            row_count: self.row_count,
            loading: self.loading,
            filtering: self.filtering,
        }
    }
}

/// State shared by every part of one table.
///
/// `TableStore` is a cheap-clone handle: all clones see the same state, and a
/// mutation through any clone is visible to every reader immediately. Writers
/// are designated by type: [`TableRoot`](super::TableRoot) owns the loading and
/// filtering flags, [`TableHead`](super::TableHead) owns the header count, and
/// rows own their [`RowRegistration`].
#[derive(Debug, Clone)]
pub struct TableStore {
    id: TableId,
    inner: Arc<RwLock<TableInner>>,
    changes: ChangeTracker,
}

impl TableStore {
    /// Create the state for a new table with no rows and no headers.
    pub fn new(loading: bool, filtering: bool) -> Self {
        log::debug!("table state created (loading={loading}, filtering={filtering})");
        let id = TableId::new();
        Self {
            id,
            inner: Arc::new(RwLock::new(TableInner {
                loading,
                filtering,
                ..Default::default()
            })),
            changes: ChangeTracker::new(Changed::Table(id)),
        }
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    /// Get the ID as a string (for node binding)
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// Install the host's notifier, told about every mutation.
    pub fn install_notifier(&self, notifier: ChangeNotifier) {
        self.changes.install(notifier);
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Read every field under one lock.
    pub fn snapshot(&self) -> TableSnapshot {
        self.inner
            .read()
            .map(|guard| guard.snapshot())
            .unwrap_or_default()
    }

    pub fn header_count(&self) -> u16 {
        self.snapshot().header_count
    }

    pub fn row_count(&self) -> usize {
        self.snapshot().row_count
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot().loading
    }

    pub fn is_filtering(&self) -> bool {
        self.snapshot().filtering
    }

    pub fn view_state(&self) -> ViewState {
        self.snapshot().view_state()
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Overwrite the header count. Returns true if it changed.
    pub(crate) fn set_header_count(&self, count: u16) -> bool {
        self.write(|inner| {
            if inner.header_count == count {
                return false;
            }
            log::debug!("header count {} -> {}", inner.header_count, count);
            inner.header_count = count;
            true
        })
    }

    /// Mirror an externally supplied loading flag. External value wins.
    pub(crate) fn sync_loading(&self, loading: bool) -> bool {
        self.write(|inner| {
            if inner.loading == loading {
                return false;
            }
            log::debug!("loading {} -> {}", inner.loading, loading);
            inner.loading = loading;
            true
        })
    }

    pub(crate) fn set_filtering(&self, filtering: bool) -> bool {
        self.write(|inner| {
            if inner.filtering == filtering {
                return false;
            }
            inner.filtering = filtering;
            true
        })
    }

    /// Acquire a row slot. The count drops again when the registration is
    /// released or dropped.
    pub fn register_row(&self) -> RowRegistration {
        self.write(|inner| {
            inner.row_count += 1;
            true
        });
        RowRegistration {
            store: Some(self.clone()),
        }
    }

    fn unregister_row(&self) {
        self.write(|inner| match inner.row_count.checked_sub(1) {
            Some(count) => {
                inner.row_count = count;
                true
            }
            None => {
                log::warn!("row unregistered from a table with no rows");
                false
            }
        });
    }

    /// Apply a mutation. Marks dirty and wakes the host when `f` reports a change.
    fn write<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut TableInner) -> bool,
    {
        let changed = match self.inner.write() {
            Ok(mut guard) => f(&mut guard),
            Err(_) => false,
        };
        if changed {
            self.changes.mark();
        }
        changed
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the state changed since the last `clear_dirty`
    pub fn is_dirty(&self) -> bool {
        self.changes.is_dirty()
    }

    pub fn clear_dirty(&self) {
        self.changes.clear();
    }
}

/// A mounted row's slot in the table's row count.
///
/// Created by [`TableStore::register_row`]. Holding it counts one row; dropping
/// it (or calling [`release`](Self::release)) uncounts it exactly once.
/// Re-rendering the owning row never touches the registration.
#[derive(Debug)]
#[must_use = "dropping a registration immediately unregisters the row"]
pub struct RowRegistration {
    store: Option<TableStore>,
}

impl RowRegistration {
    /// The table this row is registered with.
    pub fn table_id(&self) -> Option<TableId> {
        self.store.as_ref().map(TableStore::id)
    }

    /// Unregister now instead of at drop.
    pub fn release(mut self) {
        self.unregister();
    }

    fn unregister(&mut self) {
        if let Some(store) = self.store.take() {
            store.unregister_row();
        }
    }
}

impl Drop for RowRegistration {
    fn drop(&mut self) {
        self.unregister();
    }
}
