//! Table root: owns the shared state and the caller's flags.

use serde::{Deserialize, Serialize};

use super::head::TableHead;
use super::row::TableRow;
use super::store::{TableSnapshot, TableStore};

/// Caller-controlled table flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableProps {
    /// Data is being fetched.
    pub loading: bool,
    /// A filter or search is active.
    pub filtering: bool,
    /// Highlight rows on hover.
    pub interactive: bool,
}

/// The root of one table.
///
/// # Example
///
/// ```ignore
/// let mut table = TableRoot::new(TableProps { loading: true, ..Default::default() });
/// let head = table.head().cell("Name").cell("Email");
/// head.render();
///
/// let rows: Vec<TableRow> = users.iter().map(|u| table.row(u.cells())).collect();
/// table.update(TableProps { loading: false, ..Default::default() });
/// ```
#[derive(Debug)]
pub struct TableRoot {
    props: TableProps,
    store: TableStore,
}

impl TableRoot {
    pub fn new(props: TableProps) -> Self {
        Self {
            props,
            store: TableStore::new(props.loading, props.filtering),
        }
    }

    /// Apply new caller flags. Loading and filtering flow into the shared
    /// state; the caller's values always win.
    pub fn update(&mut self, props: TableProps) {
        self.store.sync_loading(props.loading);
        self.store.set_filtering(props.filtering);
        self.props = props;
    }

    pub fn props(&self) -> TableProps {
        self.props
    }

    /// Handle to the shared state, for parts created by the host.
    pub fn store(&self) -> &TableStore {
        &self.store
    }

    pub fn snapshot(&self) -> TableSnapshot {
        self.store.snapshot()
    }

    /// Whether rows should react to hover.
    ///
    /// Only when requested, and never while loading or while the body shows a
    /// placeholder instead of rows.
    pub fn is_interactive(&self) -> bool {
        let snapshot = self.store.snapshot();
        self.props.interactive && !snapshot.loading && snapshot.row_count > 0
    }

    /// Create the header row for this table.
    pub fn head(&self) -> TableHead {
        TableHead::new(&self.store)
    }

    /// Mount a data row in this table.
    pub fn row(&self, cells: Vec<String>) -> TableRow {
        TableRow::mount(&self.store, cells)
    }
}

impl Default for TableRoot {
    fn default() -> Self {
        Self::new(TableProps::default())
    }
}
