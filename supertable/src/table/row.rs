//! Data rows.

use super::store::{RowRegistration, TableId, TableStore};

/// A mounted data row.
///
/// Mounting registers the row with its table and dropping the row
/// unregisters it, so the table's row count always equals the number of
/// live `TableRow` values. Updating the cells does not re-register.
#[derive(Debug)]
pub struct TableRow {
    registration: RowRegistration,
    cells: Vec<String>,
}

impl TableRow {
    /// Mount a row in the given table.
    pub fn mount(store: &TableStore, cells: Vec<String>) -> Self {
        Self {
            registration: store.register_row(),
            cells,
        }
    }

    pub fn table_id(&self) -> Option<TableId> {
        self.registration.table_id()
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Replace the cell contents in place.
    pub fn set_cells(&mut self, cells: Vec<String>) {
        self.cells = cells;
    }
}
