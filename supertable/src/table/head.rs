//! Table header: column cells and the header count they report.

use crate::error::Result;
use crate::sort::{SortIndicator, SortableHeader};

use super::store::TableStore;

/// A column header cell.
#[derive(Debug, Clone)]
pub enum HeaderCell {
    /// Static header: no click handling, no icon.
    Plain(String),
    Sortable(SortableHeader),
}

/// What the host draws for one header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCellView {
    pub label: String,
    /// Pointer cursor and hover highlight.
    pub clickable: bool,
    pub indicator: Option<SortIndicator>,
}

impl HeaderCell {
    pub fn plain(label: impl Into<String>) -> Self {
        HeaderCell::Plain(label.into())
    }

    pub fn view(&self) -> HeaderCellView {
        match self {
            HeaderCell::Plain(label) => HeaderCellView {
                label: label.clone(),
                clickable: false,
                indicator: None,
            },
            HeaderCell::Sortable(header) => HeaderCellView {
                label: header.label(),
                clickable: true,
                indicator: Some(header.indicator()),
            },
        }
    }

    /// Handle a click. Plain headers ignore it and return `None`.
    pub fn click(&self) -> Result<Option<tokio::task::JoinHandle<()>>> {
        match self {
            HeaderCell::Plain(_) => Ok(None),
            HeaderCell::Sortable(header) => header.click().map(Some),
        }
    }
}

impl From<SortableHeader> for HeaderCell {
    fn from(header: SortableHeader) -> Self {
        HeaderCell::Sortable(header)
    }
}

impl From<&str> for HeaderCell {
    fn from(label: &str) -> Self {
        HeaderCell::plain(label)
    }
}

/// The header row of a table.
///
/// Its cell count is the table's header count, which every placeholder uses
/// as its default column span. The count is pushed to the table state on
/// every render that changes it.
#[derive(Debug, Clone)]
pub struct TableHead {
    store: TableStore,
    cells: Vec<HeaderCell>,
}

impl TableHead {
    pub fn new(store: &TableStore) -> Self {
        Self {
            store: store.clone(),
            cells: Vec::new(),
        }
    }

    /// Add a cell.
    pub fn cell(mut self, cell: impl Into<HeaderCell>) -> Self {
        self.cells.push(cell.into());
        self
    }

    /// Replace all cells.
    pub fn set_cells(&mut self, cells: Vec<HeaderCell>) {
        self.cells = cells;
    }

    pub fn cells(&self) -> &[HeaderCell] {
        &self.cells
    }

    /// Render the header row, reporting its column count to the table.
    pub fn render(&self) -> Vec<HeaderCellView> {
        let count = u16::try_from(self.cells.len()).unwrap_or(u16::MAX);
        self.store.set_header_count(count);
        self.cells.iter().map(HeaderCell::view).collect()
    }
}
