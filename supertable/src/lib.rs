//! Headless composable data-table components.
//!
//! Components keep the coordination state of a data table (row count, header
//! count, loading and filtering flags, collapsible sections, debounced search,
//! sortable headers) and hand the host small view models to draw.

pub mod changes;
pub mod error;
pub mod event;
pub mod search;
pub mod section;
pub mod sort;
pub mod table;
pub mod timer;

pub use error::{Error, Result, SortError};

pub mod prelude {
    pub use crate::changes::{ChangeListener, ChangeNotifier, Changed};
    pub use crate::error::{Error, Result, SortError};
    pub use crate::event::{EventResult, Key, KeyCombo, Modifiers};
    pub use crate::search::{SearchBar, SearchField, SearchFieldProps};
    pub use crate::section::{
        Section, SectionPhase, SectionProps, SectionTarget, SimpleSection, SimpleSectionProps,
    };
    pub use crate::sort::{SortDirection, SortIndicator, SortableHeader};
    pub use crate::table::{
        HeaderCell, LoadingRow, LoadingRows, Placeholder, PlaceholderRow, SkeletonKind,
        TableHead, TableProps, TableRoot, TableRow, TableSnapshot, TableStore, ViewState,
    };
}
