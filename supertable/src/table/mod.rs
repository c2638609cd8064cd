//! Table primitives and the state they share.
//!
//! A [`TableRoot`] creates one [`TableStore`]. The header reports its column
//! count into it, rows register into it, and placeholders read a
//! [`TableSnapshot`] of it to decide whether they render.

mod head;
mod placeholder;
mod root;
mod row;
mod skeleton;
mod store;
mod view;

pub use head::{HeaderCell, HeaderCellView, TableHead};
pub use placeholder::{PlaceholderCell, PlaceholderProps, PlaceholderRow};
pub use root::{TableProps, TableRoot};
pub use row::TableRow;
pub use skeleton::{
    DEFAULT_LOADING_ROWS, LoadingRow, LoadingRows, LoadingRowsProps, SkeletonKind, SkeletonRow,
    SkeletonShape,
};
pub use store::{RowRegistration, TableId, TableSnapshot, TableStore};
pub use view::{Placeholder, ViewState, resolve};
