//! Search input for filtering a table.

mod bar;
mod field;

pub use bar::{SearchBar, SearchBarLayout};
pub use field::{
    ClearButtonView, DEFAULT_THROTTLE, SearchField, SearchFieldId, SearchFieldProps,
    SearchFieldView, sanitize,
};
