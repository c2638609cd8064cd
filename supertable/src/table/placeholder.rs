//! Single-cell placeholder rows: empty, searching and custom loading content.

use serde::{Deserialize, Serialize};

use super::store::TableSnapshot;
use super::view::Placeholder;

/// Configuration shared by the single-cell placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderProps {
    /// Column span of the placeholder cell. Defaults to the header count.
    pub col_span: Option<u16>,
}

/// What a visible placeholder asks the host to draw: one row holding one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderCell {
    pub kind: Placeholder,
    pub col_span: u16,
    pub content: String,
}

/// A placeholder row shown in place of data under one view state.
///
/// # Example
///
/// ```ignore
/// let empty = PlaceholderRow::empty("No users yet");
/// let searching = PlaceholderRow::searching("No users match").col_span(2);
///
/// let snapshot = table.snapshot();
/// if let Some(cell) = empty.render(&snapshot) {
///     draw_cell(cell.col_span, &cell.content);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderRow {
    kind: Placeholder,
    content: String,
    props: PlaceholderProps,
}

impl PlaceholderRow {
    /// Shown when there are no rows and nothing is loading or filtered.
    pub fn empty(content: impl Into<String>) -> Self {
        Self::new(Placeholder::Empty, content)
    }

    /// Shown when a filter matched no rows.
    pub fn searching(content: impl Into<String>) -> Self {
        Self::new(Placeholder::Searching, content)
    }

    /// Shown while loading with no rows.
    pub fn loading(content: impl Into<String>) -> Self {
        Self::new(Placeholder::Loading, content)
    }

    fn new(kind: Placeholder, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            props: PlaceholderProps::default(),
        }
    }

    /// Override the column span.
    pub fn col_span(mut self, span: u16) -> Self {
        self.props.col_span = Some(span);
        self
    }

    /// Replace the configuration wholesale.
    pub fn props(mut self, props: PlaceholderProps) -> Self {
        self.props = props;
        self
    }

    pub fn kind(&self) -> Placeholder {
        self.kind
    }

    /// The cell to draw, or `None` when another state owns the table body.
    pub fn render(&self, snapshot: &TableSnapshot) -> Option<PlaceholderCell> {
        if !self.kind.should_render(snapshot) {
            return None;
        }
        Some(PlaceholderCell {
            kind: self.kind,
            col_span: snapshot.col_span(self.props.col_span),
            content: self.content.clone(),
        })
    }
}
