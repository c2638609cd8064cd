//! Skeleton loading rows.

use serde::{Deserialize, Serialize};

use super::store::TableSnapshot;
use super::view::Placeholder;

/// Number of skeleton rows drawn when no count is configured.
pub const DEFAULT_LOADING_ROWS: usize = 3;

/// The skeleton drawn in one loading cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkeletonKind {
    Text,
    #[default]
    Line,
    Circle,
    Badge,
    Button,
    Avatar,
    Icon,
}

/// Nominal geometry of a skeleton, in the host's length unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkeletonShape {
    /// Stacked bars; the last one is shortened to `last_width_pct` percent.
    Lines { count: u8, last_width_pct: u8 },
    /// A full-width bar.
    Bar { height: u16 },
    Circle { diameter: u16 },
    Block { width: u16, height: u16, pill: bool },
}

impl SkeletonKind {
    pub fn shape(self) -> SkeletonShape {
        match self {
            SkeletonKind::Text => SkeletonShape::Lines {
                count: 2,
                last_width_pct: 80,
            },
            SkeletonKind::Line => SkeletonShape::Bar { height: 4 },
            SkeletonKind::Circle => SkeletonShape::Circle { diameter: 20 },
            SkeletonKind::Avatar => SkeletonShape::Circle { diameter: 40 },
            SkeletonKind::Badge => SkeletonShape::Block {
                width: 60,
                height: 20,
                pill: true,
            },
            SkeletonKind::Button => SkeletonShape::Block {
                width: 80,
                height: 32,
                pill: false,
            },
            SkeletonKind::Icon => SkeletonShape::Block {
                width: 24,
                height: 24,
                pill: false,
            },
        }
    }
}

/// One skeleton row: a skeleton per header column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkeletonRow {
    pub cells: Vec<SkeletonKind>,
}

impl SkeletonRow {
    /// Cell `i` uses `pattern[i]`, falling back to a line.
    fn from_pattern(pattern: &[SkeletonKind], columns: u16) -> Self {
        let cells = (0..usize::from(columns))
            .map(|i| pattern.get(i).copied().unwrap_or_default())
            .collect();
        Self { cells }
    }
}

/// A single skeleton row, drawn whenever the table is loading.
///
/// Unlike [`LoadingRows`] it does not check the row count, so it can be
/// appended below existing data during a refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingRow {
    pattern: Vec<SkeletonKind>,
}

impl LoadingRow {
    pub fn new(pattern: Vec<SkeletonKind>) -> Self {
        Self { pattern }
    }

    pub fn render(&self, snapshot: &TableSnapshot) -> Option<SkeletonRow> {
        snapshot
            .loading
            .then(|| SkeletonRow::from_pattern(&self.pattern, snapshot.header_count))
    }
}

/// Configuration for [`LoadingRows`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingRowsProps {
    /// Skeleton per column, left to right.
    pub pattern: Vec<SkeletonKind>,
    /// Number of skeleton rows.
    pub count: usize,
}

impl Default for LoadingRowsProps {
    fn default() -> Self {
        Self {
            pattern: Vec::new(),
            count: DEFAULT_LOADING_ROWS,
        }
    }
}

/// Skeleton rows standing in for data while the first page loads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingRows {
    props: LoadingRowsProps,
}

impl LoadingRows {
    pub fn new(pattern: Vec<SkeletonKind>) -> Self {
        Self {
            props: LoadingRowsProps {
                pattern,
                ..Default::default()
            },
        }
    }

    pub fn from_props(props: LoadingRowsProps) -> Self {
        Self { props }
    }

    /// Set the number of skeleton rows.
    pub fn count(mut self, count: usize) -> Self {
        self.props.count = count;
        self
    }

    pub fn render(&self, snapshot: &TableSnapshot) -> Option<Vec<SkeletonRow>> {
        if !Placeholder::LoadingRows.should_render(snapshot) {
            return None;
        }
        let row = SkeletonRow::from_pattern(&self.props.pattern, snapshot.header_count);
        Some(vec![row; self.props.count])
    }
}
