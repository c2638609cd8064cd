//! View-state resolution.
//!
//! Priority: rows present > loading > filtering > empty. Every placeholder
//! renderer answers its "should I render" question from the same snapshot,
//! so at most one kind of placeholder is eligible at a time.

use serde::{Deserialize, Serialize};

use super::store::TableSnapshot;

/// What the table body shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    /// At least one row is mounted.
    Content,
    Loading,
    /// No rows, a filter is active.
    Searching,
    /// No rows and nothing pending.
    Empty,
}

/// Resolve the view state from the raw table flags.
pub fn resolve(row_count: usize, loading: bool, filtering: bool) -> ViewState {
    if row_count > 0 {
        ViewState::Content
    } else if loading {
        ViewState::Loading
    } else if filtering {
        ViewState::Searching
    } else {
        ViewState::Empty
    }
}

/// A renderer that substitutes for data rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    /// Custom loading content.
    Loading,
    /// Skeleton rows. Shares the loading gate; both render if both are declared.
    LoadingRows,
    /// "No results" content for an active filter.
    Searching,
    /// Default "no data" content.
    Empty,
}

impl Placeholder {
    pub const ALL: [Placeholder; 4] = [
        Placeholder::Loading,
        Placeholder::LoadingRows,
        Placeholder::Searching,
        Placeholder::Empty,
    ];

    /// The view state this placeholder stands in for.
    pub fn view_state(self) -> ViewState {
        match self {
            Placeholder::Loading | Placeholder::LoadingRows => ViewState::Loading,
            Placeholder::Searching => ViewState::Searching,
            Placeholder::Empty => ViewState::Empty,
        }
    }

    /// Whether this placeholder renders for the given snapshot.
    pub fn should_render(self, snapshot: &TableSnapshot) -> bool {
        snapshot.view_state() == self.view_state()
    }
}
