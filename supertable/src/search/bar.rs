//! Search bar: lays out a search field next to other controls.

use super::SearchField;

/// Spacing of a search bar, in the host's spacing units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBarLayout {
    pub gap: u16,
    pub margin_bottom: u16,
    pub full_width: bool,
}

impl Default for SearchBarLayout {
    fn default() -> Self {
        Self {
            gap: 3,
            margin_bottom: 4,
            full_width: true,
        }
    }
}

/// A horizontal group holding an optional search field and sibling controls,
/// identified by the host's element ids.
#[derive(Debug, Clone, Default)]
pub struct SearchBar {
    field: Option<SearchField>,
    controls: Vec<String>,
    layout: SearchBarLayout,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: SearchField) -> Self {
        self.field = Some(field);
        self
    }

    /// Add a sibling control after the field.
    pub fn control(mut self, id: impl Into<String>) -> Self {
        self.controls.push(id.into());
        self
    }

    pub fn layout(mut self, layout: SearchBarLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn search_field(&self) -> Option<&SearchField> {
        self.field.as_ref()
    }

    pub fn controls(&self) -> &[String] {
        &self.controls
    }

    pub fn spacing(&self) -> SearchBarLayout {
        self.layout
    }
}
