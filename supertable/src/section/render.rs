//! View models for the parts of a section.

use crate::table::TableSnapshot;

use super::{Section, SectionPhase};

/// Header row of a section. Interactive attributes are only present when
/// the section is collapsible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeaderView {
    pub col_span: u16,
    pub clickable: bool,
    pub role: Option<&'static str>,
    pub tab_index: Option<i32>,
    pub aria_expanded: Option<bool>,
    /// Id of the content element the header controls.
    pub aria_controls: Option<String>,
}

/// The chevron button that toggles the section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapseTriggerView {
    pub label: &'static str,
    pub aria_expanded: bool,
    /// Chevron rotation in degrees: points down when expanded.
    pub rotation: u16,
    /// Excluded from tab order; the header row is the focus target.
    pub tab_index: i32,
}

/// Fade animation applied to mounted content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fade {
    In,
    Out,
}

/// Content body of a section while it is mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionContentView {
    pub id: String,
    pub animation: Fade,
}

impl Section {
    /// Element id of the section content.
    pub fn content_id(&self) -> String {
        format!("section-content-{}", self.id())
    }

    /// Header view. The column span defaults to the table's header count.
    pub fn header_view(&self, col_span: Option<u16>, table: &TableSnapshot) -> SectionHeaderView {
        let collapsible = self.is_collapsible();
        SectionHeaderView {
            col_span: table.col_span(col_span),
            clickable: collapsible,
            role: collapsible.then_some("button"),
            tab_index: collapsible.then_some(0),
            aria_expanded: collapsible.then(|| !self.is_collapsed()),
            aria_controls: collapsible.then(|| self.content_id()),
        }
    }

    /// Trigger view, or `None` for sections that cannot collapse.
    pub fn trigger_view(&self) -> Option<CollapseTriggerView> {
        if !self.is_collapsible() {
            return None;
        }
        let expanded = !self.is_collapsed();
        Some(CollapseTriggerView {
            label: if expanded {
                "Collapse section"
            } else {
                "Expand section"
            },
            aria_expanded: expanded,
            rotation: if expanded { 90 } else { 0 },
            tab_index: -1,
        })
    }

    /// Content view, or `None` once the content is unmounted.
    pub fn content_view(&self) -> Option<SectionContentView> {
        let animation = match self.phase() {
            SectionPhase::Expanded => Fade::In,
            SectionPhase::Collapsing => Fade::Out,
            SectionPhase::Collapsed => return None,
        };
        Some(SectionContentView {
            id: self.content_id(),
            animation,
        })
    }
}
