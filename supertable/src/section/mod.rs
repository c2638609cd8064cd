//! Collapsible row sections.
//!
//! A [`Section`] is composed from a header (with an optional title and
//! collapse trigger) and a content body. [`SimpleSection`] wires the usual
//! composition together from a title.

mod events;
mod render;
mod state;

pub use events::SectionTarget;
pub use render::{CollapseTriggerView, Fade, SectionContentView, SectionHeaderView};
pub use state::{COLLAPSE_GRACE, Section, SectionId, SectionPhase, SectionProps};

use serde::{Deserialize, Serialize};

use crate::table::TableSnapshot;

/// Configuration for [`SimpleSection`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleSectionProps {
    pub title: String,
    pub collapsible: bool,
    pub default_collapsed: bool,
    /// Header column span. Defaults to the table's header count.
    pub col_span: Option<u16>,
}

/// Everything a host draws for a [`SimpleSection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleSectionView {
    pub header: SectionHeaderView,
    pub title: String,
    pub trigger: Option<CollapseTriggerView>,
    pub content: Option<SectionContentView>,
}

/// A titled section: header with title and trigger, then the content.
#[derive(Debug, Clone)]
pub struct SimpleSection {
    section: Section,
    title: String,
    col_span: Option<u16>,
}

impl SimpleSection {
    pub fn new(props: SimpleSectionProps) -> Self {
        Self {
            section: Section::new(SectionProps {
                collapsible: props.collapsible,
                default_collapsed: props.default_collapsed,
            }),
            title: props.title,
            col_span: props.col_span,
        }
    }

    /// The underlying section, for toggling and event dispatch.
    pub fn section(&self) -> &Section {
        &self.section
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn render(&self, table: &TableSnapshot) -> SimpleSectionView {
        SimpleSectionView {
            header: self.section.header_view(self.col_span, table),
            title: self.title.clone(),
            trigger: self.section.trigger_view(),
            content: self.section.content_view(),
        }
    }
}
