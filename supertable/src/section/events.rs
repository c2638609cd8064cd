//! Event handling for sections.

use crate::event::{EventResult, Key, KeyCombo};

use super::Section;

/// The part of a section a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionTarget {
    /// The header row.
    Header,
    /// The collapse trigger button inside the header.
    Trigger,
}

impl Section {
    /// Handle a key while the header holds focus: Enter or Space toggles.
    pub fn on_key(&self, key: &KeyCombo) -> EventResult {
        if !key.modifiers.none() || !self.is_collapsible() {
            return EventResult::Ignored;
        }
        match key.key {
            Key::Enter | Key::Char(' ') => {
                self.toggle();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    /// Handle a click on the header or on the trigger.
    ///
    /// A trigger click is consumed: the host must not bubble it to the
    /// header, or the section would toggle twice.
    pub fn dispatch_click(&self, target: SectionTarget) -> EventResult {
        match target {
            SectionTarget::Header if self.toggle() => EventResult::Consumed,
            SectionTarget::Header => EventResult::Ignored,
            // Not rendered for fixed sections, so nothing to click
            SectionTarget::Trigger if !self.is_collapsible() => EventResult::Ignored,
            SectionTarget::Trigger => {
                self.toggle();
                EventResult::Consumed
            }
        }
    }
}
