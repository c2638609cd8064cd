//! Section collapse state machine.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, Weak};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::timer::Timer;
use crate::changes::{ChangeNotifier, ChangeTracker, Changed};

/// Delay between a collapse request and unmounting the content, so the
/// fade-out can finish. Expanding is immediate.
pub const COLLAPSE_GRACE: Duration = Duration::from_millis(200);

/// Unique identifier for a section, used for ARIA linkage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionId(usize);

impl SectionId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__section_{}", self.0)
    }
}

/// Where a section is in its collapse cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionPhase {
    Expanded,
    /// Collapse requested; content stays mounted while it fades out.
    Collapsing,
    Collapsed,
}

/// Section configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionProps {
    /// Whether the header toggles the section. Fixed for the section's lifetime.
    pub collapsible: bool,
    /// Start collapsed.
    pub default_collapsed: bool,
}

#[derive(Debug)]
struct SectionInner {
    phase: SectionPhase,
    collapsible: bool,
    /// Bumped on every toggle; a grace timer only completes its own collapse.
    generation: u64,
    grace: Timer,
    grace_period: Duration,
}

/// A collapsible group of rows.
///
/// Collapsing is two-step: `toggle` moves an expanded section to
/// [`SectionPhase::Collapsing`], and the content is unmounted only after
/// [`COLLAPSE_GRACE`]. Toggling again during the grace period cancels the
/// pending unmount, so the content is never unmounted in between.
///
/// The grace timer runs on the current tokio runtime. Outside a runtime the
/// collapse completes immediately.
#[derive(Debug, Clone)]
pub struct Section {
    id: SectionId,
    inner: Arc<RwLock<SectionInner>>,
    changes: ChangeTracker,
}

impl Section {
    pub fn new(props: SectionProps) -> Self {
        let phase = if props.default_collapsed {
            SectionPhase::Collapsed
        } else {
            SectionPhase::Expanded
        };
        let id = SectionId::new();
        Self {
            id,
            inner: Arc::new(RwLock::new(SectionInner {
                phase,
                collapsible: props.collapsible,
                generation: 0,
                grace: Timer::new("section collapse"),
                grace_period: COLLAPSE_GRACE,
            })),
            changes: ChangeTracker::new(Changed::Section(id)),
        }
    }

    /// A collapsible section, initially expanded.
    pub fn collapsible() -> Self {
        Self::new(SectionProps {
            collapsible: true,
            default_collapsed: false,
        })
    }

    /// Override the grace period to match a different exit animation.
    ///
    /// Applies to every clone of this section, from the next collapse on.
    pub fn with_grace_period(self, grace_period: Duration) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.grace_period = grace_period;
        }
        self
    }

    pub fn id(&self) -> SectionId {
        self.id
    }

    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    pub fn install_notifier(&self, notifier: ChangeNotifier) {
        self.changes.install(notifier);
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn grace_period(&self) -> Duration {
        self.inner
            .read()
            .map(|guard| guard.grace_period)
            .unwrap_or(COLLAPSE_GRACE)
    }

    pub fn phase(&self) -> SectionPhase {
        self.inner
            .read()
            .map(|guard| guard.phase)
            .unwrap_or(SectionPhase::Expanded)
    }

    pub fn is_collapsible(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.collapsible)
            .unwrap_or(false)
    }

    /// The collapsed flag: true as soon as a collapse is requested.
    pub fn is_collapsed(&self) -> bool {
        self.phase() != SectionPhase::Expanded
    }

    /// Whether the content belongs in the render tree.
    pub fn is_content_mounted(&self) -> bool {
        self.phase() != SectionPhase::Collapsed
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Flip the collapsed flag. No-op (returning false) when not collapsible.
    pub fn toggle(&self) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        if !guard.collapsible {
            return false;
        }
        guard.generation += 1;

        let phase = guard.phase;
        match phase {
            SectionPhase::Expanded => {
                guard.phase = SectionPhase::Collapsing;
                let generation = guard.generation;
                let inner = Arc::downgrade(&self.inner);
                let changes = self.changes.clone();
                let id = self.id;
                let grace_period = guard.grace_period;
                let armed = guard.grace.arm(grace_period, move || {
                    finish_collapse(&inner, generation, &changes, id);
                });
                if let Err(err) = armed {
                    log::warn!("{id}: {err}, collapsing without grace period");
                    guard.phase = SectionPhase::Collapsed;
                }
            }
            SectionPhase::Collapsing | SectionPhase::Collapsed => {
                guard.grace.cancel();
                guard.phase = SectionPhase::Expanded;
            }
        }
        log::debug!("{} toggled to {:?}", self.id, guard.phase);
        drop(guard);

        self.changes.mark();
        true
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub fn is_dirty(&self) -> bool {
        self.changes.is_dirty()
    }

    pub fn clear_dirty(&self) {
        self.changes.clear();
    }
}

/// Grace timer callback: unmount the content unless the section was toggled since.
fn finish_collapse(
    inner: &Weak<RwLock<SectionInner>>,
    generation: u64,
    changes: &ChangeTracker,
    id: SectionId,
) {
    let Some(inner) = inner.upgrade() else {
        return;
    };
    let collapsed = match inner.write() {
        Ok(mut guard)
            if guard.generation == generation && guard.phase == SectionPhase::Collapsing =>
        {
            guard.phase = SectionPhase::Collapsed;
            true
        }
        _ => false,
    };
    if collapsed {
        log::debug!("{id} content unmounted");
        changes.mark();
    }
}
