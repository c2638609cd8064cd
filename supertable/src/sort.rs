//! Sortable column header.
//!
//! The header cycles `none -> asc -> desc -> none`. A click hands the *next*
//! direction to a caller-supplied async handler and shows a busy indicator
//! until that handler completes.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, Weak};

use futures::FutureExt;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::{Error, Result, SortError};
use crate::changes::{ChangeNotifier, ChangeTracker, Changed};

/// Sort direction of a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
    #[default]
    None,
}

impl SortDirection {
    /// The direction a click requests.
    pub fn next(self) -> Self {
        match self {
            SortDirection::None => SortDirection::Asc,
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            SortDirection::Asc => '↑',
            SortDirection::Desc => '↓',
            SortDirection::None => '↕',
        }
    }
}

/// What the header draws next to its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    /// A sort request is outstanding.
    Busy,
    /// The direction icon. Unsorted columns draw it dimmed.
    Direction { direction: SortDirection, dimmed: bool },
}

/// Future returned by a sort handler.
pub type SortFuture = BoxFuture<'static, std::result::Result<(), SortError>>;

type SortHandler = Arc<dyn Fn(SortDirection) -> SortFuture + Send + Sync>;

/// Unique identifier for a sortable header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortHeaderId(usize);

impl SortHeaderId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SortHeaderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__sort_header_{}", self.0)
    }
}

#[derive(Debug, Default)]
struct SortInner {
    label: String,
    direction: SortDirection,
    /// Token of the most recent request.
    latest: u64,
    /// Token of the request the busy indicator is waiting for.
    in_flight: Option<u64>,
}

/// A column header that requests sorting on click.
///
/// The header tracks the direction it last requested, so consecutive clicks
/// walk the cycle regardless of how long each handler takes. Hosts that own
/// the sort state can push it back with [`set_direction`](Self::set_direction).
///
/// Overlapping requests are not cancelled. The busy indicator follows the
/// most recent request: an older request finishing late does not clear it.
/// When the most recent request fails, the direction returns to what it was
/// before that click.
///
/// # Example
///
/// ```ignore
/// let header = SortableHeader::new("Name", |direction| async move {
///     reload_sorted(direction).await.map_err(SortError::from)
/// });
///
/// // On click:
/// header.click()?;
/// ```
#[derive(Clone)]
pub struct SortableHeader {
    id: SortHeaderId,
    inner: Arc<RwLock<SortInner>>,
    on_sort: SortHandler,
    changes: ChangeTracker,
}

impl std::fmt::Debug for SortableHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortableHeader")
            .field("id", &self.id)
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl SortableHeader {
    /// Create an unsorted header with the given label and sort handler.
    pub fn new<F, Fut>(label: impl Into<String>, on_sort: F) -> Self
    where
        F: Fn(SortDirection) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<(), SortError>> + Send + 'static,
    {
        let id = SortHeaderId::new();
        Self {
            id,
            inner: Arc::new(RwLock::new(SortInner {
                label: label.into(),
                ..Default::default()
            })),
            on_sort: Arc::new(move |direction| on_sort(direction).boxed()),
            changes: ChangeTracker::new(Changed::Sort(id)),
        }
    }

    /// Start from a direction other than `None`.
    pub fn with_direction(self, direction: SortDirection) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.direction = direction;
        }
        self
    }

    pub fn id(&self) -> SortHeaderId {
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

    pub fn label(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.label.clone())
            .unwrap_or_default()
    }

    /// The current (last requested or externally set) direction.
    pub fn direction(&self) -> SortDirection {
        self.inner
            .read()
            .map(|guard| guard.direction)
            .unwrap_or_default()
    }

    /// Whether a sort request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.in_flight.is_some())
            .unwrap_or(false)
    }

    pub fn indicator(&self) -> SortIndicator {
        self.inner
            .read()
            .map(|guard| match guard.in_flight {
                Some(_) => SortIndicator::Busy,
                None => SortIndicator::Direction {
                    direction: guard.direction,
                    dimmed: guard.direction == SortDirection::None,
                },
            })
            .unwrap_or(SortIndicator::Direction {
                direction: SortDirection::None,
                dimmed: true,
            })
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Overwrite the current direction from the host's sort state.
    pub fn set_direction(&self, direction: SortDirection) {
        if let Ok(mut guard) = self.inner.write()
            && guard.direction != direction
        {
            guard.direction = direction;
            self.changes.mark();
        }
    }

    /// Request the next direction and return a future resolving when the
    /// handler completes.
    ///
    /// The handler is invoked immediately and the busy indicator is set before
    /// this returns. The indicator is cleared when the returned future
    /// finishes, fails, or is dropped. On failure the previous direction is
    /// restored unless a newer request has been made.
    pub fn request(&self) -> impl Future<Output = Result<SortDirection>> + Send + 'static {
        let (previous, next, token) = {
            let mut guard = self
                .inner
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            let previous = guard.direction;
            let next = previous.next();
            guard.direction = next;
            guard.latest += 1;
            guard.in_flight = Some(guard.latest);
            (previous, next, guard.latest)
        };
        self.changes.mark();
        log::debug!("{} requesting sort {:?}", self.id, next);

        let busy = BusyGuard {
            inner: Arc::downgrade(&self.inner),
            token,
            previous,
            changes: self.changes.clone(),
        };
        let pending = (self.on_sort)(next);

        async move {
            if let Err(err) = pending.await {
                busy.roll_back();
                return Err(Error::from(err));
            }
            drop(busy);
            Ok(next)
        }
    }

    /// Handle a click: request the next direction on the current runtime.
    ///
    /// Handler failures are logged, never returned. The returned handle
    /// resolves when the handler completes.
    pub fn click(&self) -> Result<JoinHandle<()>> {
        let runtime = Handle::try_current().map_err(|_| Error::NoRuntime("sort request"))?;
        let id = self.id;
        let request = self.request();
        Ok(runtime.spawn(async move {
            if let Err(err) = request.await {
                log::error!("{id}: {err}");
            }
        }))
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

/// Clears the busy indicator when a request ends, however it ends.
struct BusyGuard {
    inner: Weak<RwLock<SortInner>>,
    token: u64,
    /// Direction before the click that made this request.
    previous: SortDirection,
    changes: ChangeTracker,
}

impl BusyGuard {
    /// Undo the direction change of a failed request, if it is still the latest.
    fn roll_back(&self) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        if let Ok(mut guard) = inner.write()
            && guard.latest == self.token
        {
            log::debug!("sort failed, back to {:?}", self.previous);
            guard.direction = self.previous;
        }
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        let cleared = match inner.write() {
            Ok(mut guard) if guard.in_flight == Some(self.token) => {
                guard.in_flight = None;
                true
            }
            _ => false,
        };
        if cleared {
            self.changes.mark();
        }
    }
}
