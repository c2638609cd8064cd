//! Debounced search field.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, Weak};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::event::{EventResult, Key, KeyCombo};
use crate::timer::Timer;
use crate::changes::{ChangeNotifier, ChangeTracker, Changed};

/// Quiet period before a search is emitted.
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(300);

const DEFAULT_PLACEHOLDER: &str = "Search...";

/// Search text as handed to the callback: surrounding whitespace removed.
pub fn sanitize(raw: &str) -> &str {
    raw.trim()
}

/// Unique identifier for a search field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchFieldId(usize);

impl SearchFieldId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SearchFieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__search_field_{}", self.0)
    }
}

/// Search field configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFieldProps {
    /// Quiet period in milliseconds before the search callback fires.
    pub throttle_ms: u64,
    /// Initial text. Not emitted.
    pub default_value: String,
    pub placeholder: String,
}

impl Default for SearchFieldProps {
    fn default() -> Self {
        Self {
            throttle_ms: DEFAULT_THROTTLE.as_millis() as u64,
            default_value: String::new(),
            placeholder: DEFAULT_PLACEHOLDER.into(),
        }
    }
}

/// The clear button, shown while the field holds text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearButtonView {
    pub label: &'static str,
}

/// What the host draws for a search field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFieldView {
    pub value: String,
    pub placeholder: String,
    pub clear_button: Option<ClearButtonView>,
}

type SearchCallback = Arc<dyn Fn(String) + Send + Sync>;

struct SearchInner {
    /// Displayed text, updated on every keystroke.
    value: String,
    /// Bumped on every change; a pending emission only fires for its own change.
    generation: u64,
    pending: Timer,
    throttle: Duration,
    on_search: Option<SearchCallback>,
}

impl std::fmt::Debug for SearchInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchInner")
            .field("value", &self.value)
            .field("generation", &self.generation)
            .field("pending", &self.pending)
            .field("throttle", &self.throttle)
            .field("on_search", &self.on_search.is_some())
            .finish()
    }
}

/// A text field that reports searches after the user stops typing.
///
/// Every change updates the displayed value immediately and (re)arms a
/// single emission of the trimmed text after the throttle period. Despite
/// the name this is a trailing-edge debounce: only the last change in a
/// burst is emitted. Clearing emits `""` immediately.
///
/// Emissions run on the current tokio runtime. Outside a runtime they are
/// emitted immediately. Dropping the last handle cancels a pending emission.
/// The callback and the throttle period are shared by every clone.
///
/// # Example
///
/// ```ignore
/// let field = SearchField::new(SearchFieldProps::default())
///     .on_search(|query| reload(query));
///
/// field.on_change("  ada ");
/// // 300ms later: reload("ada")
/// ```
#[derive(Clone)]
pub struct SearchField {
    id: SearchFieldId,
    inner: Arc<RwLock<SearchInner>>,
    placeholder: String,
    focus_requested: Arc<AtomicBool>,
    changes: ChangeTracker,
}

impl std::fmt::Debug for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchField")
            .field("id", &self.id)
            .field("inner", &self.inner)
            .field("placeholder", &self.placeholder)
            .finish_non_exhaustive()
    }
}

impl SearchField {
    pub fn new(props: SearchFieldProps) -> Self {
        let id = SearchFieldId::new();
        Self {
            id,
            inner: Arc::new(RwLock::new(SearchInner {
                value: props.default_value,
                generation: 0,
                pending: Timer::new("search emission"),
                throttle: Duration::from_millis(props.throttle_ms),
                on_search: None,
            })),
            placeholder: props.placeholder,
            focus_requested: Arc::new(AtomicBool::new(false)),
            changes: ChangeTracker::new(Changed::Search(id)),
        }
    }

    /// Set the callback receiving sanitized search text.
    pub fn on_search<F>(self, f: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_search = Some(Arc::new(f));
        }
        self
    }

    /// Override the quiet period. Takes effect from the next change.
    pub fn throttle(self, throttle: Duration) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.throttle = throttle;
        }
        self
    }

    pub fn id(&self) -> SearchFieldId {
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

    /// The displayed text, exactly as typed.
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn throttle_period(&self) -> Duration {
        self.inner
            .read()
            .map(|guard| guard.throttle)
            .unwrap_or(DEFAULT_THROTTLE)
    }

    /// Whether an emission is waiting for the quiet period to elapse.
    pub fn has_pending(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.pending.is_armed())
            .unwrap_or(false)
    }

    pub fn show_clear_button(&self) -> bool {
        self.inner
            .read()
            .map(|guard| !guard.value.is_empty())
            .unwrap_or(false)
    }

    pub fn view(&self) -> SearchFieldView {
        let value = self.value();
        let clear_button = (!value.is_empty()).then_some(ClearButtonView {
            label: "Clear search",
        });
        SearchFieldView {
            value,
            placeholder: self.placeholder.clone(),
            clear_button,
        }
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Handle new text from the host's input.
    pub fn on_change(&self, raw: impl Into<String>) {
        let raw = raw.into();
        let Ok(mut guard) = self.inner.write() else {
            return;
        };
        let query = sanitize(&raw).to_owned();
        guard.value = raw;
        guard.generation += 1;

        let mut immediate = None;
        match guard.on_search.clone() {
            Some(callback) => {
                let generation = guard.generation;
                let inner = Arc::downgrade(&self.inner);
                let emitted = query.clone();
                let throttle = guard.throttle;
                let armed = guard.pending.arm(throttle, {
                    let callback = Arc::clone(&callback);
                    move || emit_if_current(&inner, generation, &callback, emitted)
                });
                if let Err(err) = armed {
                    log::warn!("{}: {err}, searching immediately", self.id);
                    immediate = Some((callback, query));
                }
            }
            None => {
                guard.pending.cancel();
            }
        }
        drop(guard);
        self.changes.mark();

        if let Some((callback, query)) = immediate {
            callback(query);
        }
    }

    /// Empty the field and search for `""` immediately.
    ///
    /// Cancels any pending emission and asks the host to focus the field.
    pub fn clear(&self) {
        let callback = match self.inner.write() {
            Ok(mut guard) => {
                guard.value.clear();
                guard.generation += 1;
                guard.pending.cancel();
                guard.on_search.clone()
            }
            Err(_) => None,
        };
        self.focus_requested.store(true, Ordering::SeqCst);
        self.changes.mark();
        log::debug!("{} cleared", self.id);

        if let Some(callback) = callback {
            callback(String::new());
        }
    }

    /// Drop a pending emission without emitting. Returns true if one was waiting.
    ///
    /// Hosts call this when the field leaves the screen but handles to it
    /// stay alive.
    pub fn cancel_pending(&self) -> bool {
        self.inner
            .write()
            .map(|mut guard| {
                guard.generation += 1;
                guard.pending.cancel()
            })
            .unwrap_or(false)
    }

    /// Basic editing for hosts that feed raw keys: typing appends, Backspace
    /// deletes the last character.
    pub fn on_key(&self, key: &KeyCombo) -> EventResult {
        if key.modifiers.ctrl || key.modifiers.alt {
            return EventResult::Ignored;
        }
        let mut value = self.value();
        match key.key {
            Key::Char(c) => value.push(c),
            Key::Backspace => {
                if value.pop().is_none() {
                    return EventResult::Consumed;
                }
            }
            _ => return EventResult::Ignored,
        }
        self.on_change(value);
        EventResult::Consumed
    }

    /// Check and clear the focus request (called by the host)
    pub fn take_focus_request(&self) -> bool {
        self.focus_requested.swap(false, Ordering::SeqCst)
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

impl Default for SearchField {
    fn default() -> Self {
        Self::new(SearchFieldProps::default())
    }
}

/// Emission timer callback: search unless the field changed since arming.
fn emit_if_current(
    inner: &Weak<RwLock<SearchInner>>,
    generation: u64,
    callback: &SearchCallback,
    query: String,
) {
    let Some(inner) = inner.upgrade() else {
        return;
    };
    let current = inner
        .read()
        .map(|guard| guard.generation == generation)
        .unwrap_or(false);
    // Release the field before calling out; the callback may touch it
    drop(inner);
    if current {
        log::debug!("emitting search {query:?}");
        callback(query);
    }
}
