// ABOUTME: Race-safe autosave coordinator for form-backed payloads.
// ABOUTME: Skips unchanged payloads and version-guards overlapping save attempts.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use tokio::sync::{Mutex, watch};

use crate::backend::SaveBackend;
use crate::compare;

/// What a call to [`Autosave::save`] did.
///
/// Success results and failure reasons themselves are delivered through the
/// registered callbacks, never through this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The payload already matched the last saved value; the backend was not
    /// invoked.
    Skipped,
    /// The backend succeeded and this attempt was still the current one.
    Saved,
    /// The backend failed and this attempt was still the current one.
    Failed,
    /// A newer save was issued while this one was in flight; its outcome was
    /// discarded.
    Superseded,
}

type Comparator<P> = Arc<dyn Fn(&P, &P) -> bool + Send + Sync>;
type SuccessCallback<R> = Box<dyn Fn(&R) + Send + Sync>;
type ErrorCallback = Box<dyn Fn(&anyhow::Error) + Send + Sync>;

/// Mutable coordinator state, protected by a single mutex.
struct State<P> {
    /// Payload as most recently supplied by the form.
    current: P,
    /// Payload as of the last successfully completed save.
    last_saved: P,
    /// Identifies the most recently issued save attempt.
    active_version: u64,
}

/// Race-safe autosave coordinator for a single form.
///
/// The coordinator sits between a form (which owns the editable payload and
/// decides when to trigger a save: on blur, on explicit submit, on teardown)
/// and a [`SaveBackend`] (which durably persists it). The form pushes the
/// current payload with [`set_payload`](Autosave::set_payload) on every edit
/// and calls [`save`](Autosave::save) when it wants persistence.
///
/// # Save semantics
///
/// - **No-op skip:** `save()` with a payload structurally equal to the last
///   saved value resolves immediately without reaching the backend.
/// - **Supersession:** each real save attempt takes a fresh version number.
///   Only the attempt whose version is still current when it completes may
///   update state or fire callbacks; older attempts are silently discarded
///   regardless of completion order. Superseded backend calls are not
///   cancelled, just ignored.
/// - **Retry after failure:** a failed save leaves `last_saved` unchanged, so
///   calling `save()` again with the same payload is not skipped.
pub struct Autosave<P, R> {
    state: Arc<Mutex<State<P>>>,
    backend: Arc<dyn SaveBackend<P, R>>,
    saving: watch::Sender<bool>,
    on_success: Option<SuccessCallback<R>>,
    on_error: Option<ErrorCallback>,
    comparator: Comparator<P>,
    disposed: AtomicBool,
}

impl<P, R> Autosave<P, R>
where
    P: Serialize + Clone + Send + Sync + 'static,
    R: 'static,
{
    /// Create a coordinator for the given backend.
    ///
    /// `initial` is treated as already saved: the first `save()` is a no-op
    /// until the payload is changed via [`set_payload`](Autosave::set_payload).
    pub fn new(initial: P, backend: impl SaveBackend<P, R> + 'static) -> Self {
        Self::new_arc(initial, Arc::new(backend))
    }

    /// Create a coordinator for a backend already wrapped in Arc.
    pub fn new_arc(initial: P, backend: Arc<dyn SaveBackend<P, R>>) -> Self {
        let (saving, _) = watch::channel(false);
        Self {
            state: Arc::new(Mutex::new(State {
                current: initial.clone(),
                last_saved: initial,
                active_version: 0,
            })),
            backend,
            saving,
            on_success: None,
            on_error: None,
            comparator: Arc::new(compare::json_equal),
            disposed: AtomicBool::new(false),
        }
    }

    /// Register a callback fired with the backend result of each successful,
    /// non-superseded save.
    pub fn with_on_success(mut self, f: impl Fn(&R) + Send + Sync + 'static) -> Self {
        self.on_success = Some(Box::new(f));
        self
    }

    /// Register a callback fired with the failure reason of each failed,
    /// non-superseded save.
    pub fn with_on_error(mut self, f: impl Fn(&anyhow::Error) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    /// Replace the payload comparator.
    ///
    /// The default compares canonical JSON structure via
    /// [`compare::json_equal`]. A replacement must be a pure function of the
    /// two payload values.
    pub fn with_comparator(mut self, f: impl Fn(&P, &P) -> bool + Send + Sync + 'static) -> Self {
        self.comparator = Arc::new(f);
        self
    }

    /// Supply the current payload. Call on every form edit.
    pub async fn set_payload(&self, payload: P) {
        self.state.lock().await.current = payload;
    }

    /// Whether the most recently issued save attempt is still outstanding.
    pub fn is_saving(&self) -> bool {
        *self.saving.borrow()
    }

    /// Subscribe to changes of the in-flight flag.
    ///
    /// Lets a UI disable or relabel its submit control while a save is
    /// outstanding.
    pub fn subscribe_saving(&self) -> watch::Receiver<bool> {
        self.saving.subscribe()
    }

    /// Request persistence of the current payload.
    ///
    /// Skips the backend entirely when the payload already matches the last
    /// saved value. Otherwise issues a versioned save attempt; if a newer
    /// attempt is issued before this one completes, this one's outcome is
    /// discarded without firing callbacks or touching state.
    pub async fn save(&self) -> SaveOutcome {
        let (payload, version) = {
            let mut state = self.state.lock().await;
            if (self.comparator)(&state.current, &state.last_saved) {
                return SaveOutcome::Skipped;
            }
            state.active_version += 1;
            self.saving.send_replace(true);
            (state.current.clone(), state.active_version)
        };

        let result = self.backend.save(&payload).await;

        {
            let mut state = self.state.lock().await;
            if version != state.active_version {
                // A newer attempt owns the outcome now.
                return SaveOutcome::Superseded;
            }
            if result.is_ok() {
                state.last_saved = payload;
            }
            self.saving.send_replace(false);
        }

        // Callbacks fire outside the lock so they may call back in.
        match result {
            Ok(result) => {
                if let Some(on_success) = &self.on_success {
                    on_success(&result);
                }
                SaveOutcome::Saved
            }
            Err(error) => {
                if let Some(on_error) = &self.on_error {
                    on_error(&error);
                }
                SaveOutcome::Failed
            }
        }
    }

    /// Teardown hook: flush unsaved state, fire and forget.
    ///
    /// If the current payload differs from the last saved value, issues one
    /// final backend call on a spawned task without observing its outcome: no
    /// version bump, no callbacks, no in-flight flag. Only the first call
    /// flushes; later calls are no-ops.
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispose(&self) {
        if self.disposed.swap(true, Ordering::SeqCst) {
            return;
        }

        let state = Arc::clone(&self.state);
        let backend = Arc::clone(&self.backend);
        let comparator = Arc::clone(&self.comparator);
        tokio::spawn(async move {
            let pending = {
                let state = state.lock().await;
                if comparator(&state.current, &state.last_saved) {
                    None
                } else {
                    Some(state.current.clone())
                }
            };
            if let Some(payload) = pending {
                let _ = backend.save(&payload).await;
            }
        });
    }
}
