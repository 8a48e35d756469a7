//! Request bookkeeping for callers that re-render on every edit.
//!
//! Validation requests are not cancelled when the document changes again;
//! instead every request carries a [`Generation`] and responses for
//! anything but the latest generation are dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::MarkpenConfig;

/// Default debounce delay in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 250;

/// Ordinal of a validation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    /// The raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Hands out generations and tells whether one is still the latest.
#[derive(Debug, Default)]
pub struct RequestTracker {
    current: AtomicU64,
}

impl RequestTracker {
    /// Creates a tracker with no requests started.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, superseding every earlier one.
    pub fn begin(&self) -> Generation {
        Generation(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// The latest generation handed out.
    pub fn current(&self) -> Generation {
        Generation(self.current.load(Ordering::SeqCst))
    }

    /// Returns true if no request was started after `generation`.
    pub fn is_current(&self, generation: Generation) -> bool {
        self.current() == generation
    }

    /// Returns `response` if it belongs to the latest request.
    pub fn accept<T>(&self, generation: Generation, response: T) -> Option<T> {
        if self.is_current(generation) {
            Some(response)
        } else {
            debug!(
                "Discarding stale response for generation {} (current {})",
                generation.get(),
                self.current().get()
            );
            None
        }
    }
}

/// Trailing-edge debouncer.
///
/// Triggers within the delay collapse into one call for the latest trigger.
#[derive(Debug, Clone)]
pub struct Debouncer {
    tracker: Arc<RequestTracker>,
    delay: Duration,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}

impl Debouncer {
    /// Creates a debouncer with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            tracker: Arc::new(RequestTracker::new()),
            delay,
        }
    }

    /// Creates a debouncer using the configured delay.
    pub fn from_config(config: &MarkpenConfig) -> Self {
        Self::new(config.debounce_delay())
    }

    /// The tracker used to tag triggers, shared with response handlers.
    pub fn tracker(&self) -> &Arc<RequestTracker> {
        &self.tracker
    }

    /// Schedules `f` to run after the delay unless triggered again.
    ///
    /// Must be called within a tokio runtime. The returned handle resolves to
    /// whether `f` ran.
    pub fn trigger<F>(&self, f: F) -> JoinHandle<bool>
    where
        F: FnOnce(Generation) + Send + 'static,
    {
        let generation = self.tracker.begin();
        let tracker = Arc::clone(&self.tracker);
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            if tracker.is_current(generation) {
                f(generation);
                true
            } else {
                debug!("Skipping superseded trigger {}", generation.get());
                false
            }
        })
    }
}
