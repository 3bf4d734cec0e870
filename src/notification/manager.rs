//! The notification manager is the dispatch point for caught errors: it
//! tracks how often each error kind has been seen and fans a notification
//! out to every registered channel.

use crate::core::{ErrorEvent, Notifier, RequestContext};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tracing::{debug, error};

/// The registry of notification channels.
///
/// Channels are addressed by their `name()` for registration bookkeeping.
/// Dispatch is sequential and a failing channel never prevents the
/// remaining ones from being invoked.
pub struct NotificationManager {
    notifiers: Vec<Arc<dyn Notifier>>,
    ignored_kinds: HashSet<String>,
    occurrences: Mutex<HashMap<String, usize>>,
}

impl NotificationManager {
    /// Creates an empty manager with no channels and no ignore list.
    pub fn new() -> Self {
        Self {
            notifiers: Vec::new(),
            ignored_kinds: HashSet::new(),
            occurrences: Mutex::new(HashMap::new()),
        }
    }

    /// Adds a channel to the end of the dispatch order.
    pub fn register(&mut self, notifier: Arc<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Removes the first channel with the given name, returning it if
    /// one was registered.
    pub fn unregister(&mut self, name: &str) -> Option<Arc<dyn Notifier>> {
        let position = self.notifiers.iter().position(|n| n.name() == name)?;
        Some(self.notifiers.remove(position))
    }

    /// Suppresses all future notifications for an error kind.
    pub fn ignore_kind(&mut self, kind: impl Into<String>) {
        self.ignored_kinds.insert(kind.into());
    }

    /// The names of the registered channels, in dispatch order.
    pub fn names(&self) -> Vec<&str> {
        self.notifiers.iter().map(|n| n.name()).collect()
    }

    /// Dispatches one caught error to every registered channel.
    ///
    /// Returns `false` when the error kind is on the ignore list and no
    /// channel was invoked, `true` otherwise.
    pub async fn notify(&self, error: &dyn ErrorEvent, context: Option<&RequestContext>) -> bool {
        if self.ignored_kinds.contains(error.kind()) {
            debug!(kind = error.kind(), "Ignoring error kind.");
            return false;
        }

        let count = self.record_occurrence(error.kind());
        for notifier in &self.notifiers {
            if let Err(e) = notifier.notify(error, context, Some(count)).await {
                error!(
                    notifier = notifier.name(),
                    kind = error.kind(),
                    error = %e,
                    "Notification channel failed"
                );
            }
        }
        true
    }

    fn record_occurrence(&self, kind: &str) -> usize {
        // Recover from a poisoned lock; the counter map stays usable
        // even if a panic unwound through a previous holder.
        let mut occurrences = self
            .occurrences
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        let count = occurrences.entry(kind.to_string()).or_insert(0);
        *count += 1;
        *count
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}
