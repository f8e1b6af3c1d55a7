//! Session-local memory of raised alerts.

use herald_core::PostId;
use std::collections::HashSet;

/// Post ids that have already triggered a local alert this session.
///
/// Owned and mutated exclusively by the poller. Never persisted: a
/// restart forgets prior alerts, so re-alerting after a reload is
/// possible and accepted. Cleared when the signed-in identity changes.
#[derive(Debug, Clone, Default)]
pub struct NotifiedSet {
    ids: HashSet<PostId>,
}

impl NotifiedSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an alert was raised for `id`. Returns `false` if the
    /// id was already present.
    pub fn insert(&mut self, id: PostId) -> bool {
        self.ids.insert(id)
    }

    /// Whether an alert was already raised for `id`.
    pub fn contains(&self, id: &PostId) -> bool {
        self.ids.contains(id)
    }

    /// Forget all raised alerts.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Number of posts alerted so far.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no alerts have been raised yet.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
