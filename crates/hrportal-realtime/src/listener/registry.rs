//! Registry of live listeners.

use std::sync::Arc;

use dashmap::DashMap;

use super::handle::{ListenerHandle, ListenerId};

/// Concurrency-safe set of listeners, keyed by id.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    listeners: DashMap<ListenerId, Arc<ListenerHandle>>,
}

impl ListenerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a listener.
    pub fn insert(&self, handle: Arc<ListenerHandle>) {
        self.listeners.insert(handle.id, handle);
    }

    /// Removes a listener.
    pub fn remove(&self, id: &ListenerId) -> Option<Arc<ListenerHandle>> {
        self.listeners.remove(id).map(|(_, handle)| handle)
    }

    /// Point-in-time copy of every listener. No shard lock is held once
    /// this returns, so sends never block registration.
    pub fn snapshot(&self) -> Vec<Arc<ListenerHandle>> {
        self.listeners
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Number of registered listeners, in any state.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
