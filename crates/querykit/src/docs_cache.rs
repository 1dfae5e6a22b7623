//! # Document Cache
//!
//! Read-through cache for generated API documents. A document is identified
//! by its name plus the host and base path it is served under, since links
//! inside the document depend on both.
//!
//! Generation runs at most once per key. Concurrent callers asking for the
//! same key block until the first generation finishes and then share its
//! result. A failed generation is not stored; the next caller retries.
//! Entries are never evicted.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

/// Identity of one generated document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentKey {
    pub document_name: String,
    pub host: String,
    pub base_path: String,
}

impl DocumentKey {
    pub fn new(
        document_name: impl Into<String>,
        host: impl Into<String>,
        base_path: impl Into<String>,
    ) -> Self {
        Self {
            document_name: document_name.into(),
            host: host.into(),
            base_path: base_path.into(),
        }
    }
}

type Slot<V> = Arc<OnceCell<Arc<V>>>;

pub struct DocumentCache<V> {
    slots: Mutex<HashMap<DocumentKey, Slot<V>>>,
}

impl<V> Default for DocumentCache<V> {
    fn default() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }
}

impl<V> DocumentCache<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_generate<F>(&self, key: &DocumentKey, generate: F) -> Arc<V>
    where
        F: FnOnce() -> V,
    {
        let slot = self.slot(key);
        slot.get_or_init(|| {
            tracing::debug!(document = %key.document_name, host = %key.host, "generating document");
            Arc::new(generate())
        })
        .clone()
    }

    pub fn try_get_or_generate<F, E>(&self, key: &DocumentKey, generate: F) -> Result<Arc<V>, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        let slot = self.slot(key);
        let result = slot
            .get_or_try_init(|| {
                tracing::debug!(document = %key.document_name, host = %key.host, "generating document");
                generate().map(Arc::new)
            })
            .cloned();
        if result.is_err() {
            self.release(key, &slot);
        }
        result
    }

    /// Whether a generated document is stored for `key`.
    pub fn contains(&self, key: &DocumentKey) -> bool {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .is_some_and(|slot| slot.get().is_some())
    }

    /// Number of generated documents.
    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|slot| slot.get().is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // The map lock is held only to find or create the slot; generation runs
    // under the slot's own once-cell so distinct keys never wait on each other.
    fn slot(&self, key: &DocumentKey) -> Slot<V> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.entry(key.clone()).or_default().clone()
    }

    // Drops the slot for `key` if it is still ours and still empty.
    fn release(&self, key: &DocumentKey, slot: &Slot<V>) {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        if slots
            .get(key)
            .is_some_and(|s| Arc::ptr_eq(s, slot) && s.get().is_none())
        {
            slots.remove(key);
        }
    }

    #[cfg(test)]
    fn slot_count(&self) -> usize {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}
