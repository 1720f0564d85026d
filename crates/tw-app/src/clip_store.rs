//! Shared, lock-protected clipboard history.
//! 共享的剪贴板历史（互斥锁保护）

use std::sync::{Arc, Mutex, MutexGuard};

use tw_core::clipboard::{ClipEntry, ClipHistory, ClipView, RecordOutcome};

/// Handle to the one clipboard history of the process.
///
/// Clones share the same history. Every method takes the lock once, so a
/// single operation is never interleaved with another one.
#[derive(Debug, Clone)]
pub struct SharedClipHistory {
    inner: Arc<Mutex<ClipHistory>>,
}

impl SharedClipHistory {
    pub fn new(history: ClipHistory) -> Self {
        Self {
            inner: Arc::new(Mutex::new(history)),
        }
    }

    pub fn record(&self, text: &str) -> RecordOutcome {
        self.lock().record(text)
    }

    pub fn search(&self, query: &str) -> ClipView {
        self.lock().search(query)
    }

    pub fn delete_at(&self, view: &ClipView, index: usize) -> Option<ClipEntry> {
        self.lock().delete_at(view, index)
    }

    pub fn merge_at(&self, view: &ClipView, index: usize) -> Option<ClipEntry> {
        self.lock().merge_at(view, index)
    }

    pub fn set_capacity(&self, capacity: usize) -> usize {
        self.lock().set_capacity(capacity)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn texts(&self) -> Vec<String> {
        self.lock().texts().into_iter().map(str::to_string).collect()
    }

    /// Runs `f` with exclusive access, for multi-step edits such as a picker key press.
    pub fn with<R>(&self, f: impl FnOnce(&mut ClipHistory) -> R) -> R {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, ClipHistory> {
        // ClipHistory methods never leave it half-updated, so a poisoned lock is still usable
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
