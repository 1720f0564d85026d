use tracing::debug;

use crate::clipboard::entry::ClipEntry;
use crate::clipboard::search_key::SearchKeyBuilder;
use crate::fuzzy::fuzzy_match;

/// Default number of entries kept in the history.
pub const DEFAULT_CAPACITY: usize = 64;

/// What `ClipHistory::record` did with the observed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Empty or whitespace-only text, nothing changed
    Ignored,
    /// Text was already the most recent entry
    Unchanged,
    /// Existing entry moved from `from` to the front
    Promoted { from: usize },
    /// New entry inserted at the front; `evicted` entries dropped from the tail
    Inserted { evicted: usize },
}

/// Snapshot of history entries returned by a search.
///
/// A view's indices are positions in the filtered list, not in the history.
/// Mutations translate them back by `text`, so a view that went stale only
/// turns the operation into a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipView {
    entries: Vec<ClipEntry>,
}

impl ClipView {
    pub fn new(entries: Vec<ClipEntry>) -> Self {
        Self { entries }
    }

    pub fn get(&self, index: usize) -> Option<&ClipEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ClipEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClipEntry> {
        self.entries.iter()
    }

    /// Texts in view order, mostly useful for assertions and logging.
    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<ClipEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub(crate) fn replace(&mut self, index: usize, entry: ClipEntry) {
        if let Some(slot) = self.entries.get_mut(index) {
            *slot = entry;
        }
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&ClipEntry) -> bool) {
        self.entries.retain(keep);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a ClipView {
    type Item = &'a ClipEntry;
    type IntoIter = std::slice::Iter<'a, ClipEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Bounded clipboard history, most recently used first.
/// 有界剪贴板历史，最近使用的排在最前。
///
/// # Invariants / 不变量
///
/// - No two entries share the same `text`.
/// - `len() <= capacity()` after every operation.
/// - Eviction only ever removes from the tail.
///
/// Every operation is synchronous and O(n) with n bounded by the capacity; the
/// duplicate check is a linear scan on purpose. The store is owned by whoever
/// composes it. Multi-threaded hosts wrap it in a single mutex.
#[derive(Debug, Clone)]
pub struct ClipHistory {
    entries: Vec<ClipEntry>,
    capacity: usize,
    keys: SearchKeyBuilder,
}

impl ClipHistory {
    pub fn new(keys: SearchKeyBuilder) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, keys)
    }

    /// Creates a history holding at most `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize, keys: SearchKeyBuilder) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity.min(1024)),
            capacity,
            keys,
        }
    }

    /// Records newly observed clipboard text.
    ///
    /// - Empty or whitespace-only text is ignored.
    /// - Known text is moved to the front; entries that were before it shift
    ///   down by one, entries after it keep their order.
    /// - New text is inserted at the front and the tail is trimmed to capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use tw_core::clipboard::{ClipHistory, RecordOutcome, SearchKeyBuilder};
    ///
    /// let mut history = ClipHistory::new(SearchKeyBuilder::ascii_only());
    /// history.record("hello");
    /// history.record("world");
    /// assert_eq!(history.record("hello"), RecordOutcome::Promoted { from: 1 });
    /// assert_eq!(history.texts(), vec!["hello", "world"]);
    /// ```
    pub fn record(&mut self, text: &str) -> RecordOutcome {
        if text.trim().is_empty() {
            return RecordOutcome::Ignored;
        }

        match self.position(text) {
            Some(0) => RecordOutcome::Unchanged,
            Some(from) => {
                self.entries[..=from].rotate_right(1);
                debug!(from, "Promoted clipboard entry to front");
                RecordOutcome::Promoted { from }
            }
            None => {
                let entry = self.keys.build_entry(text);
                self.entries.insert(0, entry);
                let evicted = self.enforce_capacity();
                debug!(len = self.entries.len(), evicted, "Inserted clipboard entry");
                RecordOutcome::Inserted { evicted }
            }
        }
    }

    /// Returns the entries whose search key fuzzy-matches `query`, in history order.
    ///
    /// The query is lowercased first since search keys are lowercase. An empty
    /// query returns the whole history.
    pub fn search(&self, query: &str) -> ClipView {
        if query.is_empty() {
            return ClipView::new(self.entries.clone());
        }

        let needle = query.to_lowercase();
        ClipView::new(
            self.entries
                .iter()
                .filter(|e| fuzzy_match(&needle, &e.search_key))
                .cloned()
                .collect(),
        )
    }

    /// Removes the history entry shown at `index` in `view`.
    ///
    /// The entry is located by text, not by position. Returns the removed entry,
    /// or `None` when `index` is out of range or the entry is already gone.
    pub fn delete_at(&mut self, view: &ClipView, index: usize) -> Option<ClipEntry> {
        let text = &view.get(index)?.text;
        self.remove(text)
    }

    /// Removes the entry whose text equals `text`.
    pub fn remove(&mut self, text: &str) -> Option<ClipEntry> {
        let pos = self.position(text)?;
        debug!(pos, "Deleted clipboard entry");
        Some(self.entries.remove(pos))
    }

    /// Merges the entry shown at `index` in `view` with the entry that follows
    /// it in history order.
    ///
    /// The merged entry takes the earlier history position and the later one is
    /// removed. Returns the merged entry, or `None` when there is nothing to
    /// merge with or the merged text is already in the history; the store is
    /// left untouched in both cases.
    pub fn merge_at(&mut self, view: &ClipView, index: usize) -> Option<ClipEntry> {
        let text = &view.get(index)?.text;
        let pos = self.position(text)?;
        let next = self.entries.get(pos + 1)?;

        let merged = self.entries[pos].merged_with(next);
        if self.position(&merged.text).is_some() {
            debug!(pos, "Merged text already in history, skipping merge");
            return None;
        }

        self.entries.remove(pos + 1);
        self.entries[pos] = merged.clone();

        debug!(pos, len = self.entries.len(), "Merged clipboard entries");
        Some(merged)
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Changes the capacity, evicting from the tail when it shrinks.
    pub fn set_capacity(&mut self, capacity: usize) -> usize {
        self.capacity = capacity.max(1);
        self.enforce_capacity()
    }

    pub fn get(&self, index: usize) -> Option<&ClipEntry> {
        self.entries.get(index)
    }

    pub fn position(&self, text: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.text == text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn entries(&self) -> &[ClipEntry] {
        &self.entries
    }

    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }

    fn enforce_capacity(&mut self) -> usize {
        let excess = self.entries.len().saturating_sub(self.capacity);
        self.entries.truncate(self.capacity);
        excess
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history() -> ClipHistory {
        ClipHistory::new(SearchKeyBuilder::ascii_only())
    }

    fn history_of(texts: &[&str]) -> ClipHistory {
        let mut h = history();
        // record oldest first so `texts` reads front to back
        for t in texts.iter().rev() {
            h.record(t);
        }
        h
    }

    #[test]
    fn record_inserts_new_text_at_front() {
        let mut h = history_of(&["b", "c"]);
        assert_eq!(h.record("a"), RecordOutcome::Inserted { evicted: 0 });
        assert_eq!(h.texts(), vec!["a", "b", "c"]);
    }

    #[test]
    fn record_ignores_blank_text() {
        let mut h = history();
        assert_eq!(h.record(""), RecordOutcome::Ignored);
        assert_eq!(h.record(" \n\t"), RecordOutcome::Ignored);
        assert!(h.is_empty());
    }

    #[test]
    fn recording_front_entry_again_is_a_no_op() {
        let mut h = history();
        h.record("same");
        assert_eq!(h.record("same"), RecordOutcome::Unchanged);
        assert_eq!(h.texts(), vec!["same"]);
    }

    #[test]
    fn promotion_shifts_only_entries_before_it() {
        let mut h = history_of(&["a", "b", "c", "d", "e"]);
        assert_eq!(h.record("d"), RecordOutcome::Promoted { from: 3 });
        assert_eq!(h.texts(), vec!["d", "a", "b", "c", "e"]);
    }

    #[test]
    fn capacity_evicts_from_tail() {
        let mut h = ClipHistory::with_capacity(3, SearchKeyBuilder::ascii_only());
        h.record("a");
        h.record("b");
        h.record("c");
        assert_eq!(h.record("d"), RecordOutcome::Inserted { evicted: 1 });
        assert_eq!(h.texts(), vec!["d", "c", "b"]);
    }

    #[test]
    fn shrinking_capacity_trims_tail() {
        let mut h = history_of(&["a", "b", "c", "d"]);
        assert_eq!(h.set_capacity(2), 2);
        assert_eq!(h.texts(), vec!["a", "b"]);
    }

    #[test]
    fn zero_capacity_is_clamped_to_one() {
        let mut h = ClipHistory::with_capacity(0, SearchKeyBuilder::ascii_only());
        h.record("a");
        h.record("b");
        assert_eq!(h.texts(), vec!["b"]);
    }

    #[test]
    fn search_preserves_history_order() {
        let h = history_of(&["world", "wide", "dog"]);
        assert_eq!(h.search("wd").texts(), vec!["world", "wide"]);
    }

    #[test]
    fn search_lowercases_query() {
        let h = history_of(&["Hello"]);
        assert_eq!(h.search("HeL").texts(), vec!["Hello"]);
    }

    #[test]
    fn delete_at_translates_view_index_by_text() {
        let mut h = history_of(&["world", "wide", "dog"]);
        let view = h.search("d");
        // view: world, wide, dog ; delete view[2] = dog
        let removed = h.delete_at(&view, 2).map(|e| e.text);
        assert_eq!(removed.as_deref(), Some("dog"));
        assert_eq!(h.texts(), vec!["world", "wide"]);
    }

    #[test]
    fn delete_at_with_stale_view_is_a_no_op() {
        let mut h = history_of(&["a", "b"]);
        let view = h.search("");
        h.remove("b");
        assert!(h.delete_at(&view, 1).is_none());
        assert_eq!(h.texts(), vec!["a"]);
    }

    #[test]
    fn merge_with_nothing_after_in_store_is_a_no_op() {
        let mut h = history_of(&["alpha", "beta", "gamma"]);
        let view = h.search("g");
        assert_eq!(view.texts(), vec!["gamma"]);
        assert!(h.merge_at(&view, 0).is_none());
        assert_eq!(h.texts(), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn merge_uses_store_neighbor_hidden_by_filter() {
        let mut h = history_of(&["apple", "kiwi", "avocado", "plum"]);
        let view = h.search("a");
        // kiwi is filtered out but still follows apple in the store
        assert_eq!(view.texts(), vec!["apple", "avocado"]);

        let merged = h.merge_at(&view, 0).map(|e| e.text);
        assert_eq!(merged.as_deref(), Some("apple kiwi"));
        assert_eq!(h.texts(), vec!["apple kiwi", "avocado", "plum"]);
    }

    #[test]
    fn merge_at_with_stale_view_is_a_no_op() {
        let mut h = history_of(&["a", "b", "c"]);
        let view = h.search("");
        h.remove("b");
        assert!(h.merge_at(&view, 1).is_none());
        assert!(h.merge_at(&view, 7).is_none());
        assert_eq!(h.texts(), vec!["a", "c"]);
    }

    #[test]
    fn merge_shrinks_history_by_one() {
        let mut h = history_of(&["x", "a", "b", "y"]);
        let view = h.search("");
        h.merge_at(&view, 1);
        assert_eq!(h.texts(), vec!["x", "a b", "y"]);
    }

    #[test]
    fn merge_into_existing_text_leaves_history_unchanged() {
        let mut h = history_of(&["a b", "x", "a", "b"]);
        let view = h.search("");
        assert!(h.merge_at(&view, 2).is_none());
        assert_eq!(h.texts(), vec!["a b", "x", "a", "b"]);
    }
}
