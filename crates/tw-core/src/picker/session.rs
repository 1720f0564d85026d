use tracing::debug;

use crate::clipboard::{ClipEntry, ClipHistory, ClipView};

use super::key::{PickerAction, PickerKey};

/// Row labels, in the order of the number row.
pub const INDEX_LABELS: [char; 10] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', '0'];

/// Label shown on the single row of an empty page.
pub const EMPTY_LABEL: char = '\u{2205}';

/// Text shown on the single row of an empty page.
pub const EMPTY_HISTORY_TEXT: &str = "Empty history.";

/// One candidate row of the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerRow {
    pub label: char,
    pub display: String,
}

/// What the candidate list should show right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerPage {
    pub rows: Vec<PickerRow>,
    /// Row to highlight, `None` when the page is empty
    pub highlighted: Option<usize>,
    pub page: usize,
    pub page_count: usize,
    pub preedit: String,
    /// Character count of the highlighted entry
    pub aux_count: usize,
}

/// Interactive, paged view over the clipboard history.
/// 剪贴板历史的分页交互视图。
///
/// The session keeps a filtered snapshot (`lookup`) of the history; edits go to
/// the history first and are then mirrored into the snapshot so the cursor stays
/// on the same logical entry.
#[derive(Debug, Clone)]
pub struct ClipPicker {
    lookup: ClipView,
    preedit: String,
    cursor: usize,
    page_size: usize,
}

impl ClipPicker {
    /// Creates a picker showing `page_size` rows per page (clamped to 1..=10).
    pub fn new(page_size: usize) -> Self {
        Self {
            lookup: ClipView::default(),
            preedit: String::new(),
            cursor: 0,
            page_size: page_size.clamp(1, INDEX_LABELS.len()),
        }
    }

    /// Starts a session over the full history.
    pub fn open(&mut self, history: &ClipHistory) {
        self.lookup = history.search("");
        self.preedit.clear();
        self.cursor = 0;
    }

    pub fn lookup(&self) -> &ClipView {
        &self.lookup
    }

    pub fn preedit(&self) -> &str {
        &self.preedit
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn highlighted(&self) -> Option<&ClipEntry> {
        self.lookup.get(self.cursor)
    }

    /// Replaces the query and refilters; returns `false` if it did not change.
    pub fn set_preedit(&mut self, history: &ClipHistory, preedit: &str) -> bool {
        if self.preedit == preedit {
            return false;
        }
        self.preedit = preedit.to_string();
        self.lookup = history.search(&self.preedit);
        self.cursor = 0;
        true
    }

    pub fn push_char(&mut self, history: &ClipHistory, c: char) -> bool {
        let mut preedit = self.preedit.clone();
        preedit.push(c);
        self.set_preedit(history, &preedit)
    }

    pub fn pop_char(&mut self, history: &ClipHistory) -> bool {
        let mut preedit = self.preedit.clone();
        preedit.pop();
        self.set_preedit(history, &preedit)
    }

    /// Moves the cursor by `offset` rows.
    ///
    /// Moving past the end lands on the first row of the next page when there
    /// is one; moving before the start does nothing.
    pub fn move_by(&mut self, offset: isize) {
        let len = self.lookup.len();
        let Some(pos) = self.cursor.checked_add_signed(offset) else {
            return;
        };

        if pos < len {
            self.cursor = pos;
        } else {
            let next_page_start = (self.current_page() + 1) * self.page_size;
            if len > next_page_start {
                self.cursor = next_page_start;
            }
        }
    }

    pub fn current_page(&self) -> usize {
        self.cursor / self.page_size
    }

    pub fn page_count(&self) -> usize {
        self.lookup.len().div_ceil(self.page_size)
    }

    fn page_start(&self) -> usize {
        self.current_page() * self.page_size
    }

    fn page_len(&self) -> usize {
        self.page_size
            .min(self.lookup.len().saturating_sub(self.page_start()))
    }

    /// Rows, highlight and counters for the current page.
    pub fn page(&self) -> PickerPage {
        let start = self.page_start();
        let len = self.page_len();

        let rows = if len == 0 {
            vec![PickerRow {
                label: EMPTY_LABEL,
                display: EMPTY_HISTORY_TEXT.to_string(),
            }]
        } else {
            self.lookup.entries()[start..start + len]
                .iter()
                .zip(INDEX_LABELS)
                .map(|(entry, label)| PickerRow {
                    label,
                    display: entry.display.clone(),
                })
                .collect()
        };

        PickerPage {
            rows,
            highlighted: (len > 0).then(|| self.cursor % self.page_size),
            page: self.current_page(),
            page_count: self.page_count(),
            preedit: self.preedit.clone(),
            aux_count: self.aux_count(),
        }
    }

    /// Character count of the highlighted entry's text.
    pub fn aux_count(&self) -> usize {
        self.highlighted().map(ClipEntry::char_count).unwrap_or(0)
    }

    /// Commits the highlighted entry.
    pub fn commit_current(&self) -> PickerAction {
        match self.highlighted() {
            Some(entry) => PickerAction::Commit(entry.text.clone()),
            None => PickerAction::Dismiss,
        }
    }

    /// Commits the row labelled `label` on the current page.
    pub fn select_label(&self, label: char) -> PickerAction {
        let Some(row) = INDEX_LABELS.iter().position(|l| *l == label) else {
            return PickerAction::Dismiss;
        };
        if row >= self.page_len() {
            return PickerAction::Dismiss;
        }
        match self.lookup.get(self.page_start() + row) {
            Some(entry) => PickerAction::Commit(entry.text.clone()),
            None => PickerAction::Dismiss,
        }
    }

    /// Deletes the highlighted entry from the history and the lookup.
    pub fn delete_current(&mut self, history: &mut ClipHistory) -> Option<ClipEntry> {
        let removed = history.delete_at(&self.lookup, self.cursor)?;
        self.lookup.remove(self.cursor);

        let len = self.lookup.len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
        debug!(cursor = self.cursor, remaining = len, "Picker deleted entry");
        Some(removed)
    }

    /// Merges the highlighted entry with the entry after it in history order.
    pub fn merge_current(&mut self, history: &mut ClipHistory) -> Option<ClipEntry> {
        let merged = history.merge_at(&self.lookup, self.cursor)?;

        self.lookup.replace(self.cursor, merged.clone());
        self.lookup.retain(|e| history.position(&e.text).is_some());
        if let Some(pos) = self.lookup.iter().position(|e| e.text == merged.text) {
            self.cursor = pos;
        }
        debug!(cursor = self.cursor, "Picker merged entries");
        Some(merged)
    }

    /// Drops the whole history.
    pub fn clear_all(&mut self, history: &mut ClipHistory) {
        history.clear();
        self.lookup.clear();
        self.cursor = 0;
    }

    /// Applies one key press.
    ///
    /// # Examples
    ///
    /// ```
    /// use tw_core::clipboard::{ClipHistory, SearchKeyBuilder};
    /// use tw_core::picker::{ClipPicker, PickerAction, PickerKey};
    ///
    /// let mut history = ClipHistory::new(SearchKeyBuilder::ascii_only());
    /// history.record("first");
    /// history.record("second");
    ///
    /// let mut picker = ClipPicker::new(5);
    /// picker.open(&history);
    /// picker.handle_key(&mut history, PickerKey::Down);
    /// assert_eq!(
    ///     picker.handle_key(&mut history, PickerKey::Return),
    ///     PickerAction::Commit("first".into())
    /// );
    /// ```
    pub fn handle_key(&mut self, history: &mut ClipHistory, key: PickerKey) -> PickerAction {
        let page = self.page_size as isize;
        match key {
            PickerKey::Up => self.move_by(-1),
            PickerKey::Down => self.move_by(1),
            PickerKey::Left | PickerKey::PageUp => self.move_by(-page),
            PickerKey::Right | PickerKey::PageDown => self.move_by(page),
            PickerKey::Space | PickerKey::Return => return self.commit_current(),
            PickerKey::Delete => {
                self.delete_current(history);
            }
            PickerKey::ShiftDelete => self.clear_all(history),
            PickerKey::Backslash => {
                self.merge_current(history);
            }
            PickerKey::Backspace => {
                self.pop_char(history);
            }
            PickerKey::Char(c) if c.is_ascii_digit() => return self.select_label(c),
            PickerKey::Char(c) if ('!'..='~').contains(&c) => {
                self.push_char(history, c);
            }
            PickerKey::Char(_) | PickerKey::Other => return PickerAction::Dismiss,
        }
        PickerAction::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::SearchKeyBuilder;

    fn history_of(texts: &[&str]) -> ClipHistory {
        let mut h = ClipHistory::new(SearchKeyBuilder::ascii_only());
        for t in texts.iter().rev() {
            h.record(t);
        }
        h
    }

    fn numbered(n: usize) -> ClipHistory {
        let texts: Vec<String> = (0..n).map(|i| format!("entry{i}")).collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        history_of(&refs)
    }

    #[test]
    fn empty_history_shows_placeholder_row() {
        let h = history_of(&[]);
        let mut p = ClipPicker::new(5);
        p.open(&h);

        let page = p.page();
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.rows[0].label, EMPTY_LABEL);
        assert_eq!(page.highlighted, None);
        assert_eq!(page.page_count, 0);
    }

    #[test]
    fn page_shows_labels_and_displays() {
        let h = numbered(7);
        let mut p = ClipPicker::new(5);
        p.open(&h);

        let page = p.page();
        assert_eq!(page.rows.len(), 5);
        assert_eq!(page.rows[0].label, '1');
        assert_eq!(page.rows[4].label, '5');
        assert_eq!(page.rows[0].display, "entry0");
        assert_eq!(page.page_count, 2);
    }

    #[test]
    fn moving_past_end_jumps_to_next_page_start() {
        let h = numbered(7);
        let mut p = ClipPicker::new(5);
        p.open(&h);

        p.move_by(3);
        p.move_by(5); // 8 is past the end, next page starts at 5
        assert_eq!(p.cursor(), 5);

        p.move_by(5); // no page after the second one
        assert_eq!(p.cursor(), 5);
        assert_eq!(p.page().rows.len(), 2);
        assert_eq!(p.page().highlighted, Some(0));
    }

    #[test]
    fn moving_before_start_is_ignored() {
        let h = numbered(3);
        let mut p = ClipPicker::new(5);
        p.open(&h);
        p.move_by(-1);
        assert_eq!(p.cursor(), 0);
    }

    #[test]
    fn typing_filters_and_resets_cursor() {
        let mut h = history_of(&["world", "wide", "dog"]);
        let mut p = ClipPicker::new(5);
        p.open(&h);
        p.move_by(2);

        p.handle_key(&mut h, PickerKey::Char('w'));
        p.handle_key(&mut h, PickerKey::Char('d'));
        assert_eq!(p.preedit(), "wd");
        assert_eq!(p.lookup().texts(), vec!["world", "wide"]);
        assert_eq!(p.cursor(), 0);

        p.handle_key(&mut h, PickerKey::Backspace);
        p.handle_key(&mut h, PickerKey::Backspace);
        assert_eq!(p.preedit(), "");
        assert_eq!(p.lookup().len(), 3);
    }

    #[test]
    fn digit_selects_row_on_current_page() {
        let mut h = numbered(7);
        let mut p = ClipPicker::new(5);
        p.open(&h);
        p.move_by(5);

        assert_eq!(
            p.handle_key(&mut h, PickerKey::Char('2')),
            PickerAction::Commit("entry6".into())
        );
        assert_eq!(p.handle_key(&mut h, PickerKey::Char('3')), PickerAction::Dismiss);
    }

    #[test]
    fn delete_current_clamps_cursor() {
        let mut h = history_of(&["a", "b", "c"]);
        let mut p = ClipPicker::new(5);
        p.open(&h);
        p.move_by(2);

        let removed = p.delete_current(&mut h).map(|e| e.text);
        assert_eq!(removed.as_deref(), Some("c"));
        assert_eq!(p.cursor(), 1);
        assert_eq!(h.texts(), vec!["a", "b"]);
    }

    #[test]
    fn delete_on_empty_history_is_a_no_op() {
        let mut h = history_of(&[]);
        let mut p = ClipPicker::new(5);
        p.open(&h);
        assert_eq!(p.handle_key(&mut h, PickerKey::Delete), PickerAction::Continue);
        assert!(h.is_empty());
    }

    #[test]
    fn merge_in_filtered_view_uses_store_neighbor() {
        let mut h = history_of(&["apple", "zebra", "apricot"]);
        let mut p = ClipPicker::new(5);
        p.open(&h);
        p.set_preedit(&h, "ap");
        assert_eq!(p.lookup().texts(), vec!["apple", "apricot"]);

        let merged = p.merge_current(&mut h).map(|e| e.text);
        assert_eq!(merged.as_deref(), Some("apple zebra"));
        assert_eq!(h.texts(), vec!["apple zebra", "apricot"]);
        assert_eq!(p.lookup().texts(), vec!["apple zebra", "apricot"]);
        assert_eq!(p.cursor(), 0);
    }

    #[test]
    fn shift_delete_clears_everything() {
        let mut h = numbered(3);
        let mut p = ClipPicker::new(5);
        p.open(&h);
        p.handle_key(&mut h, PickerKey::ShiftDelete);
        assert!(h.is_empty());
        assert!(p.lookup().is_empty());
    }

    #[test]
    fn non_printable_key_dismisses() {
        let mut h = numbered(1);
        let mut p = ClipPicker::new(5);
        p.open(&h);
        assert_eq!(p.handle_key(&mut h, PickerKey::Other), PickerAction::Dismiss);
        assert_eq!(p.handle_key(&mut h, PickerKey::Char('é')), PickerAction::Dismiss);
    }

    #[test]
    fn aux_count_reports_highlighted_length() {
        let h = history_of(&["你好"]);
        let mut p = ClipPicker::new(5);
        p.open(&h);
        assert_eq!(p.page().aux_count, 2);
    }
}
