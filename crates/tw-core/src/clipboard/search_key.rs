use std::sync::Arc;

use tracing::warn;

use crate::clipboard::entry::{render_display, ClipEntry};
use crate::ports::transliterator::{NoTransliterator, Transliterator, PLACEHOLDER};

/// Builds the fuzzy search key of a clipboard text.
/// 为剪贴板文本构建模糊搜索键。
///
/// The text is lowercased and split into maximal ASCII and non-ASCII runs:
/// - ASCII runs keep only their letters.
/// - Non-ASCII runs are replaced by the transliterator's initials.
///
/// Runs are concatenated in their original order, so typing `nihao` or `nh`
/// finds `你好`.
#[derive(Clone)]
pub struct SearchKeyBuilder {
    transliterator: Arc<dyn Transliterator>,
}

impl SearchKeyBuilder {
    pub fn new(transliterator: Arc<dyn Transliterator>) -> Self {
        Self { transliterator }
    }

    /// Builder that keeps ASCII letters and turns every other glyph into a placeholder.
    pub fn ascii_only() -> Self {
        Self::new(Arc::new(NoTransliterator))
    }

    /// Builds a complete entry (display and search key) for `text`.
    pub fn build_entry(&self, text: &str) -> ClipEntry {
        ClipEntry::from_parts(text, render_display(text), self.build_key(text))
    }

    /// Computes the search key for `text`.
    ///
    /// Never fails: an unresolvable glyph becomes [`PLACEHOLDER`] and the rest of
    /// the key is still built.
    ///
    /// # Examples
    ///
    /// ```
    /// use tw_core::clipboard::SearchKeyBuilder;
    ///
    /// let builder = SearchKeyBuilder::ascii_only();
    /// assert_eq!(builder.build_key("Hello, World 42!"), "helloworld");
    /// ```
    pub fn build_key(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let mut key = String::with_capacity(lowered.len());

        for (is_ascii, run) in runs(&lowered) {
            if is_ascii {
                key.extend(run.chars().filter(|c| c.is_ascii_alphabetic()));
            } else {
                key.push_str(&self.initials_of(run));
            }
        }

        key
    }

    fn initials_of(&self, run: &str) -> String {
        let glyphs = run.chars().count();
        match self.transliterator.transliterate(run) {
            Ok(raw) => {
                let initials: String = raw
                    .chars()
                    .map(|c| c.to_ascii_lowercase())
                    .filter(|c| c.is_ascii_lowercase() || *c == PLACEHOLDER)
                    .collect();
                if initials.is_empty() {
                    placeholders(glyphs)
                } else {
                    initials
                }
            }
            Err(err) => {
                warn!(error = %err, glyphs, "Transliteration failed, using placeholders");
                placeholders(glyphs)
            }
        }
    }
}

impl Default for SearchKeyBuilder {
    fn default() -> Self {
        Self::ascii_only()
    }
}

impl std::fmt::Debug for SearchKeyBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchKeyBuilder").finish_non_exhaustive()
    }
}

fn placeholders(count: usize) -> String {
    std::iter::repeat(PLACEHOLDER).take(count).collect()
}

/// Splits `text` into maximal runs of ASCII and non-ASCII characters.
fn runs(text: &str) -> Vec<(bool, &str)> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (idx, c) in text.char_indices() {
        let ascii = c.is_ascii();
        match current {
            Some(kind) if kind == ascii => {}
            Some(kind) => {
                out.push((kind, &text[start..idx]));
                start = idx;
                current = Some(ascii);
            }
            None => current = Some(ascii),
        }
    }

    if let Some(kind) = current {
        out.push((kind, &text[start..]));
    }
    out
}
