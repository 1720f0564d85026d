use serde::{Deserialize, Serialize};

/// Number of characters kept on each side when a long text is ellipsized.
pub const DISPLAY_HALF_WIDTH: usize = 20;

const ELLIPSIS: char = '\u{2026}';
const NEWLINE_GLYPH: char = '\u{21b5}';
const TAB_GLYPH: char = '\u{21e5}';

/// One clipboard history entry.
/// 剪贴板历史条目。
///
/// `text` is the identity key: a history never holds two entries with the same text.
/// `display` and `search_key` are derived once when the entry is built and are only
/// rewritten by a merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipEntry {
    /// Raw clipboard content
    pub text: String,

    /// Single-line rendering for the candidate list
    pub display: String,

    /// Lowercase ASCII projection used by the fuzzy matcher
    pub search_key: String,
}

impl ClipEntry {
    /// Assembles an entry from already computed parts.
    ///
    /// Most callers want [`crate::clipboard::SearchKeyBuilder::build_entry`], which
    /// derives `display` and `search_key` from the text.
    pub fn from_parts(
        text: impl Into<String>,
        display: impl Into<String>,
        search_key: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            display: display.into(),
            search_key: search_key.into(),
        }
    }

    /// Combines `self` with the entry that follows it in the history.
    ///
    /// Texts and displays are joined with a single space, search keys are
    /// concatenated directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use tw_core::clipboard::ClipEntry;
    ///
    /// let a = ClipEntry::from_parts("foo", "foo", "foo");
    /// let b = ClipEntry::from_parts("bar", "bar", "bar");
    /// let merged = a.merged_with(&b);
    /// assert_eq!(merged.display, "foo bar");
    /// assert_eq!(merged.search_key, "foobar");
    /// ```
    pub fn merged_with(&self, next: &ClipEntry) -> ClipEntry {
        ClipEntry {
            text: format!("{} {}", self.text, next.text),
            display: format!("{} {}", self.display, next.display),
            search_key: format!("{}{}", self.search_key, next.search_key),
        }
    }

    /// Character count of the raw text, shown next to the preedit.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Renders raw clipboard text for a single candidate row.
///
/// Text longer than `2 * DISPLAY_HALF_WIDTH` characters keeps its head and tail
/// around an ellipsis; line breaks and tabs are then replaced with visible glyphs.
///
/// # Examples
///
/// ```
/// use tw_core::clipboard::render_display;
///
/// assert_eq!(render_display("a\tb\nc"), "a\u{21e5}b\u{21b5}c");
/// ```
pub fn render_display(text: &str) -> String {
    visibilize(&ellipsize(text, DISPLAY_HALF_WIDTH))
}

/// Keeps `half` characters on each side of an ellipsis when `text` is longer
/// than `2 * half` characters.
pub fn ellipsize(text: &str, half: usize) -> String {
    let count = text.chars().count();
    if count <= 2 * half {
        return text.to_string();
    }

    let head: String = text.chars().take(half).collect();
    let tail: String = text.chars().skip(count - half).collect();
    format!("{head}{ELLIPSIS}{tail}")
}

/// Replaces `\n` and `\r` with `↵` and `\t` with `⇥`.
pub fn visibilize(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\n' | '\r' => NEWLINE_GLYPH,
            '\t' => TAB_GLYPH,
            other => other,
        })
        .collect()
}
