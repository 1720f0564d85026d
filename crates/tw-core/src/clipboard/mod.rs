//! Clipboard history domain.
//!
//! - `entry`      : `ClipEntry` and its display rendering
//! - `history`    : the bounded, deduplicated `ClipHistory` and its `ClipView`
//! - `search_key` : lowercase/pinyin search keys for the fuzzy matcher

mod entry;
mod history;
mod search_key;

pub use entry::{ellipsize, render_display, visibilize, ClipEntry, DISPLAY_HALF_WIDTH};
pub use history::{ClipHistory, ClipView, RecordOutcome, DEFAULT_CAPACITY};
pub use search_key::SearchKeyBuilder;

/// Which selection a clipboard change came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardKind {
    /// Explicit copy (Ctrl+C)
    Clipboard,
    /// X11/Wayland primary selection
    Primary,
}
