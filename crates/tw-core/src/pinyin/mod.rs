//! Pinyin initials used to search CJK clipboard text with Latin letters.

mod builtin;
mod initials;

pub use initials::{InitialsTable, InitialsTableError};
