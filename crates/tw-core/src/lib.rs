//! # tw-core
//!
//! Core domain models and business logic for IBus Tweaker.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the clipboard history and its search keys, the fuzzy matcher, the candidate
//! picker, the per-window input mode memory and the user settings model.

// Public module exports
pub mod clipboard;
pub mod config;
pub mod fuzzy;
pub mod input_mode;
pub mod picker;
pub mod pinyin;
pub mod ports;
pub mod settings;

// Re-export commonly used types at the crate root
pub use clipboard::{ClipEntry, ClipHistory, ClipView, ClipboardKind, SearchKeyBuilder};
pub use config::AppConfig;
pub use fuzzy::fuzzy_match;
pub use pinyin::InitialsTable;
pub use settings::Settings;
