//! Business logic use cases
//! 业务用例
//!
//! [Shell clipboard watcher]
//         ↓
// CaptureClipboardText → SharedClipHistory
//         ↓
// ClipPickerSession (keys) → CommitClipText → TextCommitPort
//
// [Focus tracker] → AutoSwitchInputMode → InputSourcePort / InputModeStorePort

pub mod clipboard;
pub mod input_mode;
pub mod settings;

pub use clipboard::{CaptureClipboardText, ClipPickerSession, CommitClipText, SearchClipHistory};
pub use input_mode::{AutoSwitchInputMode, SettingsInputModeStore};
pub use settings::{ApplyClipHistorySettings, GetSettings, UpdateSettings};
