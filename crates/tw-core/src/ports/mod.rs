//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure or platform implementations. The domain never talks
//! to IBus, the shell clipboard or the filesystem directly.

mod clipboard_change_handler;
pub mod input_mode;
pub mod settings;
mod text_commit;
pub mod transliterator;

pub use clipboard_change_handler::ClipboardChangeHandler;
pub use input_mode::{InputModeStorePort, InputSourcePort};
pub use settings::{SettingsMigrationPort, SettingsPort};
pub use text_commit::TextCommitPort;
pub use transliterator::{NoTransliterator, TransliterationError, Transliterator, PLACEHOLDER};
