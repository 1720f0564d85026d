//! Clipboard change handler port
//!
//! Callback interface for clipboard change notifications from the shell:
//! - Platform layer (low-level) depends on this abstraction
//! - App layer (high-level) implements it

use anyhow::Result;

use crate::clipboard::ClipboardKind;

/// Callback handler for clipboard change events.
///
/// The platform layer has already read the new text when it calls this.
#[async_trait::async_trait]
pub trait ClipboardChangeHandler: Send + Sync {
    /// Called when the content of `kind` changes to `text`.
    async fn on_clipboard_changed(&self, kind: ClipboardKind, text: String) -> Result<()>;
}
