mod capture_clipboard_text;
mod commit_clip_text;
mod picker_session;
mod search_clip_history;

pub use capture_clipboard_text::CaptureClipboardText;
pub use commit_clip_text::CommitClipText;
pub use picker_session::ClipPickerSession;
pub use search_clip_history::SearchClipHistory;
