//! Paged candidate-list session over the clipboard history.

mod key;
mod session;

pub use key::{PickerAction, PickerKey};
pub use session::{
    ClipPicker, PickerPage, PickerRow, EMPTY_HISTORY_TEXT, EMPTY_LABEL, INDEX_LABELS,
};
