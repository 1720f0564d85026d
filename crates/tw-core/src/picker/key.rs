/// Keys the picker reacts to, already decoded from the host's key symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKey {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Space,
    Return,
    Delete,
    /// Shift+Delete: drop the whole history
    ShiftDelete,
    /// Merge the highlighted entry with the next one
    Backslash,
    Backspace,
    Char(char),
    /// Anything else closes the picker
    Other,
}

/// What the host should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerAction {
    /// Keep the picker open and redraw
    Continue,
    /// Close the picker and type this text into the focused client
    Commit(String),
    /// Close the picker without committing
    Dismiss,
}
