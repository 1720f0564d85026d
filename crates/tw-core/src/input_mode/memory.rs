use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Input source and mode last used in a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputModeRecord {
    /// Input source id, e.g. `ibus:libpinyin`
    pub source_id: String,

    /// Engine-specific mode, e.g. `中` or `true`
    pub mode: String,
}

impl InputModeRecord {
    pub fn new(source_id: impl Into<String>, mode: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            mode: mode.into(),
        }
    }
}

/// Per-window input mode memory, keyed by lowercase window class.
///
/// Plain data: loading and saving go through
/// [`crate::ports::InputModeStorePort`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputModeMemory {
    modes: BTreeMap<String, InputModeRecord>,
}

impl InputModeMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(modes: BTreeMap<String, InputModeRecord>) -> Self {
        Self { modes }
    }

    pub fn get(&self, window: &str) -> Option<&InputModeRecord> {
        self.modes.get(window)
    }

    /// Stores `record` for `window`; returns `true` if the memory changed.
    pub fn remember(&mut self, window: &str, record: InputModeRecord) -> bool {
        if self.modes.get(window) == Some(&record) {
            return false;
        }
        self.modes.insert(window.to_string(), record);
        true
    }

    pub fn forget(&mut self, window: &str) -> Option<InputModeRecord> {
        self.modes.remove(window)
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    pub fn as_map(&self) -> &BTreeMap<String, InputModeRecord> {
        &self.modes
    }

    pub fn into_map(self) -> BTreeMap<String, InputModeRecord> {
        self.modes
    }
}
