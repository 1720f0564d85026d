use std::collections::BTreeMap;

use super::model::*;
use crate::clipboard::DEFAULT_CAPACITY;

impl Default for ClipHistorySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            page_size: 5,
            capacity: DEFAULT_CAPACITY,
            hide_page_buttons: false,
            commit_delay_ms: 30,
        }
    }
}

impl Default for AutoSwitchSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            enable_run_dialog: false,
            input_modes: BTreeMap::new(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            clip_history: ClipHistorySettings::default(),
            auto_switch: AutoSwitchSettings::default(),
        }
    }
}
