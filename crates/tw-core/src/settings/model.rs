use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input_mode::InputModeRecord;

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

pub const MIN_PAGE_SIZE: u32 = 4;
pub const MAX_PAGE_SIZE: u32 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{field} = {value} is out of range ({min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipHistorySettings {
    pub enabled: bool,
    /// Rows per candidate page
    pub page_size: u32,
    pub capacity: usize,
    pub hide_page_buttons: bool,
    /// Delay before committing a picked entry, lets the picker close first
    pub commit_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoSwitchSettings {
    pub enabled: bool,
    /// Treat the run dialog as its own window
    pub enable_run_dialog: bool,
    pub input_modes: BTreeMap<String, InputModeRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub clip_history: ClipHistorySettings,

    #[serde(default)]
    pub auto_switch: AutoSwitchSettings,
}

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

impl Settings {
    /// Checks value ranges the UI would otherwise enforce.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let page_size = self.clip_history.page_size;
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(SettingsError::OutOfRange {
                field: "clip_history.page_size",
                value: page_size.into(),
                min: MIN_PAGE_SIZE.into(),
                max: MAX_PAGE_SIZE.into(),
            });
        }

        if self.clip_history.capacity == 0 {
            return Err(SettingsError::OutOfRange {
                field: "clip_history.capacity",
                value: 0,
                min: 1,
                max: u64::MAX,
            });
        }

        Ok(())
    }
}
