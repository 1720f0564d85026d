pub mod defaults;
pub mod model;
pub mod version;

pub use model::{
    AutoSwitchSettings, ClipHistorySettings, Settings, SettingsError, CURRENT_SCHEMA_VERSION,
    MAX_PAGE_SIZE, MIN_PAGE_SIZE,
};
pub use version::SettingsVersion;
