use async_trait::async_trait;

use crate::settings::model::Settings;

/// Persists user settings.
///
/// `load` on a store that was never written returns `Settings::default()`.
#[async_trait]
pub trait SettingsPort: Send + Sync {
    async fn load(&self) -> anyhow::Result<Settings>;
    async fn save(&self, settings: &Settings) -> anyhow::Result<()>;
}

/// One step of the settings schema migration chain.
pub trait SettingsMigrationPort: Send + Sync {
    fn from_version(&self) -> u32;
    fn to_version(&self) -> u32;
    fn migrate(&self, settings: Settings) -> Settings;
}
