use anyhow::{anyhow, Result};
use tracing::info;
use tw_core::ports::SettingsMigrationPort;
use tw_core::settings::{Settings, CURRENT_SCHEMA_VERSION};

/// Upgrades a settings document step by step to the current schema.
pub struct SettingsMigrator {
    migrations: Vec<Box<dyn SettingsMigrationPort>>,
}

impl Default for SettingsMigrator {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsMigrator {
    pub fn new() -> Self {
        Self::with_migrations(vec![Box::new(MigrationV0ToV1)])
    }

    pub fn with_migrations(migrations: Vec<Box<dyn SettingsMigrationPort>>) -> Self {
        Self { migrations }
    }

    /// Applies migrations until the schema version is current.
    ///
    /// Settings written by a newer version are returned untouched.
    pub fn migrate_to_latest(&self, mut settings: Settings) -> Result<Settings> {
        while settings.schema_version < CURRENT_SCHEMA_VERSION {
            let current = settings.schema_version;
            let migration = self
                .migrations
                .iter()
                .find(|m| m.from_version() == current)
                .ok_or_else(|| anyhow!("no settings migration from version {current}"))?;

            settings = migration.migrate(settings);
            settings.schema_version = migration.to_version();
            info!(from = current, to = settings.schema_version, "Migrated settings");
        }

        Ok(settings)
    }
}

/// Files written before versioning carry `schema_version: 0`; the fields are unchanged.
struct MigrationV0ToV1;

impl SettingsMigrationPort for MigrationV0ToV1 {
    fn from_version(&self) -> u32 {
        0
    }

    fn to_version(&self) -> u32 {
        1
    }

    fn migrate(&self, settings: Settings) -> Settings {
        settings
    }
}
