//! Use case for getting user settings
//! 获取用户设置的用例

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span, Instrument};
use tw_core::ports::SettingsPort;
use tw_core::settings::Settings;

/// Use case for retrieving user settings.
///
/// ## Behavior / 行为
/// - Loads settings from the settings port
/// - Returns the complete settings structure
pub struct GetSettings {
    settings: Arc<dyn SettingsPort>,
}

impl GetSettings {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    /// # Returns / 返回值
    /// - `Ok(Settings)` - The current user settings
    /// - `Err(e)` if loading settings fails
    pub async fn execute(&self) -> Result<Settings> {
        let span = info_span!("usecase.get_settings.execute");

        async {
            let result = self.settings.load().await?;
            info!(schema_version = result.schema_version, "Settings retrieved");
            Ok(result)
        }
        .instrument(span)
        .await
    }
}
