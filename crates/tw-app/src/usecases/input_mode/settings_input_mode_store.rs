use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tw_core::input_mode::InputModeMemory;
use tw_core::ports::{InputModeStorePort, SettingsPort};

/// Keeps the per-window input mode memory inside the user settings.
///
/// Saving rewrites only `auto_switch.input_modes`; every other setting is
/// reloaded and written back unchanged.
pub struct SettingsInputModeStore {
    settings: Arc<dyn SettingsPort>,
}

impl SettingsInputModeStore {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl InputModeStorePort for SettingsInputModeStore {
    async fn load(&self) -> Result<InputModeMemory> {
        let settings = self.settings.load().await?;
        Ok(InputModeMemory::from_map(settings.auto_switch.input_modes))
    }

    async fn save(&self, memory: &InputModeMemory) -> Result<()> {
        let mut settings = self.settings.load().await?;
        settings.auto_switch.input_modes = memory.as_map().clone();
        self.settings.save(&settings).await
    }
}
