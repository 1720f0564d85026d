//! Ports around the active input source and the saved per-window modes.

use async_trait::async_trait;

use crate::input_mode::{InputModeMemory, InputProperty, PropertyActivation};

/// Loads and saves the per-window input mode memory.
#[async_trait]
pub trait InputModeStorePort: Send + Sync {
    async fn load(&self) -> anyhow::Result<InputModeMemory>;
    async fn save(&self, memory: &InputModeMemory) -> anyhow::Result<()>;
}

/// The input method framework as seen by the auto-switcher.
///
/// 输入法框架接口（当前输入源及其属性）
#[async_trait]
pub trait InputSourcePort: Send + Sync {
    /// Id of the active input source, e.g. `"rime"` or `"xkb:us::eng"`.
    async fn current_source_id(&self) -> anyhow::Result<String>;

    /// Properties registered by the active engine.
    async fn properties(&self) -> anyhow::Result<Vec<InputProperty>>;

    /// Activates one property, same as clicking it in the panel.
    async fn activate_property(&self, activation: &PropertyActivation) -> anyhow::Result<()>;
}
