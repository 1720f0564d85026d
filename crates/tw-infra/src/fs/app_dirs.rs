use anyhow::{Context, Result};
use std::path::PathBuf;
use tw_core::config::AppConfig;

const APP_DIR_NAME: &str = "ibus-tweaker";

/// Get the IBus Tweaker configuration directory.
///
/// 获取 IBus Tweaker 配置目录。
///
/// # Platform-specific Paths / 平台特定路径
/// - Linux: $XDG_CONFIG_HOME/ibus-tweaker or ~/.config/ibus-tweaker
/// - macOS: ~/Library/Application Support/ibus-tweaker
///
/// # Behavior / 行为
/// - This function does not create the directory.
/// - 此函数不自动创建目录。
pub fn app_config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Failed to get platform config directory")?;
    Ok(base.join(APP_DIR_NAME))
}

/// Get the directory for logs and other state.
///
/// Falls back to the data directory on platforms without a state directory.
pub fn app_state_dir() -> Result<PathBuf> {
    let base = dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .context("Failed to get platform state directory")?;
    Ok(base.join(APP_DIR_NAME))
}

/// `AppConfig` with every path under the platform directories.
pub fn system_default_config() -> Result<AppConfig> {
    Ok(AppConfig::with_system_defaults(
        app_config_dir()?,
        app_state_dir()?,
    ))
}
