//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - Read the TOML configuration file / 读取 TOML 配置文件
//! - Parse TOML into the AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - Fill unset paths with the platform defaults / 用平台默认路径补全未设置的路径
//!
//! No validation happens here: whatever the file says is accepted as a fact.

use anyhow::Context;
use std::path::{Path, PathBuf};
use tw_core::config::AppConfig;
use tw_infra::fs::{app_config_dir, system_default_config};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Effective configuration for this run.
///
/// An explicit `config_path` must exist. Otherwise `config.toml` in the
/// platform config directory is used when present. Paths left empty fall back
/// to the platform defaults.
pub fn resolve_config(config_path: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    let defaults = system_default_config()?;

    let file_config = match config_path {
        Some(path) => load_config(&path)?,
        None => {
            let path = app_config_dir()?.join(CONFIG_FILE_NAME);
            if path.exists() {
                load_config(&path)?
            } else {
                AppConfig::empty()
            }
        }
    };

    Ok(file_config.or(defaults))
}
