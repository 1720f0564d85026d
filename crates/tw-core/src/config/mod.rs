//! # Pure Data Module / 纯数据模块
//!
//! Application configuration DTOs mapped from `config.toml`.
//!
//! This module holds data only: no validation and no default value
//! calculation. Empty paths are valid facts; the caller decides what to do
//! with them.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// User settings file (JSON)
    pub settings_path: PathBuf,

    /// Initials table file, charmap or TSV; empty means "use the built-in table"
    pub initials_table_path: PathBuf,

    /// Directory for rolling log files
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// Missing keys become empty paths.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            settings_path: path_at(toml_value, "storage", "settings_path"),
            initials_table_path: path_at(toml_value, "pinyin", "initials_table_path"),
            log_dir: path_at(toml_value, "logging", "log_dir"),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self {
            settings_path: PathBuf::new(),
            initials_table_path: PathBuf::new(),
            log_dir: PathBuf::new(),
        }
    }

    /// Create AppConfig with paths under the given base directories.
    ///
    /// The directories are computed by the caller (e.g. with the `dirs` crate).
    /// No initials table is configured by default.
    pub fn with_system_defaults(config_dir: PathBuf, state_dir: PathBuf) -> Self {
        Self {
            settings_path: config_dir.join("settings.json"),
            initials_table_path: PathBuf::new(),
            log_dir: state_dir.join("logs"),
        }
    }

    /// Keeps `self`'s non-empty paths and fills the empty ones from `fallback`.
    pub fn or(self, fallback: AppConfig) -> Self {
        fn pick(primary: PathBuf, fallback: PathBuf) -> PathBuf {
            if primary.as_os_str().is_empty() {
                fallback
            } else {
                primary
            }
        }

        Self {
            settings_path: pick(self.settings_path, fallback.settings_path),
            initials_table_path: pick(self.initials_table_path, fallback.initials_table_path),
            log_dir: pick(self.log_dir, fallback.log_dir),
        }
    }
}

fn path_at(value: &toml::Value, section: &str, key: &str) -> PathBuf {
    PathBuf::from(
        value
            .get(section)
            .and_then(|s| s.get(key))
            .and_then(|v| v.as_str())
            .unwrap_or(""),
    )
}
