//! Use case for updating user settings
//! 更新用户设置的用例

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span, Instrument};
use tw_core::ports::SettingsPort;
use tw_core::settings::{AutoSwitchSettings, ClipHistorySettings, Settings, CURRENT_SCHEMA_VERSION};

/// Use case for updating user settings.
///
/// ## Behavior / 行为
/// - Rejects a foreign schema version and out-of-range values
/// - Logs changed fields with old/new values
/// - Persists settings through the settings port
pub struct UpdateSettings {
    settings: Arc<dyn SettingsPort>,
}

impl UpdateSettings {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    /// # Returns / 返回值
    /// - `Ok(())` if settings are saved successfully
    /// - `Err(e)` if validation or save fails
    pub async fn execute(&self, settings: Settings) -> Result<()> {
        let span = info_span!("usecase.update_settings.execute");

        async {
            if settings.schema_version != CURRENT_SCHEMA_VERSION {
                anyhow::bail!(
                    "Invalid schema version: expected {}, got {}",
                    CURRENT_SCHEMA_VERSION,
                    settings.schema_version
                );
            }
            settings.validate().context("Invalid settings")?;

            let old_settings = self.settings.load().await?;
            let changes = settings_diff(&old_settings, &settings);

            self.settings.save(&settings).await?;

            if changes.is_empty() {
                info!("Settings saved (no changes detected)");
            } else {
                info!(changed_fields = %changes.join(", "), "Settings updated");
            }
            Ok(())
        }
        .instrument(span)
        .await
    }
}

fn settings_diff(old: &Settings, new: &Settings) -> Vec<String> {
    let mut parts = Vec::new();
    clip_history_diff(&old.clip_history, &new.clip_history, &mut parts);
    auto_switch_diff(&old.auto_switch, &new.auto_switch, &mut parts);
    parts
}

fn push_change<T: std::fmt::Debug + PartialEq>(
    parts: &mut Vec<String>,
    field: &str,
    old: &T,
    new: &T,
) {
    if old != new {
        parts.push(format!("{field}: {old:?} → {new:?}"));
    }
}

fn clip_history_diff(old: &ClipHistorySettings, new: &ClipHistorySettings, parts: &mut Vec<String>) {
    push_change(parts, "clip_history.enabled", &old.enabled, &new.enabled);
    push_change(parts, "clip_history.page_size", &old.page_size, &new.page_size);
    push_change(parts, "clip_history.capacity", &old.capacity, &new.capacity);
    push_change(
        parts,
        "clip_history.hide_page_buttons",
        &old.hide_page_buttons,
        &new.hide_page_buttons,
    );
    push_change(
        parts,
        "clip_history.commit_delay_ms",
        &old.commit_delay_ms,
        &new.commit_delay_ms,
    );
}

fn auto_switch_diff(old: &AutoSwitchSettings, new: &AutoSwitchSettings, parts: &mut Vec<String>) {
    push_change(parts, "auto_switch.enabled", &old.enabled, &new.enabled);
    push_change(
        parts,
        "auto_switch.enable_run_dialog",
        &old.enable_run_dialog,
        &new.enable_run_dialog,
    );
    // the memory itself is noisy; only its size is worth a log line
    push_change(
        parts,
        "auto_switch.input_modes.len",
        &old.input_modes.len(),
        &new.input_modes.len(),
    );
}
