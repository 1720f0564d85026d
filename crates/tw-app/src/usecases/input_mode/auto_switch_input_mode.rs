use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use tw_core::input_mode::{
    activation_for, current_mode, AutoSwitch, InputModeRecord, SwitchDecision, SwitchOutcome,
    RUN_DIALOG_WINDOW,
};
use tw_core::ports::{InputModeStorePort, InputSourcePort, SettingsPort};
use tw_core::settings::AutoSwitchSettings;

/// Use case that restores each window's input mode when it gains focus.
/// 窗口获得焦点时恢复其输入模式的用例。
///
/// ## Behavior / 行为
/// - Does nothing while `auto_switch.enabled` is off
/// - Ignores the run dialog unless `auto_switch.enable_run_dialog` is on
/// - Reads the active source and its mode from the input source port
/// - Feeds the focus change to [`AutoSwitch`]
/// - Persists the memory whenever it changed
/// - Activates the engine property that brings back the remembered mode
///
/// ## Typical Flow
///
/// ```text
/// Shell focus change (wm_class)
///   → AutoSwitchInputMode::on_focus_changed
///   → InputSourcePort::activate_property
///   → InputModeStorePort::save
/// ```
pub struct AutoSwitchInputMode {
    source: Arc<dyn InputSourcePort>,
    store: Arc<dyn InputModeStorePort>,
    settings: Arc<dyn SettingsPort>,
    state: Mutex<AutoSwitch>,
}

impl AutoSwitchInputMode {
    /// Builds the use case with the memory currently held by `store`.
    pub async fn from_ports(
        source: Arc<dyn InputSourcePort>,
        store: Arc<dyn InputModeStorePort>,
        settings: Arc<dyn SettingsPort>,
    ) -> Result<Self> {
        let memory = store
            .load()
            .await
            .context("Failed to load input mode memory")?;
        info!(windows = memory.len(), "Loaded input mode memory");

        Ok(Self {
            source,
            store,
            settings,
            state: Mutex::new(AutoSwitch::new(memory)),
        })
    }

    /// Handles focus moving to a window of class `window_class`.
    #[tracing::instrument(name = "usecase.auto_switch_input_mode.on_focus_changed", skip(self))]
    pub async fn on_focus_changed(&self, window_class: Option<&str>) -> Result<SwitchDecision> {
        if !self.load_settings().await?.enabled {
            debug!("Auto switch disabled, keeping input mode");
            return Ok(SwitchDecision::Keep);
        }

        let current = self.current_record().await?;
        let outcome = self
            .state
            .lock()
            .await
            .on_focus_changed(&current, window_class);
        self.apply(outcome).await
    }

    /// Sets or clears a pseudo window (overview, run dialog).
    #[tracing::instrument(name = "usecase.auto_switch_input_mode.set_override", skip(self))]
    pub async fn set_override(
        &self,
        override_window: Option<&str>,
        focused_class: Option<&str>,
    ) -> Result<SwitchDecision> {
        let settings = self.load_settings().await?;
        if !settings.enabled {
            debug!("Auto switch disabled, keeping input mode");
            return Ok(SwitchDecision::Keep);
        }
        if override_window == Some(RUN_DIALOG_WINDOW) && !settings.enable_run_dialog {
            debug!("Run dialog tracking disabled, ignoring override");
            return Ok(SwitchDecision::Keep);
        }

        let current = self.current_record().await?;
        let outcome = self
            .state
            .lock()
            .await
            .set_override(override_window, &current, focused_class);
        self.apply(outcome).await
    }

    async fn load_settings(&self) -> Result<AutoSwitchSettings> {
        Ok(self
            .settings
            .load()
            .await
            .context("Failed to load settings")?
            .auto_switch)
    }

    async fn current_record(&self) -> Result<InputModeRecord> {
        let source_id = self.source.current_source_id().await?;
        let props = self.source.properties().await?;
        Ok(InputModeRecord::new(source_id, current_mode(&props)))
    }

    async fn apply(&self, outcome: SwitchOutcome) -> Result<SwitchDecision> {
        if outcome.memory_changed {
            let memory = self.state.lock().await.memory().clone();
            self.store
                .save(&memory)
                .await
                .context("Failed to save input mode memory")?;
        }

        if let SwitchDecision::Restore(mode) = &outcome.decision {
            let props = self.source.properties().await?;
            match activation_for(&props, mode) {
                Some(activation) => {
                    debug!(key = %activation.key, state = activation.state, "Activating property");
                    self.source.activate_property(&activation).await?;
                }
                None => warn!(mode = %mode, "No input mode property to restore"),
            }
        }

        Ok(outcome.decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;
    use tw_core::input_mode::{
        InputModeMemory, InputProperty, PropertyActivation, PropertyKind, OVERVIEW_WINDOW,
    };
    use tw_core::settings::Settings;

    /// Engine with a single `Normal` InputMode property toggling 中/英.
    struct FakeSource {
        source_id: String,
        mode: StdMutex<String>,
        activations: StdMutex<Vec<PropertyActivation>>,
    }

    impl FakeSource {
        fn new(mode: &str) -> Self {
            Self {
                source_id: "libpinyin".into(),
                mode: StdMutex::new(mode.into()),
                activations: StdMutex::new(Vec::new()),
            }
        }

        fn set_mode(&self, mode: &str) {
            *self.mode.lock().unwrap() = mode.into();
        }
    }

    #[async_trait]
    impl InputSourcePort for FakeSource {
        async fn current_source_id(&self) -> anyhow::Result<String> {
            Ok(self.source_id.clone())
        }

        async fn properties(&self) -> anyhow::Result<Vec<InputProperty>> {
            Ok(vec![InputProperty::new(
                "InputMode",
                PropertyKind::Normal {
                    symbol: Some(self.mode.lock().unwrap().clone()),
                    label: String::new(),
                },
            )])
        }

        async fn activate_property(&self, activation: &PropertyActivation) -> anyhow::Result<()> {
            self.activations.lock().unwrap().push(activation.clone());
            let next = if *self.mode.lock().unwrap() == "中" { "英" } else { "中" };
            self.set_mode(next);
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        saved: StdMutex<Option<InputModeMemory>>,
    }

    #[async_trait]
    impl InputModeStorePort for MemoryStore {
        async fn load(&self) -> anyhow::Result<InputModeMemory> {
            Ok(self.saved.lock().unwrap().clone().unwrap_or_default())
        }

        async fn save(&self, memory: &InputModeMemory) -> anyhow::Result<()> {
            *self.saved.lock().unwrap() = Some(memory.clone());
            Ok(())
        }
    }

    struct FixedSettings(Settings);

    #[async_trait]
    impl SettingsPort for FixedSettings {
        async fn load(&self) -> anyhow::Result<Settings> {
            Ok(self.0.clone())
        }

        async fn save(&self, _settings: &Settings) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn settings(enabled: bool, enable_run_dialog: bool) -> Arc<FixedSettings> {
        let mut s = Settings::default();
        s.auto_switch.enabled = enabled;
        s.auto_switch.enable_run_dialog = enable_run_dialog;
        Arc::new(FixedSettings(s))
    }

    #[tokio::test]
    async fn restores_mode_when_window_regains_focus() {
        let source = Arc::new(FakeSource::new("中"));
        let store = Arc::new(MemoryStore::default());
        let uc = AutoSwitchInputMode::from_ports(source.clone(), store.clone(), settings(true, false))
            .await
            .unwrap();

        // terminal starts in Chinese mode, user switches to English there
        uc.on_focus_changed(Some("Gnome-terminal")).await.unwrap();
        source.set_mode("英");

        // browser is new: seeded with English
        let decision = uc.on_focus_changed(Some("Firefox")).await.unwrap();
        assert_eq!(decision, SwitchDecision::Keep);

        // user switches browser to Chinese, then goes back to the terminal
        source.set_mode("中");
        let decision = uc.on_focus_changed(Some("Gnome-terminal")).await.unwrap();

        assert_eq!(decision, SwitchDecision::Restore("英".into()));
        assert_eq!(source.activations.lock().unwrap().len(), 1);
        assert_eq!(*source.mode.lock().unwrap(), "英");

        let saved = store.saved.lock().unwrap().clone().unwrap();
        assert_eq!(saved.get("firefox").map(|r| r.mode.as_str()), Some("中"));
    }

    #[tokio::test]
    async fn unchanged_memory_is_not_saved() {
        let source = Arc::new(FakeSource::new("中"));
        let store = Arc::new(MemoryStore::default());
        let uc = AutoSwitchInputMode::from_ports(source, store.clone(), settings(true, false))
            .await
            .unwrap();

        uc.on_focus_changed(None).await.unwrap();

        assert!(store.saved.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn disabled_auto_switch_neither_saves_nor_activates() {
        let source = Arc::new(FakeSource::new("中"));
        let store = Arc::new(MemoryStore::default());
        let uc = AutoSwitchInputMode::from_ports(source.clone(), store.clone(), settings(false, true))
            .await
            .unwrap();

        uc.on_focus_changed(Some("Gnome-terminal")).await.unwrap();
        source.set_mode("英");
        uc.on_focus_changed(Some("Firefox")).await.unwrap();
        source.set_mode("中");
        let decision = uc.on_focus_changed(Some("Gnome-terminal")).await.unwrap();
        let overview = uc
            .set_override(Some(OVERVIEW_WINDOW), Some("Gnome-terminal"))
            .await
            .unwrap();

        assert_eq!(decision, SwitchDecision::Keep);
        assert_eq!(overview, SwitchDecision::Keep);
        assert!(store.saved.lock().unwrap().is_none());
        assert!(source.activations.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn run_dialog_is_ignored_unless_enabled() {
        let source = Arc::new(FakeSource::new("中"));
        let store = Arc::new(MemoryStore::default());
        let uc = AutoSwitchInputMode::from_ports(source, store.clone(), settings(true, false))
            .await
            .unwrap();

        uc.on_focus_changed(Some("Firefox")).await.unwrap();
        uc.set_override(Some(RUN_DIALOG_WINDOW), Some("Firefox"))
            .await
            .unwrap();

        let saved = store.saved.lock().unwrap().clone().unwrap();
        assert!(saved.get(RUN_DIALOG_WINDOW).is_none());
    }

    #[tokio::test]
    async fn run_dialog_gets_its_own_mode_when_enabled() {
        let source = Arc::new(FakeSource::new("中"));
        let store = Arc::new(MemoryStore::default());
        let uc = AutoSwitchInputMode::from_ports(source, store.clone(), settings(true, true))
            .await
            .unwrap();

        uc.on_focus_changed(Some("Firefox")).await.unwrap();
        uc.set_override(Some(RUN_DIALOG_WINDOW), Some("Firefox"))
            .await
            .unwrap();

        let saved = store.saved.lock().unwrap().clone().unwrap();
        assert_eq!(
            saved.get(RUN_DIALOG_WINDOW).map(|r| r.mode.as_str()),
            Some("中")
        );
    }
}
