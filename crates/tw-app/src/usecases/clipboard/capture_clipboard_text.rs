use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, info};
use tw_core::clipboard::{ClipboardKind, RecordOutcome};
use tw_core::ports::{ClipboardChangeHandler, SettingsPort};

use crate::clip_store::SharedClipHistory;

/// Use case that reacts to a clipboard change reported by the shell.
///
/// ## Responsibility
///
/// - Records explicit copies (`ClipboardKind::Clipboard`) into the history
/// - Ignores the primary selection, which changes on every mouse selection
/// - Does nothing while the clipboard history is disabled in settings
///
/// ## Typical Flow
///
/// ```text
/// Shell clipboard "owner-changed"
///   → Platform clipboard watcher (reads the text)
///   → CaptureClipboardText (this use case)
///   → SharedClipHistory::record
/// ```
pub struct CaptureClipboardText {
    history: SharedClipHistory,
    settings: Arc<dyn SettingsPort>,
}

impl CaptureClipboardText {
    pub fn from_ports(history: SharedClipHistory, settings: Arc<dyn SettingsPort>) -> Self {
        Self { history, settings }
    }

    #[tracing::instrument(name = "usecase.capture_clipboard_text.execute", skip(self, text))]
    pub async fn execute(&self, kind: ClipboardKind, text: &str) -> Result<RecordOutcome> {
        if kind != ClipboardKind::Clipboard {
            return Ok(RecordOutcome::Ignored);
        }

        let settings = self.settings.load().await?;
        if !settings.clip_history.enabled {
            debug!("Clipboard history disabled, change ignored");
            return Ok(RecordOutcome::Ignored);
        }

        let outcome = self.history.record(text);
        info!(?outcome, len = self.history.len(), "Captured clipboard text");
        Ok(outcome)
    }
}

#[async_trait]
impl ClipboardChangeHandler for CaptureClipboardText {
    async fn on_clipboard_changed(&self, kind: ClipboardKind, text: String) -> Result<()> {
        self.execute(kind, &text).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use tw_core::clipboard::{ClipHistory, SearchKeyBuilder};
    use tw_core::settings::Settings;

    mock! {
        SettingsRepo {}

        #[async_trait]
        impl SettingsPort for SettingsRepo {
            async fn load(&self) -> anyhow::Result<Settings>;
            async fn save(&self, settings: &Settings) -> anyhow::Result<()>;
        }
    }

    fn settings_with(enabled: bool) -> Arc<MockSettingsRepo> {
        let mut mock = MockSettingsRepo::new();
        mock.expect_load().returning(move || {
            let mut settings = Settings::default();
            settings.clip_history.enabled = enabled;
            Ok(settings)
        });
        Arc::new(mock)
    }

    fn history() -> SharedClipHistory {
        SharedClipHistory::new(ClipHistory::new(SearchKeyBuilder::ascii_only()))
    }

    #[tokio::test]
    async fn records_clipboard_copies() {
        let history = history();
        let uc = CaptureClipboardText::from_ports(history.clone(), settings_with(true));

        uc.on_clipboard_changed(ClipboardKind::Clipboard, "hello".into())
            .await
            .unwrap();

        assert_eq!(history.texts(), vec!["hello"]);
    }

    #[tokio::test]
    async fn ignores_primary_selection() {
        let history = history();
        // settings are never consulted for the primary selection
        let uc = CaptureClipboardText::from_ports(history.clone(), Arc::new(MockSettingsRepo::new()));

        let outcome = uc.execute(ClipboardKind::Primary, "selected").await.unwrap();

        assert_eq!(outcome, RecordOutcome::Ignored);
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn ignores_changes_while_disabled() {
        let history = history();
        let uc = CaptureClipboardText::from_ports(history.clone(), settings_with(false));

        let outcome = uc.execute(ClipboardKind::Clipboard, "hello").await.unwrap();

        assert_eq!(outcome, RecordOutcome::Ignored);
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn settings_failure_is_propagated() {
        let mut mock = MockSettingsRepo::new();
        mock.expect_load()
            .returning(|| Err(anyhow::anyhow!("settings unreadable")));
        let uc = CaptureClipboardText::from_ports(history(), Arc::new(mock));

        assert!(uc.execute(ClipboardKind::Clipboard, "x").await.is_err());
    }
}
