use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info};
use tw_core::picker::{ClipPicker, PickerAction, PickerKey, PickerPage};
use tw_core::ports::{SettingsPort, TextCommitPort};

use super::commit_clip_text::CommitClipText;
use crate::clip_store::SharedClipHistory;

/// One open clipboard picker, from the shortcut press to commit or dismiss.
/// 一次剪贴板候选框会话（从快捷键到提交或关闭）。
///
/// ## Behavior / 行为
/// - Page size, page button visibility and commit delay are read from settings when the session opens
/// - Edits (delete, merge, clear) go straight to the shared history
/// - A commit hands the entry text to [`CommitClipText`]
pub struct ClipPickerSession {
    history: SharedClipHistory,
    picker: ClipPicker,
    commit: CommitClipText,
    show_page_buttons: bool,
}

impl ClipPickerSession {
    #[tracing::instrument(name = "usecase.clip_picker_session.open", skip_all)]
    pub async fn open(
        history: SharedClipHistory,
        settings: Arc<dyn SettingsPort>,
        committer: Arc<dyn TextCommitPort>,
    ) -> Result<Self> {
        let settings = settings.load().await?.clip_history;

        let mut picker = ClipPicker::new(settings.page_size as usize);
        history.with(|h| picker.open(h));
        info!(
            entries = picker.lookup().len(),
            page_size = picker.page_size(),
            "Opened clipboard picker"
        );

        Ok(Self {
            history,
            picker,
            commit: CommitClipText::from_ports(
                committer,
                Duration::from_millis(settings.commit_delay_ms),
            ),
            show_page_buttons: !settings.hide_page_buttons,
        })
    }

    pub fn page(&self) -> PickerPage {
        self.picker.page()
    }

    pub fn preedit(&self) -> &str {
        self.picker.preedit()
    }

    /// Whether the candidate popup should draw its previous/next page buttons.
    pub fn show_page_buttons(&self) -> bool {
        self.show_page_buttons
    }

    /// Feeds one key press to the picker.
    ///
    /// On [`PickerAction::Commit`] the text has already been committed when
    /// this returns; the caller only needs to close the popup.
    pub async fn press(&mut self, key: PickerKey) -> Result<PickerAction> {
        let picker = &mut self.picker;
        let action = self.history.with(|h| picker.handle_key(h, key));
        debug!(?key, ?action, "Picker key handled");

        if let PickerAction::Commit(text) = &action {
            self.commit.execute(text).await?;
        }
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tw_core::clipboard::{ClipHistory, SearchKeyBuilder};
    use tw_core::settings::Settings;

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

    #[derive(Default)]
    struct RecordingCommitter(Mutex<Vec<String>>);

    #[async_trait]
    impl TextCommitPort for RecordingCommitter {
        async fn commit_text(&self, text: &str) -> anyhow::Result<()> {
            self.0.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn settings(page_size: u32) -> Arc<FixedSettings> {
        let mut s = Settings::default();
        s.clip_history.page_size = page_size;
        s.clip_history.commit_delay_ms = 0;
        Arc::new(FixedSettings(s))
    }

    fn history_of(texts: &[&str]) -> SharedClipHistory {
        let history = SharedClipHistory::new(ClipHistory::new(SearchKeyBuilder::ascii_only()));
        for t in texts.iter().rev() {
            history.record(t);
        }
        history
    }

    #[tokio::test]
    async fn digit_commits_labelled_row() {
        let committer = Arc::new(RecordingCommitter::default());
        let mut session = ClipPickerSession::open(
            history_of(&["alpha", "beta", "gamma"]),
            settings(5),
            committer.clone(),
        )
        .await
        .unwrap();

        let action = session.press(PickerKey::Char('2')).await.unwrap();

        assert_eq!(action, PickerAction::Commit("beta".into()));
        assert_eq!(*committer.0.lock().unwrap(), vec!["beta".to_string()]);
    }

    #[tokio::test]
    async fn delete_edits_shared_history() {
        let history = history_of(&["alpha", "beta"]);
        let mut session = ClipPickerSession::open(
            history.clone(),
            settings(5),
            Arc::new(RecordingCommitter::default()),
        )
        .await
        .unwrap();

        assert_eq!(
            session.press(PickerKey::Delete).await.unwrap(),
            PickerAction::Continue
        );
        assert_eq!(history.texts(), vec!["beta"]);
        assert_eq!(session.page().rows[0].display, "beta");
    }

    #[tokio::test]
    async fn page_buttons_follow_settings() {
        let shown = ClipPickerSession::open(
            history_of(&["alpha"]),
            settings(5),
            Arc::new(RecordingCommitter::default()),
        )
        .await
        .unwrap();
        assert!(shown.show_page_buttons());

        let mut s = Settings::default();
        s.clip_history.hide_page_buttons = true;
        let hidden = ClipPickerSession::open(
            history_of(&["alpha"]),
            Arc::new(FixedSettings(s)),
            Arc::new(RecordingCommitter::default()),
        )
        .await
        .unwrap();
        assert!(!hidden.show_page_buttons());
    }

    #[tokio::test]
    async fn page_size_comes_from_settings() {
        let texts: Vec<String> = (0..12).map(|i| format!("clip{i}")).collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let session = ClipPickerSession::open(
            history_of(&refs),
            settings(4),
            Arc::new(RecordingCommitter::default()),
        )
        .await
        .unwrap();

        let page = session.page();
        assert_eq!(page.rows.len(), 4);
        assert_eq!(page.page_count, 3);
    }
}
