use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;
use tw_core::ports::TextCommitPort;

/// Use case for committing a picked clipboard entry into the focused client.
/// 将选中的剪贴板条目提交到当前焦点客户端的用例。
///
/// The commit waits `delay` first so the picker popup has closed and focus is
/// back on the client when the text arrives.
pub struct CommitClipText {
    committer: Arc<dyn TextCommitPort>,
    delay: Duration,
}

impl CommitClipText {
    pub fn from_ports(committer: Arc<dyn TextCommitPort>, delay: Duration) -> Self {
        Self { committer, delay }
    }

    #[tracing::instrument(name = "usecase.commit_clip_text.execute", skip(self, text))]
    pub async fn execute(&self, text: &str) -> Result<()> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.committer
            .commit_text(text)
            .await
            .context("Failed to commit clipboard text")?;

        info!(chars = text.chars().count(), "Committed clipboard text");
        Ok(())
    }
}
