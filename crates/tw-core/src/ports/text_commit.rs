use async_trait::async_trait;

/// Commits text into the focused client, as the input method would.
#[async_trait]
pub trait TextCommitPort: Send + Sync {
    async fn commit_text(&self, text: &str) -> anyhow::Result<()>;
}
