use tracing::info;
use tw_core::settings::ClipHistorySettings;

use crate::clip_store::SharedClipHistory;

/// Applies clipboard history settings to the live history.
///
/// Shrinking the capacity evicts the oldest entries right away.
pub struct ApplyClipHistorySettings {
    history: SharedClipHistory,
}

impl ApplyClipHistorySettings {
    pub fn new(history: SharedClipHistory) -> Self {
        Self { history }
    }

    #[tracing::instrument(name = "usecase.apply_clip_history_settings.execute", skip_all)]
    pub fn execute(&self, settings: &ClipHistorySettings) -> usize {
        let evicted = self.history.set_capacity(settings.capacity);
        info!(capacity = settings.capacity, evicted, "Applied clipboard history capacity");
        evicted
    }
}
