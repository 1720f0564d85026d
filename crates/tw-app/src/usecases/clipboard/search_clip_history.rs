use tracing::debug;
use tw_core::clipboard::ClipView;

use crate::clip_store::SharedClipHistory;

/// Use case for filtering the clipboard history with a typed query.
/// 用输入的查询过滤剪贴板历史的用例。
///
/// An empty query lists the whole history, most recent first.
pub struct SearchClipHistory {
    history: SharedClipHistory,
}

impl SearchClipHistory {
    pub fn new(history: SharedClipHistory) -> Self {
        Self { history }
    }

    #[tracing::instrument(name = "usecase.search_clip_history.execute", skip(self))]
    pub fn execute(&self, query: &str) -> ClipView {
        let view = self.history.search(query);
        debug!(matches = view.len(), "Searched clipboard history");
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tw_core::clipboard::{ClipHistory, SearchKeyBuilder};

    #[test]
    fn filters_in_history_order() {
        let history = SharedClipHistory::new(ClipHistory::new(SearchKeyBuilder::ascii_only()));
        for text in ["dog", "wide", "world"] {
            history.record(text);
        }

        let uc = SearchClipHistory::new(history);

        assert_eq!(uc.execute("wd").texts(), vec!["world", "wide"]);
        assert_eq!(uc.execute("").len(), 3);
    }
}
