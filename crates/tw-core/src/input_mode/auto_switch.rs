use tracing::debug;

use super::memory::{InputModeMemory, InputModeRecord};

/// Pseudo window used while the overview is shown.
pub const OVERVIEW_WINDOW: &str = "#overview";
/// Pseudo window used while the run dialog is open.
pub const RUN_DIALOG_WINDOW: &str = "#run-dialog";

/// What the caller should do with the input source after a focus change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchDecision {
    /// Leave the current mode alone
    Keep,
    /// Switch the current source to this remembered mode
    Restore(String),
}

/// Result of a focus change: the decision plus whether the memory must be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchOutcome {
    pub decision: SwitchDecision,
    pub memory_changed: bool,
}

/// Remembers the input mode of each window and restores it on focus.
/// 记住每个窗口的输入模式，并在获得焦点时恢复。
///
/// On every focus change:
/// 1. The mode in use is remembered for the window that lost focus.
/// 2. A window seen for the first time is seeded with the mode in use.
/// 3. If the remembered mode of the new window differs from the current one
///    and belongs to the same input source, it is restored.
///
/// An override (overview, run dialog) stands in for the focused window while set.
#[derive(Debug, Clone, Default)]
pub struct AutoSwitch {
    memory: InputModeMemory,
    window: Option<String>,
    override_window: Option<String>,
}

impl AutoSwitch {
    pub fn new(memory: InputModeMemory) -> Self {
        Self {
            memory,
            window: None,
            override_window: None,
        }
    }

    pub fn memory(&self) -> &InputModeMemory {
        &self.memory
    }

    /// Window key the memory is currently tracking.
    pub fn current_window(&self) -> Option<&str> {
        self.window.as_deref()
    }

    /// Handles a focus change to a window of class `window_class` (or no window).
    ///
    /// `current` is the source and mode in use at the moment of the change.
    pub fn on_focus_changed(
        &mut self,
        current: &InputModeRecord,
        window_class: Option<&str>,
    ) -> SwitchOutcome {
        let mut memory_changed = false;

        if let Some(previous) = self.window.clone() {
            if self.differs(&previous, current) {
                memory_changed |= self.memory.remember(&previous, current.clone());
            }
        }

        let next = self
            .override_window
            .clone()
            .or_else(|| window_class.map(str::to_lowercase));
        self.window = next.clone();

        let Some(window) = next else {
            return SwitchOutcome {
                decision: SwitchDecision::Keep,
                memory_changed,
            };
        };

        if self.memory.get(&window).is_none() {
            memory_changed |= self.memory.remember(&window, current.clone());
        }

        let decision = match self.memory.get(&window) {
            Some(saved) if saved != current && saved.source_id == current.source_id => {
                debug!(window = %window, mode = %saved.mode, "Restoring input mode");
                SwitchDecision::Restore(saved.mode.clone())
            }
            _ => SwitchDecision::Keep,
        };

        SwitchOutcome {
            decision,
            memory_changed,
        }
    }

    /// Sets or clears the pseudo window, then re-evaluates focus.
    ///
    /// `focused_class` is the real focused window, used once the override is cleared.
    pub fn set_override(
        &mut self,
        override_window: Option<&str>,
        current: &InputModeRecord,
        focused_class: Option<&str>,
    ) -> SwitchOutcome {
        self.override_window = override_window.map(str::to_string);
        self.on_focus_changed(current, focused_class)
    }

    fn differs(&self, window: &str, current: &InputModeRecord) -> bool {
        self.memory.get(window) != Some(current)
    }
}
