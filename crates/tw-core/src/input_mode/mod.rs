//! Per-window input mode memory and the IBus property model it drives.

mod auto_switch;
mod memory;
mod property;

pub use auto_switch::{AutoSwitch, SwitchDecision, SwitchOutcome, OVERVIEW_WINDOW, RUN_DIALOG_WINDOW};
pub use memory::{InputModeMemory, InputModeRecord};
pub use property::{activation_for, current_mode, InputProperty, PropertyActivation, PropertyKind};
