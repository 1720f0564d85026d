mod auto_switch_input_mode;
mod settings_input_mode_store;

pub use auto_switch_input_mode::AutoSwitchInputMode;
pub use settings_input_mode_store::SettingsInputModeStore;
