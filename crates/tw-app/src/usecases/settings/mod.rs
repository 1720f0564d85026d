mod apply_clip_history_settings;
mod get_settings;
mod update_settings;

pub use apply_clip_history_settings::ApplyClipHistorySettings;
pub use get_settings::GetSettings;
pub use update_settings::UpdateSettings;
