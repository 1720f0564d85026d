pub mod app_dirs;

pub use app_dirs::{app_config_dir, app_state_dir, system_default_config};
