pub mod fs;
pub mod pinyin;
pub mod settings;

pub use pinyin::load_initials_table;
pub use settings::FileSettingsRepository;
