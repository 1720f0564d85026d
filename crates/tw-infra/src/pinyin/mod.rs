mod table_file;

pub use table_file::load_initials_table;
