pub mod config_helper;
pub mod json_cleaner;
