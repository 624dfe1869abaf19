pub mod ai_config;
pub mod config;
pub mod scan_config;
