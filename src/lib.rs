//! URL threat scanning backed by a web-search grounded Gemini model.
//!
//! [`services::url_scanner::UrlScanner`] is the entry point for library use:
//! give it an [`traits::ai_provider::AiProvider`] and it turns URLs into
//! [`structs::analysis_result::AnalysisResult`]s.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod prompts;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
