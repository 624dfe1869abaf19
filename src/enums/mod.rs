pub mod ai_provider_error;
pub mod commands;
pub mod scan_error;
pub mod scan_outcome;
pub mod verdict;
