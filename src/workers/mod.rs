pub mod command_runner;
pub mod scan_session;
