pub mod ai;
pub mod analysis_result;
pub mod cli;
pub mod config;
pub mod grounding_chunk;
pub mod model_response;
pub mod remote_model_request;
pub mod scan_report;
pub mod source;
pub mod technical_details;
