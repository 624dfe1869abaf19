use crate::config::constants::DEFAULT_TEMPERATURE;
use crate::prompts::url_analysis_prompt::{URL_ANALYSIS_PROMPT, URL_PLACEHOLDER};
use crate::structs::remote_model_request::RemoteModelRequest;

/// Builds the analysis request for `url`. The URL is interpolated verbatim;
/// validation happens before it reaches this point.
pub fn build_request(url: &str) -> RemoteModelRequest {
    build_request_with(url, DEFAULT_TEMPERATURE)
}

pub fn build_request_with(url: &str, temperature: f32) -> RemoteModelRequest {
    RemoteModelRequest {
        prompt: URL_ANALYSIS_PROMPT.replace(URL_PLACEHOLDER, url),
        web_search: true,
        temperature,
    }
}
