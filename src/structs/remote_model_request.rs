use serde::Serialize;

/// Provider-neutral description of one analysis call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoteModelRequest {
    pub prompt: String,
    pub web_search: bool,
    pub temperature: f32,
}
