use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::model_response::ModelResponse;
use crate::structs::remote_model_request::RemoteModelRequest;

/// A hosted model that can answer an analysis request. Injected into the
/// scanner so tests can swap in a fake transport.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiProvider: Send + Sync {
    async fn generate(&self, request: &RemoteModelRequest) -> Result<ModelResponse, AiProviderError>;
}
