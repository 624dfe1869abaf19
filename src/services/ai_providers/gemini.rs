use std::sync::Arc;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use crate::enums::ai_provider_error::AiProviderError;
use crate::services::rate_limiter::ApiRateLimiter;
use crate::structs::ai::gemini::gemini_content::GeminiContent;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::ai::gemini::gemini_request::GeminiRequest;
use crate::structs::ai::gemini::gemini_response::GeminiResponse;
use crate::structs::ai::gemini::gemini_tool::GeminiTool;
use crate::structs::config::ai_config::AiConfig;
use crate::structs::model_response::ModelResponse;
use crate::structs::remote_model_request::RemoteModelRequest;
use crate::traits::ai_provider::AiProvider;

#[derive(Clone)]
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    rate_limiter: Arc<ApiRateLimiter>,
}

impl GeminiProvider {
    pub fn new(api_key: String, rate_limiter: Arc<ApiRateLimiter>) -> Self {
        let defaults = AiConfig::default();
        Self {
            api_key,
            base_url: defaults.base_url,
            client: Client::new(),
            model: defaults.model,
            rate_limiter,
        }
    }

    pub fn from_config(ai: &AiConfig, api_key: String) -> Self {
        Self::new(api_key, Arc::new(ApiRateLimiter::new(ai.rate_limit_per_minute)))
            .with_model(ai.model.clone())
            .with_base_url(ai.base_url.clone())
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent?key={}", self.base_url, self.model, self.api_key)
    }

    pub fn get_request(request: &RemoteModelRequest) -> GeminiRequest {
        let tools = if request.web_search {
            vec![GeminiTool::google_search()]
        } else {
            Vec::new()
        };

        GeminiRequest {
            contents: vec![GeminiContent::user(request.prompt.clone())],
            tools,
            generation_config: Some(GeminiGenerationConfig {
                temperature: Some(request.temperature),
            }),
        }
    }

    async fn make_request(&self, request_body: &GeminiRequest) -> Result<reqwest::Response, AiProviderError> {
        log::debug!("📦 Request model: {}", self.model);

        self.client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .json(request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.without_url().to_string()))
    }

    fn status_error(status: StatusCode, error_text: String) -> AiProviderError {
        match status.as_u16() {
            400 => AiProviderError::ApiError(format!("Bad request: {}", error_text)),
            401 | 403 => AiProviderError::AuthenticationError(error_text),
            429 => AiProviderError::ApiError(format!("Rate limit exceeded: {}", error_text)),
            _ => AiProviderError::ApiError(format!("HTTP {}: {}", status, error_text)),
        }
    }

    /// Text of the first candidate plus its grounding chunks.
    pub fn parse_response(response: GeminiResponse) -> Result<ModelResponse, AiProviderError> {
        if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(AiProviderError::ApiError(format!("Prompt blocked: {}", reason)));
        }

        let Some(candidate) = response.candidates.into_iter().next() else {
            log::warn!("⚠️ Gemini returned no candidates");
            return Ok(ModelResponse::default());
        };

        if let Some(reason) = &candidate.finish_reason {
            log::debug!("Gemini finish reason: {}", reason);
        }

        let text = candidate.content.map(|c| c.text()).unwrap_or_default();
        let grounding_chunks = candidate
            .grounding_metadata
            .map(|m| m.grounding_chunks)
            .unwrap_or_default();

        Ok(ModelResponse::new(text).with_grounding(grounding_chunks))
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    async fn generate(&self, request: &RemoteModelRequest) -> Result<ModelResponse, AiProviderError> {
        self.rate_limiter.acquire().await;

        let request_body = Self::get_request(request);
        let response = self.make_request(&request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::error!("❌ Gemini API Error Response ({}): {}", status, error_text);
            return Err(Self::status_error(status, error_text));
        }

        let body: GeminiResponse = response.json().await
            .map_err(|e| AiProviderError::SerializationError(e.without_url().to_string()))?;

        Self::parse_response(body)
    }
}
