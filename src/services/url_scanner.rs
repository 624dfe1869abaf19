use std::sync::Arc;
use std::time::Duration;
use crate::enums::scan_error::ScanError;
use crate::enums::scan_outcome::ScanOutcome;
use crate::services::request_builder::build_request_with;
use crate::services::response_normalizer::normalize;
use crate::config::constants::DEFAULT_TEMPERATURE;
use crate::structs::analysis_result::AnalysisResult;
use crate::traits::ai_provider::AiProvider;

/// Runs one URL through request building, the model call and normalization.
pub struct UrlScanner {
    ai_provider: Arc<dyn AiProvider>,
    temperature: f32,
    timeout: Option<Duration>,
}

impl UrlScanner {
    pub fn new(ai_provider: Arc<dyn AiProvider>) -> Self {
        Self {
            ai_provider,
            temperature: DEFAULT_TEMPERATURE,
            timeout: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub async fn scan(&self, url: &str) -> ScanOutcome {
        match self.try_scan(url).await {
            Ok(result) => {
                log::info!("🔍 {} scored {} ({})", url, result.safety_score, result.verdict);
                ScanOutcome::Completed(result)
            }
            Err(error) => {
                log::error!("❌ Analysis of {} failed [{}]: {}", url, error.kind(), error);
                ScanOutcome::Failed { url: url.to_string(), error }
            }
        }
    }

    /// Never fails: any error becomes the sentinel result.
    pub async fn analyze_url(&self, url: &str) -> AnalysisResult {
        self.scan(url).await.into_analysis_result()
    }

    async fn try_scan(&self, url: &str) -> Result<AnalysisResult, ScanError> {
        let request = build_request_with(url, self.temperature);

        let response = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.ai_provider.generate(&request))
                .await
                .map_err(|_| ScanError::Timeout { limit })??,
            None => self.ai_provider.generate(&request).await?,
        };

        normalize(url, &response.text, &response.grounding_chunks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ai_provider_error::AiProviderError;
    use crate::enums::verdict::Verdict;
    use crate::structs::grounding_chunk::GroundingChunk;
    use crate::structs::model_response::ModelResponse;
    use crate::structs::remote_model_request::RemoteModelRequest;
    use crate::traits::ai_provider::MockAiProvider;

    struct StalledProvider;

    #[async_trait::async_trait]
    impl AiProvider for StalledProvider {
        async fn generate(&self, _request: &RemoteModelRequest) -> Result<ModelResponse, AiProviderError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(ModelResponse::default())
        }
    }

    fn scanner_returning(result: Result<ModelResponse, AiProviderError>) -> UrlScanner {
        let mut provider = MockAiProvider::new();
        provider
            .expect_generate()
            .times(1)
            .returning(move |_| result.clone());
        UrlScanner::new(Arc::new(provider))
    }

    #[tokio::test]
    async fn test_typo_squatting_scan_end_to_end() {
        let text = r#"{"safetyScore":5,"verdict":"DANGEROUS","summary":"Imitates Google support","riskFactors":["Typo-squatting of google.com"],"safeFactors":[],"technicalDetails":{}}"#;
        let response = ModelResponse::new(text)
            .with_grounding(vec![GroundingChunk::web("https://report.example/x", "ReportSite")]);

        let outcome = scanner_returning(Ok(response)).scan("http://goog1e-support.com").await;

        assert!(outcome.is_completed());
        let result = outcome.into_analysis_result();
        assert_eq!(result.url, "http://goog1e-support.com");
        assert_eq!(result.verdict, Verdict::Dangerous);
        assert_eq!(result.safety_score, 5);
        assert_eq!(result.risk_factors.len(), 1);
        assert_eq!(result.sources.len(), 1);
        assert_eq!(result.sources[0].title, "ReportSite");
    }

    #[tokio::test]
    async fn test_request_carries_url_and_temperature() {
        let mut provider = MockAiProvider::new();
        provider
            .expect_generate()
            .withf(|request| {
                request.web_search
                    && request.prompt.contains("http://phish.test")
                    && (request.temperature - 0.3).abs() < f32::EPSILON
            })
            .times(1)
            .returning(|_| Ok(ModelResponse::new(r#"{"verdict":"SAFE","safetyScore":90}"#)));

        let scanner = UrlScanner::new(Arc::new(provider)).with_temperature(0.3);
        assert!(scanner.scan("http://phish.test").await.is_completed());
    }

    #[tokio::test]
    async fn test_network_failure_becomes_sentinel() {
        let scanner = scanner_returning(Err(AiProviderError::NetworkError("connection reset".to_string())));

        let outcome = scanner.scan("https://bank.example").await;
        assert_eq!(outcome.error(), Some(&ScanError::Transport("connection reset".to_string())));

        let result = outcome.into_analysis_result();
        assert!(result.is_failure_sentinel());
        assert_eq!(result.url, "https://bank.example");
    }

    #[tokio::test]
    async fn test_malformed_model_text_becomes_sentinel() {
        let result = scanner_returning(Ok(ModelResponse::new("I think this site is fine!")))
            .analyze_url("https://shop.example")
            .await;

        assert_eq!(result.verdict, Verdict::Unknown);
        assert_eq!(result.safety_score, 0);
        assert!(result.sources.is_empty());
    }

    #[tokio::test]
    async fn test_remote_error_and_parse_error_look_the_same_to_callers() {
        let remote = scanner_returning(Err(AiProviderError::ApiError("HTTP 500".to_string())))
            .analyze_url("https://x.test")
            .await;
        let parse = scanner_returning(Ok(ModelResponse::new("{")))
            .analyze_url("https://x.test")
            .await;

        assert_eq!(remote, parse);
    }

    #[tokio::test]
    async fn test_timeout_becomes_sentinel() {
        let scanner = UrlScanner::new(Arc::new(StalledProvider))
            .with_timeout(Some(Duration::from_millis(20)));

        let outcome = scanner.scan("https://slow.test").await;

        assert_eq!(outcome.error(), Some(&ScanError::Timeout { limit: Duration::from_millis(20) }));
        assert_eq!(
            outcome.error().map(ToString::to_string).as_deref(),
            Some("model service did not answer within 20ms")
        );
        assert!(outcome.into_analysis_result().is_failure_sentinel());
    }
}
