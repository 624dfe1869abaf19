use std::sync::Arc;
use std::time::Duration;
use serde_json::{json, Value};
use linkscan::enums::scan_error::ScanError;
use linkscan::enums::verdict::Verdict;
use linkscan::services::ai_providers::gemini::GeminiProvider;
use linkscan::services::rate_limiter::ApiRateLimiter;
use linkscan::services::url_scanner::UrlScanner;
use crate::support::serve_once;

fn gemini_at(base_url: String) -> GeminiProvider {
    GeminiProvider::new("it-key".to_string(), Arc::new(ApiRateLimiter::default()))
        .with_model("gemini-2.5-flash".to_string())
        .with_base_url(base_url)
}

#[tokio::test]
async fn test_grounded_answer_over_http() {
    let model_text = "```json\n{\"safetyScore\":5,\"verdict\":\"DANGEROUS\",\"summary\":\"Fake support page\",\"riskFactors\":[\"Typo-squatting of google.com\"],\"safeFactors\":[],\"technicalDetails\":{\"domainAge\":\"3 days\"}}\n```";
    let body = json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": model_text }] },
            "finishReason": "STOP",
            "groundingMetadata": {
                "groundingChunks": [
                    { "web": { "uri": "https://report.example/x", "title": "ReportSite" } },
                    { "web": { "uri": "https://no-title.example" } }
                ]
            }
        }]
    });
    let (base_url, captured) = serve_once("200 OK", &body.to_string()).await;

    let scanner = UrlScanner::new(Arc::new(gemini_at(base_url))).with_timeout(Some(Duration::from_secs(10)));
    let result = scanner.analyze_url("http://goog1e-support.com").await;

    assert_eq!(result.verdict, Verdict::Dangerous);
    assert_eq!(result.safety_score, 5);
    assert_eq!(result.risk_factors, vec!["Typo-squatting of google.com".to_string()]);
    assert_eq!(result.technical_details.domain_age.as_deref(), Some("3 days"));
    assert_eq!(result.sources.len(), 1);
    assert_eq!(result.sources[0].uri, "https://report.example/x");

    let request = captured.await.unwrap();
    assert!(request.head.starts_with("POST /v1beta/models/gemini-2.5-flash:generateContent?key=it-key HTTP/1.1"));

    let sent: Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(sent["tools"], json!([{ "googleSearch": {} }]));
    assert!(sent["contents"][0]["parts"][0]["text"].as_str().unwrap().contains("http://goog1e-support.com"));
}

#[tokio::test]
async fn test_rejected_key_falls_back_to_unknown() {
    let body = json!({ "error": { "code": 401, "message": "API key not valid", "status": "UNAUTHENTICATED" } });
    let (base_url, _captured) = serve_once("401 Unauthorized", &body.to_string()).await;

    let outcome = UrlScanner::new(Arc::new(gemini_at(base_url))).scan("https://example.com").await;

    assert!(matches!(outcome.error(), Some(ScanError::Authentication(msg)) if msg.contains("API key not valid")));
    assert!(outcome.into_analysis_result().is_failure_sentinel());
}

#[tokio::test]
async fn test_garbled_body_falls_back_to_unknown() {
    let (base_url, _captured) = serve_once("200 OK", "<html>gateway</html>").await;

    let outcome = UrlScanner::new(Arc::new(gemini_at(base_url))).scan("https://example.com").await;

    assert_eq!(outcome.error().map(ScanError::kind), Some("remote_service"));
    assert_eq!(outcome.verdict(), Verdict::Unknown);
}
