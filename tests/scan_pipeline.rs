use std::time::Duration;
use tokio_test::{assert_err, assert_ok};
use linkscan::enums::ai_provider_error::AiProviderError;
use linkscan::enums::verdict::Verdict;
use linkscan::services::response_normalizer::{normalize, normalize_or_sentinel};
use linkscan::services::url_scanner::UrlScanner;
use linkscan::structs::grounding_chunk::GroundingChunk;
use linkscan::structs::model_response::ModelResponse;
use linkscan::structs::source::Source;
use linkscan::workers::scan_session::ScanSession;
use crate::support::FakeProvider;

const SAFE_RESPONSE: &str = r#"{"safetyScore":80,"verdict":"SAFE","summary":"ok","riskFactors":[],"safeFactors":["HTTPS"],"technicalDetails":{"sslStatus":"valid"}}"#;

#[test]
fn test_documented_grounding_example() {
    let chunks: Vec<GroundingChunk> =
        serde_json::from_str(r#"[{"web":{"uri":"https://a.com","title":"A"}},{"web":{}},{"other":1}]"#).unwrap();

    let result = assert_ok!(normalize("https://a.com", SAFE_RESPONSE, &chunks));

    assert_eq!(result.sources, vec![Source { title: "A".to_string(), uri: "https://a.com".to_string() }]);
}

#[test]
fn test_fences_do_not_change_the_result() {
    let chunks = vec![GroundingChunk::web("https://a.com", "A")];
    let fenced = format!("```json\n{}\n```", SAFE_RESPONSE);

    assert_eq!(
        normalize_or_sentinel("https://x.test", &fenced, &chunks),
        normalize_or_sentinel("https://x.test", SAFE_RESPONSE, &chunks)
    );
    assert_err!(normalize("https://x.test", "not json", &chunks));
}

#[tokio::test]
async fn test_session_scan_with_injected_provider() {
    let text = r#"{"safetyScore":5,"verdict":"DANGEROUS","summary":"Phishing","riskFactors":["Typo-squatting of google.com"],"safeFactors":[],"technicalDetails":{}}"#;
    let provider = FakeProvider::answering(Ok(ModelResponse::new(text)
        .with_grounding(vec![GroundingChunk::web("https://report.example/x", "ReportSite")])));
    let session = ScanSession::new(UrlScanner::new(provider.clone()), Duration::ZERO);

    let outcome = assert_ok!(session.submit("http://goog1e-support.com").await);

    assert_eq!(outcome.verdict(), Verdict::Dangerous);
    let stored = session.current().unwrap();
    assert_eq!(stored.risk_factors.len(), 1);
    assert_eq!(stored.sources.len(), 1);

    let requests = provider.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].web_search);
    assert!(requests[0].prompt.contains("\"http://goog1e-support.com\""));
}

#[tokio::test]
async fn test_failed_scan_replaces_previous_result() {
    let provider = FakeProvider::sequence(vec![
        Ok(ModelResponse::new(SAFE_RESPONSE)),
        Err(AiProviderError::NetworkError("dns failure".to_string())),
    ]);
    let session = ScanSession::new(UrlScanner::new(provider), Duration::ZERO);

    assert_ok!(session.submit("https://a.test").await);
    assert_eq!(session.current().map(|r| r.verdict), Some(Verdict::Safe));

    let outcome = assert_ok!(session.submit("https://b.test").await);

    assert!(!outcome.is_completed());
    let stored = session.current().unwrap();
    assert_eq!(stored.url, "https://b.test");
    assert!(stored.is_failure_sentinel());
}
