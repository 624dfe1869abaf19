//! Turns the model's free-text answer into an [`AnalysisResult`].
//!
//! The model is only asked, never forced, to answer in JSON, so everything it
//! sends back is treated as untrusted input.

use serde_json::{Map, Value};
use crate::config::constants::MAX_SAFETY_SCORE;
use crate::enums::scan_error::ScanError;
use crate::enums::verdict::Verdict;
use crate::helpers::json_cleaner::strip_code_fences;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::grounding_chunk::GroundingChunk;
use crate::structs::source::Source;
use crate::structs::technical_details::TechnicalDetails;

const SAFETY_SCORE_FIELD: &str = "safetyScore";
const VERDICT_FIELD: &str = "verdict";
const SUMMARY_FIELD: &str = "summary";
const RISK_FACTORS_FIELD: &str = "riskFactors";
const SAFE_FACTORS_FIELD: &str = "safeFactors";
const TECHNICAL_DETAILS_FIELD: &str = "technicalDetails";
const DOMAIN_AGE_FIELD: &str = "domainAge";
const HOSTING_PROVIDER_FIELD: &str = "hostingProvider";
const SSL_STATUS_FIELD: &str = "sslStatus";

/// `verdict` and `safetyScore` are required. Missing text fields become empty
/// and missing technical details stay absent.
pub fn normalize(url: &str, raw_text: &str, grounding_chunks: &[GroundingChunk]) -> Result<AnalysisResult, ScanError> {
    let cleaned = strip_code_fences(raw_text);
    let value: Value = serde_json::from_str(&cleaned)?;
    let object = value
        .as_object()
        .ok_or_else(|| ScanError::MalformedJson(format!("expected a JSON object, got {}", json_type(&value))))?;

    let verdict = object
        .get(VERDICT_FIELD)
        .and_then(Value::as_str)
        .and_then(Verdict::parse)
        .ok_or_else(|| ScanError::missing(VERDICT_FIELD))?;

    let safety_score = object
        .get(SAFETY_SCORE_FIELD)
        .and_then(parse_score)
        .ok_or_else(|| ScanError::missing(SAFETY_SCORE_FIELD))?;

    Ok(AnalysisResult {
        url: url.to_string(),
        safety_score,
        verdict,
        summary: object.get(SUMMARY_FIELD).and_then(Value::as_str).unwrap_or_default().to_string(),
        risk_factors: string_list(object.get(RISK_FACTORS_FIELD)),
        safe_factors: string_list(object.get(SAFE_FACTORS_FIELD)),
        technical_details: technical_details(object.get(TECHNICAL_DETAILS_FIELD)),
        sources: extract_sources(grounding_chunks),
    })
}

/// Same as [`normalize`], with every failure replaced by the sentinel result.
pub fn normalize_or_sentinel(url: &str, raw_text: &str, grounding_chunks: &[GroundingChunk]) -> AnalysisResult {
    normalize(url, raw_text, grounding_chunks).unwrap_or_else(|e| {
        log::error!("❌ Could not normalize model response for {} ({}): {}", url, e.kind(), e);
        AnalysisResult::failed(url.to_string())
    })
}

/// Keeps web citations that carry both a title and a uri, in order.
pub fn extract_sources(grounding_chunks: &[GroundingChunk]) -> Vec<Source> {
    grounding_chunks
        .iter()
        .filter_map(|chunk| chunk.web.as_ref())
        .filter_map(|web| match (&web.title, &web.uri) {
            (Some(title), Some(uri)) if !title.is_empty() && !uri.is_empty() => Some(Source {
                title: title.clone(),
                uri: uri.clone(),
            }),
            _ => None,
        })
        .collect()
}

fn parse_score(value: &Value) -> Option<u8> {
    let score = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if !score.is_finite() {
        return None;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let clamped = score.round().clamp(0.0, f64::from(MAX_SAFETY_SCORE)) as u8;
    Some(clamped)
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_default()
}

fn technical_details(value: Option<&Value>) -> TechnicalDetails {
    let Some(details) = value.and_then(Value::as_object) else {
        return TechnicalDetails::default();
    };

    TechnicalDetails {
        domain_age: string_field(details, DOMAIN_AGE_FIELD),
        hosting_provider: string_field(details, HOSTING_PROVIDER_FIELD),
        ssl_status: string_field(details, SSL_STATUS_FIELD),
    }
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_string)
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
