use serde::{Deserialize, Serialize};
use crate::config::constants::{FAILED_ANALYSIS_RISK_FACTOR, FAILED_ANALYSIS_SUMMARY};
use crate::enums::verdict::Verdict;
use crate::structs::source::Source;
use crate::structs::technical_details::TechnicalDetails;

/// Security assessment for a single URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub url: String,
    pub safety_score: u8,
    pub verdict: Verdict,
    pub summary: String,
    pub risk_factors: Vec<String>,
    pub safe_factors: Vec<String>,
    pub technical_details: TechnicalDetails,
    pub sources: Vec<Source>,
}

impl AnalysisResult {
    /// The fixed result substituted whenever a scan fails.
    pub fn failed(url: String) -> Self {
        Self {
            url,
            safety_score: 0,
            verdict: Verdict::Unknown,
            summary: FAILED_ANALYSIS_SUMMARY.to_string(),
            risk_factors: vec![FAILED_ANALYSIS_RISK_FACTOR.to_string()],
            safe_factors: Vec::new(),
            technical_details: TechnicalDetails::default(),
            sources: Vec::new(),
        }
    }

    pub fn is_failure_sentinel(&self) -> bool {
        *self == Self::failed(self.url.clone())
    }
}
