use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::enums::scan_outcome::ScanOutcome;
use crate::structs::analysis_result::AnalysisResult;

/// JSON envelope printed by `linkscan scan --json`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub scanned_at: DateTime<Utc>,
    pub duration_ms: u64,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_kind: Option<String>,
    pub result: AnalysisResult,
}

impl ScanReport {
    pub fn new(outcome: ScanOutcome, scanned_at: DateTime<Utc>, duration_ms: u64) -> Self {
        let completed = outcome.is_completed();
        let failure_kind = outcome.error().map(|e| e.kind().to_string());

        Self {
            scanned_at,
            duration_ms,
            completed,
            failure_kind,
            result: outcome.into_analysis_result(),
        }
    }
}
