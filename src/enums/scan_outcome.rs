use crate::enums::scan_error::ScanError;
use crate::enums::verdict::Verdict;
use crate::structs::analysis_result::AnalysisResult;

/// Result of one scan, before it is flattened for display.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    Completed(AnalysisResult),
    Failed { url: String, error: ScanError },
}

impl ScanOutcome {
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    pub const fn error(&self) -> Option<&ScanError> {
        match self {
            Self::Completed(_) => None,
            Self::Failed { error, .. } => Some(error),
        }
    }

    pub fn verdict(&self) -> Verdict {
        match self {
            Self::Completed(result) => result.verdict,
            Self::Failed { .. } => Verdict::Unknown,
        }
    }

    /// Collapses a failure into the sentinel result.
    pub fn into_analysis_result(self) -> AnalysisResult {
        match self {
            Self::Completed(result) => result,
            Self::Failed { url, .. } => AnalysisResult::failed(url),
        }
    }
}

impl From<ScanOutcome> for AnalysisResult {
    fn from(outcome: ScanOutcome) -> Self {
        outcome.into_analysis_result()
    }
}
