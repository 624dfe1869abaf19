use serde::{Deserialize, Serialize};

/// `googleSearch` grounding. The API rejects `responseSchema` when this is
/// enabled, so JSON output can only be requested through the prompt.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GeminiTool {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_search: Option<GoogleSearch>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct GoogleSearch {}

impl GeminiTool {
    pub fn google_search() -> Self {
        Self {
            google_search: Some(GoogleSearch {}),
        }
    }
}
