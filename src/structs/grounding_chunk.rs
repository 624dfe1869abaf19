use serde::{Deserialize, Serialize};

/// One entry of the model's grounding metadata. Chunks that are not web
/// citations deserialize with `web: None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingChunk {
    #[serde(default)]
    pub web: Option<WebReference>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebReference {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl GroundingChunk {
    pub fn web(uri: &str, title: &str) -> Self {
        Self {
            web: Some(WebReference {
                uri: Some(uri.to_string()),
                title: Some(title.to_string()),
            }),
        }
    }
}
