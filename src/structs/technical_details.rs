use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosting_provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_status: Option<String>,
}

impl TechnicalDetails {
    pub const fn is_empty(&self) -> bool {
        self.domain_age.is_none() && self.hosting_provider.is_none() && self.ssl_status.is_none()
    }
}
