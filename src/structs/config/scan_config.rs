use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScanConfig {
    /// Zero disables the timeout.
    #[serde(default = "ConfigHelper::default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_min_display_ms")]
    pub min_display_ms: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            timeout_secs: ConfigHelper::default_timeout_secs(),
            min_display_ms: ConfigHelper::default_min_display_ms(),
        }
    }
}
