use std::time::Duration;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";

/// Low so repeated scans of the same URL agree with each other.
pub const DEFAULT_TEMPERATURE: f32 = 0.1;
pub const MAX_TEMPERATURE: f32 = 2.0;

pub const DEFAULT_RATE_LIMIT_PER_MINUTE: u32 = 10;
pub const BURST_LIMIT_PER_SECOND: u32 = 2;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MIN_DISPLAY_MS: u64 = 2000;

pub const MAX_SAFETY_SCORE: u8 = 100;

pub const FAILED_ANALYSIS_SUMMARY: &str =
    "Analysis failed due to a technical error. Proceed with extreme caution.";
pub const FAILED_ANALYSIS_RISK_FACTOR: &str = "Analysis service unavailable";

pub const CONFIG_DIR_NAME: &str = "linkscan";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub fn timeout_duration(seconds: u64) -> Option<Duration> {
    if seconds == 0 {
        None
    } else {
        Some(Duration::from_secs(seconds))
    }
}

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
