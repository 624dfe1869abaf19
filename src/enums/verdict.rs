use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Safe,
    Suspicious,
    Dangerous,
    /// Local fallback. The prompt only lets the model answer with the other three.
    Unknown,
}

impl Verdict {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "SAFE" => Some(Self::Safe),
            "SUSPICIOUS" => Some(Self::Suspicious),
            "DANGEROUS" => Some(Self::Dangerous),
            "UNKNOWN" => Some(Self::Unknown),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "SAFE",
            Self::Suspicious => "SUSPICIOUS",
            Self::Dangerous => "DANGEROUS",
            Self::Unknown => "UNKNOWN",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Safe => "✅",
            Self::Suspicious => "⚠️",
            Self::Dangerous => "🚨",
            Self::Unknown => "❔",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
