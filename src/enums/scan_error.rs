use std::time::Duration;
use thiserror::Error;
use crate::enums::ai_provider_error::AiProviderError;

/// Why a scan fell back to the sentinel result.
///
/// Callers only ever see the unified `UNKNOWN` verdict; the kind is kept for
/// logs and tests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("could not reach the model service: {0}")]
    Transport(String),

    #[error("model service returned an error: {0}")]
    RemoteService(String),

    #[error("model service rejected the credentials: {0}")]
    Authentication(String),

    #[error("model response is not valid JSON: {0}")]
    MalformedJson(String),

    #[error("model response is missing required field `{field}`")]
    IncompleteResponse { field: String },

    #[error("model service did not answer within {limit:?}")]
    Timeout { limit: Duration },
}

impl ScanError {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::RemoteService(_) => "remote_service",
            Self::Authentication(_) => "authentication",
            Self::MalformedJson(_) => "malformed_json",
            Self::IncompleteResponse { .. } => "incomplete_response",
            Self::Timeout { .. } => "timeout",
        }
    }

    pub fn missing(field: &str) -> Self {
        Self::IncompleteResponse { field: field.to_string() }
    }
}

impl From<AiProviderError> for ScanError {
    fn from(error: AiProviderError) -> Self {
        match error {
            AiProviderError::NetworkError(msg) => Self::Transport(msg),
            AiProviderError::AuthenticationError(msg) => Self::Authentication(msg),
            AiProviderError::ApiError(msg) | AiProviderError::SerializationError(msg) => Self::RemoteService(msg),
        }
    }
}

impl From<serde_json::Error> for ScanError {
    fn from(error: serde_json::Error) -> Self {
        Self::MalformedJson(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_errors_keep_their_kind() {
        let transport: ScanError = AiProviderError::NetworkError("connection refused".to_string()).into();
        assert_eq!(transport.kind(), "transport");

        let auth: ScanError = AiProviderError::AuthenticationError("bad key".to_string()).into();
        assert_eq!(auth, ScanError::Authentication("bad key".to_string()));

        let remote: ScanError = AiProviderError::SerializationError("truncated body".to_string()).into();
        assert_eq!(remote.kind(), "remote_service");
    }

    #[test]
    fn test_missing_field_message() {
        let error = ScanError::missing("verdict");
        assert_eq!(error.to_string(), "model response is missing required field `verdict`");
    }

    #[test]
    fn test_timeout_message_keeps_sub_second_limits() {
        let error = ScanError::Timeout { limit: Duration::from_millis(50) };
        assert_eq!(error.to_string(), "model service did not answer within 50ms");

        let error = ScanError::Timeout { limit: Duration::from_secs(30) };
        assert_eq!(error.to_string(), "model service did not answer within 30s");
    }
}
