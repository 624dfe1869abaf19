use std::error::Error as StdError;
use std::fmt::{self, Write as _};

/// Errors that stop a command. Scan failures never show up here; they are
/// turned into the `UNKNOWN` result instead.
#[derive(Debug, Clone)]
pub enum LinkscanError {
    /// A setting is missing or unusable, e.g. the API key variable is unset.
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    /// The config file exists but cannot be used.
    ConfigurationFileError {
        path: String,
        reason: String,
    },
    /// A config value is outside its allowed range.
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },
    /// The scan report could not be written as JSON.
    SerializationError {
        reason: String,
    },
    SystemError {
        operation: String,
        reason: String,
    },
    /// Rejected command line input or a submission the session cannot take.
    UserInputError {
        input: String,
        expected: String,
        suggestion: String,
    },
    MultipleErrors {
        errors: Vec<LinkscanError>,
        context: String,
    },
}

impl LinkscanError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(str::to_string),
            suggestion: suggestion.map(str::to_string),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(str::to_string),
        }
    }

    pub fn user_input_error(input: &str, expected: &str, suggestion: &str) -> Self {
        Self::UserInputError {
            input: input.to_string(),
            expected: expected.to_string(),
            suggestion: suggestion.to_string(),
        }
    }

    /// True when the user can fix the cause and rerun the command.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::ConfigurationError { .. }
            | Self::ConfigurationFileError { .. }
            | Self::ValidationError { .. }
            | Self::UserInputError { .. } => true,
            Self::SerializationError { .. } | Self::SystemError { .. } => false,
            Self::MultipleErrors { errors, .. } => errors.iter().any(Self::is_recoverable),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationFileError { .. } | Self::SerializationError { .. } => ErrorSeverity::High,
            Self::ConfigurationError { .. } => ErrorSeverity::Medium,
            Self::ValidationError { .. } | Self::UserInputError { .. } => ErrorSeverity::Low,
            Self::MultipleErrors { errors, .. } => errors
                .iter()
                .map(Self::severity)
                .max()
                .unwrap_or(ErrorSeverity::Low),
        }
    }

    pub fn user_message(&self) -> String {
        let mut msg = String::new();
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                msg.push_str(message);
                if let Some(field) = field {
                    let _ = write!(msg, " [{}]", field);
                }
                if let Some(suggestion) = suggestion {
                    let _ = write!(msg, "\n💡 {}", suggestion);
                }
            }
            Self::ConfigurationFileError { path, reason } => {
                let _ = write!(msg, "Cannot use config file {}: {}\n💡 Fix the file or run 'linkscan init' to start over", path, reason);
            }
            Self::ValidationError { field, value, constraint, suggestion } => {
                let _ = write!(msg, "{} = '{}' {}", field, value, constraint);
                if let Some(suggestion) = suggestion {
                    let _ = write!(msg, "\n💡 {}", suggestion);
                }
            }
            Self::SerializationError { reason } => {
                let _ = write!(msg, "Could not write the scan report: {}", reason);
            }
            Self::SystemError { operation, reason } => {
                let _ = write!(msg, "Failed while {}: {}", operation, reason);
            }
            Self::UserInputError { input, expected, suggestion } => {
                let _ = write!(msg, "'{}' is not {}\n💡 {}", input, expected, suggestion);
            }
            Self::MultipleErrors { errors, context } => {
                let _ = writeln!(msg, "{} found {} problem(s):", context, errors.len());
                for (i, error) in errors.iter().enumerate() {
                    let _ = writeln!(msg, "  {}. {}", i + 1, error.user_message().replace('\n', "\n     "));
                }
            }
        }
        msg
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for LinkscanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.user_message())
    }
}

impl StdError for LinkscanError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

pub type LinkscanResult<T> = Result<T, LinkscanError>;

/// Reports a command failure on stderr.
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn handle_error(error: &LinkscanError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 Fix the problem above and run the command again");
        }
    }
}

pub trait ResultExt<T> {
    /// Names the operation on a `SystemError`; other errors pass through.
    fn with_operation(self, operation: &str) -> LinkscanResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<LinkscanError>,
{
    fn with_operation(self, operation: &str) -> LinkscanResult<T> {
        self.map_err(|e| match e.into() {
            LinkscanError::SystemError { reason, .. } => LinkscanError::SystemError {
                operation: operation.to_string(),
                reason,
            },
            other => other,
        })
    }
}

impl From<std::io::Error> for LinkscanError {
    fn from(error: std::io::Error) -> Self {
        Self::SystemError {
            operation: "file access".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for LinkscanError {
    fn from(error: serde_json::Error) -> Self {
        Self::SerializationError {
            reason: error.to_string(),
        }
    }
}
