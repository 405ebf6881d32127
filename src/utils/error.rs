use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    // Display must stay the bare word "Error"; the rejected-payload path
    // surfaces nothing else.
    #[error("Error")]
    PayloadRejected,

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' - {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown demo: {name}")]
    UnknownDemo { name: String },
}

pub type Result<T> = std::result::Result<T, DemoError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
}

impl DemoError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DemoError::IoError(_) => ErrorSeverity::Critical,
            DemoError::SerializationError(_) => ErrorSeverity::High,
            DemoError::PayloadRejected => ErrorSeverity::High,
            DemoError::ConfigValidationError { .. } => ErrorSeverity::Medium,
            DemoError::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
            DemoError::UnknownDemo { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            DemoError::IoError(_) => ErrorCategory::Io,
            DemoError::SerializationError(_) | DemoError::PayloadRejected => ErrorCategory::Data,
            DemoError::ConfigValidationError { .. }
            | DemoError::InvalidConfigValueError { .. }
            | DemoError::UnknownDemo { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DemoError::IoError(_) => "Check that the file exists and is readable",
            DemoError::SerializationError(_) => {
                "Check that the document is valid JSON with the expected fields"
            }
            DemoError::PayloadRejected => {
                "The payload reported success=false; inspect the upstream document"
            }
            DemoError::ConfigValidationError { .. } => "Fix the configuration file and run again",
            DemoError::InvalidConfigValueError { .. } => {
                "Correct the named field; --help lists accepted values"
            }
            DemoError::UnknownDemo { .. } => {
                "Use one of the registered demo names; --help lists them"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::IoError(e) => format!("Could not read a required file: {}", e),
            DemoError::SerializationError(e) => format!("Document could not be parsed: {}", e),
            DemoError::PayloadRejected => "The payload was rejected".to_string(),
            DemoError::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            DemoError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => {
                format!("'{}' is not a valid value for {} ({})", value, field, reason)
            }
            DemoError::UnknownDemo { name } => format!("No demo is registered as '{}'", name),
        }
    }
}
