use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreetError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Output sink error: {message}")]
    SinkError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
    Serialization,
    Sink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GreetError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GreetError::IoError(_) => ErrorCategory::Io,
            GreetError::SerializationError(_) => ErrorCategory::Serialization,
            GreetError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            GreetError::SinkError { .. } => ErrorCategory::Sink,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GreetError::IoError(_) => ErrorSeverity::High,
            GreetError::SerializationError(_) => ErrorSeverity::High,
            GreetError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            GreetError::SinkError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GreetError::IoError(e) => format!("Could not write the greeting: {}", e),
            GreetError::SerializationError(e) => {
                format!("Could not encode the greeting as JSON: {}", e)
            }
            GreetError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem with '{}': {}", field, reason)
            }
            GreetError::SinkError { message } => format!("The output sink failed: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            GreetError::IoError(_) => {
                "Check that the output location exists and is writable".to_string()
            }
            GreetError::SerializationError(_) => "Re-run without --json".to_string(),
            GreetError::InvalidConfigValueError { field, .. } => {
                format!("Adjust the '{}' flag and try again", field)
            }
            GreetError::SinkError { .. } => {
                "Re-run the command; if this persists the sink is misconfigured".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GreetError>;
