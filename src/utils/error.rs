use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZooError {
    #[error("Unknown record type: {tag}")]
    UnknownType { tag: String },

    #[error("Missing field `{field}` for {tag}")]
    MissingField { tag: String, field: String },

    #[error("Unexpected field `{field}` for {tag}")]
    UnexpectedField { tag: String, field: String },

    #[error("Invalid field `{field}` for {tag}: {reason}")]
    InvalidField {
        tag: String,
        field: String,
        reason: String,
    },

    #[error("Malformed zoo document: {message}")]
    MalformedDocument { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Storage,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ZooError {
    pub fn malformed(message: impl Into<String>) -> Self {
        ZooError::MalformedDocument {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ZooError::UnknownType { .. }
            | ZooError::MissingField { .. }
            | ZooError::UnexpectedField { .. }
            | ZooError::InvalidField { .. }
            | ZooError::MalformedDocument { .. }
            | ZooError::SerializationError(_) => ErrorCategory::Data,
            ZooError::IoError(_) => ErrorCategory::Storage,
            ZooError::ConfigError { .. } | ZooError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Config => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ZooError::UnknownType { tag } => {
                format!("The saved zoo contains an unknown kind of record: '{}'", tag)
            }
            ZooError::MissingField { tag, field } => {
                format!("A {} record in the saved zoo has no '{}'", tag, field)
            }
            ZooError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "The zoo data file could not be found".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ZooError::UnknownType { .. } => {
                "Fix the record's `type`, or load with --on-unknown-type skip"
            }
            ZooError::MissingField { .. }
            | ZooError::UnexpectedField { .. }
            | ZooError::InvalidField { .. } => "Correct the record's fields in the data file",
            ZooError::MalformedDocument { .. } | ZooError::SerializationError(_) => {
                "The data file must be a JSON object with `animals` and `staff` arrays"
            }
            ZooError::IoError(_) => "Check that the data directory exists and is writable",
            ZooError::ConfigError { .. } | ZooError::InvalidConfigValueError { .. } => {
                "Check the configuration file and flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ZooError>;
