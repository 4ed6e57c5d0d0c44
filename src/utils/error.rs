use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorldGenError {
    #[error("Invalid universal code '{value}': not an integer or a code character")]
    InvalidCode { value: char },

    #[error("Universal code out of range: {value} (expected 0-33)")]
    CodeOutOfRange { value: i64 },

    #[error("Invalid argument '{field}' = {value}: {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Tech level table has no '{key}' entry for {attribute}")]
    MissingModifier { attribute: String, key: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Encoding,
    Configuration,
    InvalidArgument,
    Io,
}

impl WorldGenError {
    pub fn invalid_argument(field: &str, value: impl ToString, reason: &str) -> Self {
        Self::InvalidArgument {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidCode { .. } | Self::CodeOutOfRange { .. } => ErrorCategory::Encoding,
            Self::InvalidArgument { .. } => ErrorCategory::InvalidArgument,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::Io,
            Self::MissingModifier { .. }
            | Self::CsvError(_)
            | Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Encoding => format!("Could not encode world profile: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::InvalidArgument => format!("Invalid input: {}", self),
            ErrorCategory::Io => format!("I/O failure: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::MissingModifier { .. } => {
                "Add the missing column to the tech level table, or drop --tech-table to use the built-in table"
            }
            Self::CsvError(_) => "Check that the tech level table is a comma-separated file with an 'attribute' header",
            Self::IoError(_) => "Check that the file exists and is readable",
            _ => match self.category() {
                ErrorCategory::Configuration => "Review the configuration file and command-line flags",
                ErrorCategory::InvalidArgument => "Pass values inside the documented ranges",
                ErrorCategory::Encoding => "Universal codes cover 0-33 and the characters 0-9, A-Z without I and O",
                ErrorCategory::Io => "Retry the command",
            },
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::InvalidArgument => 2,
            ErrorCategory::Configuration => 3,
            ErrorCategory::Encoding | ErrorCategory::Io => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, WorldGenError>;
