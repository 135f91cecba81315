use thiserror::Error;

#[derive(Error, Debug)]
pub enum AstroError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

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

    #[error("Malformed birth date: {value}")]
    InvalidDate { value: String },

    #[error("LLM response error: {message}")]
    LlmResponseError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Storage,
    Configuration,
    Input,
    Upstream,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AstroError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AstroError::ApiError(_) => ErrorCategory::Network,
            AstroError::IoError(_) | AstroError::SerializationError(_) => ErrorCategory::Storage,
            AstroError::ConfigError { .. } | AstroError::ConfigValidationError { .. } => {
                ErrorCategory::Configuration
            }
            AstroError::InvalidConfigValueError { .. } | AstroError::InvalidDate { .. } => {
                ErrorCategory::Input
            }
            AstroError::LlmResponseError { .. } => ErrorCategory::Upstream,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 遠端問答失敗時仍可退回規則式回答
            ErrorCategory::Network | ErrorCategory::Upstream => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AstroError::ApiError(_) => "Check your network connection and the LLM base URL",
            AstroError::IoError(_) => "Check that the data directory exists and is writable",
            AstroError::SerializationError(_) => "The stored data may be corrupted; regenerate it",
            AstroError::ConfigError { .. } | AstroError::ConfigValidationError { .. } => {
                "Review the TOML configuration file"
            }
            AstroError::InvalidConfigValueError { .. } => {
                "Use YYYY-MM-DD for dates, HH:MM for times and ±HH:MM for offsets"
            }
            AstroError::InvalidDate { .. } => "Enter the birth date as YYYY-MM-DD",
            AstroError::LlmResponseError { .. } => {
                "Verify the API key and model name, or run without a key for offline answers"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AstroError::ApiError(_) => "Could not reach the answer service.".to_string(),
            AstroError::IoError(e) => format!("Could not read or write local data: {}", e),
            AstroError::SerializationError(_) => "Could not encode or decode data.".to_string(),
            AstroError::ConfigError { message } => format!("Configuration problem: {}", message),
            AstroError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            AstroError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            AstroError::InvalidDate { value } => format!("'{}' is not a valid birth date", value),
            AstroError::LlmResponseError { message } => {
                format!("The answer service returned an error: {}", message)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AstroError>;
