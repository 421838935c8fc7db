use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrillError {
    #[error("Invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status for a failed run; never zero.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl DrillError {
    pub fn invalid_input(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::Input,
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Short message meant for the terminal, without internal detail.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidInput { input, .. } => format!("'{}' is not a whole number", input),
            Self::IoError(e) => format!("Could not read or write: {}", e),
            Self::SerializationError(_) => "Could not render the result".to_string(),
            Self::ConfigValidationError { field, .. } => {
                format!("The configuration could not be read ({})", field)
            }
            Self::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not allowed for {}", value, field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidInput { .. } => {
                "Enter an integer such as 42 or -7, without letters or decimals".to_string()
            }
            Self::IoError(_) => "Check that the file exists and is readable".to_string(),
            Self::SerializationError(_) => "Try again with --format text".to_string(),
            Self::ConfigValidationError { .. } => {
                "Make sure the config file is valid TOML".to_string()
            }
            Self::InvalidConfigValueError { reason, .. } => reason.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DrillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_medium_severity() {
        let err = DrillError::invalid_input("abc", "not a number");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.to_string(), "Invalid input 'abc': not a number");
        assert!(err.user_friendly_message().contains("abc"));
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = DrillError::InvalidConfigValueError {
            field: "patterns.triangle_rows".to_string(),
            value: "0".to_string(),
            reason: "Value must be between 1 and 1000".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.recovery_suggestion(), "Value must be between 1 and 1000");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: DrillError = io.into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_every_failure_exits_non_zero() {
        let errors = [
            DrillError::invalid_input("x", "not a number"),
            DrillError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: "bad".to_string(),
            },
            DrillError::IoError(std::io::Error::new(std::io::ErrorKind::Other, "boom")),
        ];
        let codes: Vec<i32> = errors.iter().map(|e| e.severity().exit_code()).collect();
        assert_eq!(codes, vec![2, 1, 3]);
    }
}
