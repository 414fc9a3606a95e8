use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl LookupError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            LookupError::HttpClientError(_) => {
                "Could not set up the HTTP client for the order service".to_string()
            }
            LookupError::IoError(e) => format!("File or terminal access failed: {}", e),
            LookupError::ConfigError { message } => format!("Configuration problem: {}", message),
            LookupError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            LookupError::ConfigValidationError { field, message } => {
                format!("Configuration file problem in '{}': {}", field, message)
            }
            LookupError::ValidationError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LookupError::HttpClientError(_) => "Check the TLS setup and the configured timeout",
            LookupError::IoError(_) => "Check that the file exists and is readable",
            LookupError::ConfigError { .. }
            | LookupError::InvalidConfigValueError { .. }
            | LookupError::ConfigValidationError { .. } => {
                "Fix --base-url / --timeout-seconds or the [service] section of the config file"
            }
            LookupError::ValidationError { .. } => "Enter a non-empty OrderUID",
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message_names_field() {
        let err = LookupError::InvalidConfigValueError {
            field: "service.base_url".to_string(),
            value: "nope".to_string(),
            reason: "Invalid URL format".to_string(),
        };

        assert!(err.to_string().contains("service.base_url"));
        assert!(err.user_friendly_message().contains("Invalid URL format"));
    }

    #[test]
    fn test_io_error_converts() {
        fn open() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here/order-lookup.toml")?)
        }

        let err = open().unwrap_err();
        assert!(matches!(err, LookupError::IoError(_)));
        assert_eq!(
            err.recovery_suggestion(),
            "Check that the file exists and is readable"
        );
    }
}
