use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrillError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid input '{value}' for {field}: {reason}")]
    InvalidInputError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DrillError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            DrillError::IoError(e) => format!("Could not read a file: {}", e),
            DrillError::ConfigParseError(e) => {
                format!("The configuration file is not valid TOML: {}", e)
            }
            DrillError::SerializationError(e) => format!("Could not render output: {}", e),
            DrillError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value `{}` is invalid: {}", field, reason)
            }
            DrillError::InvalidInputError { field, value, reason } => {
                format!("Input `{}` = {} rejected: {}", field, value, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DrillError::IoError(_) => "Check that the --config path exists and is readable",
            DrillError::ConfigParseError(_) => {
                "Fix the TOML syntax; every section and key is optional"
            }
            DrillError::SerializationError(_) => "Retry without --json",
            DrillError::InvalidConfigValueError { .. } => {
                "Make sure each lower threshold is strictly below its upper threshold"
            }
            DrillError::InvalidInputError { .. } => "Pass finite numbers for every reading",
        }
    }

    /// Process exit status used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            DrillError::InvalidInputError { .. } => 2,
            DrillError::SerializationError(_) => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, DrillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_map_to_usage_exit_code() {
        let err = DrillError::InvalidInputError {
            field: "cms".to_string(),
            value: "NaN".to_string(),
            reason: "must be finite".to_string(),
        };
        assert_eq!(err.exit_code(), 2);
        assert!(err.user_friendly_message().contains("cms"));
        assert_eq!(err.to_string(), "Invalid input 'NaN' for cms: must be finite");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: DrillError = io.into();
        assert!(matches!(err, DrillError::IoError(_)));
        assert_eq!(err.exit_code(), 1);
    }
}
