use std::error::Error;

/// Base trait for all titlebar errors
pub trait TitlebarError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type TitlebarResult<T> = Result<T, Box<dyn TitlebarError>>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Invalid modifier key '{key}'. Supported keys: alt, shift, control, meta")]
    InvalidModifierKey { key: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Could not find home directory")]
    HomeDirNotFound,
}

impl ConfigError {
    /// True when the error only means the config file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigError::ReadFailed { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

impl TitlebarError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ReadFailed { .. } => "CONFIG_READ_FAILED",
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidModifierKey { .. } => "INVALID_MODIFIER_KEY",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            ConfigError::HomeDirNotFound => "HOME_DIR_NOT_FOUND",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigParseError { .. }
                | ConfigError::InvalidModifierKey { .. }
                | ConfigError::InvalidConfiguration { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titlebar_result() {
        let _result: TitlebarResult<i32> = Ok(42);
    }

    #[test]
    fn test_invalid_modifier_key_display() {
        let error = ConfigError::InvalidModifierKey {
            key: "hyper".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid modifier key 'hyper'. Supported keys: alt, shift, control, meta"
        );
        assert_eq!(error.error_code(), "INVALID_MODIFIER_KEY");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_config_parse_error() {
        let error = ConfigError::ConfigParseError {
            path: "/tmp/config.toml".to_string(),
            message: "invalid TOML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse config file '/tmp/config.toml': invalid TOML syntax"
        );
        assert_eq!(error.error_code(), "CONFIG_PARSE_ERROR");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_read_failed_not_found() {
        let error = ConfigError::ReadFailed {
            path: "/missing/config.toml".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(error.is_not_found());
        assert!(!error.is_user_error());

        let denied = ConfigError::ReadFailed {
            path: "/locked/config.toml".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(!denied.is_not_found());
    }
}
