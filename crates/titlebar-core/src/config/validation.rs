//! Configuration validation logic.

use crate::config::types::TitlebarConfig;
use crate::controls::ModifierKey;
use crate::errors::ConfigError;

/// Validate a TitlebarConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - `modifier_key`, if set, must be one of alt, shift, control, meta
/// - `os_override`, if set, must not be blank
/// - Window width and height, if set, must be positive
pub fn validate_config(config: &TitlebarConfig) -> Result<(), ConfigError> {
    if let Some(ref key) = config.titlebar.modifier_key {
        key.parse::<ModifierKey>()?;
    }

    if let Some(ref os) = config.titlebar.os_override
        && os.trim().is_empty()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "os_override must not be empty".to_string(),
        });
    }

    for (name, value) in [
        ("width", config.window.width),
        ("height", config.window.height),
    ] {
        if let Some(value) = value
            && !(value.is_finite() && value > 0.0)
        {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("window {name} must be a positive number, got {value}"),
            });
        }
    }

    Ok(())
}
