//! # Configuration System
//!
//! Hierarchical TOML configuration for the title bar.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.titlebar/config.toml` (global user preferences)
//! 3. **Project config** - `./.titlebar/config.toml` (project-specific overrides)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.titlebar/config.toml
//! [titlebar]
//! pending_style = "empty"
//! modifier_key = "alt"
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use titlebar_core::config::TitlebarConfig;
//!
//! fn example() -> Result<(), titlebar_core::errors::ConfigError> {
//!     let config = TitlebarConfig::load_hierarchy()?;
//!     let settings = config.settings();
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{LoggingConfig, TitlebarConfig, TitlebarSection, WindowConfig};
pub use validation::validate_config;

use crate::controls::ModifierKey;
use crate::errors::ConfigError;
use crate::titlebar::TitlebarSettings;

impl TitlebarConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }

    /// Title bar settings with defaults applied.
    ///
    /// An unparseable modifier key falls back to the default; run
    /// [`validate`](Self::validate) first to reject it instead.
    pub fn settings(&self) -> TitlebarSettings {
        TitlebarSettings {
            pending_style: self.titlebar.pending_style.unwrap_or_default(),
            modifier_key: self
                .titlebar
                .modifier_key
                .as_deref()
                .and_then(|key| key.parse::<ModifierKey>().ok())
                .unwrap_or_default(),
        }
    }

    pub fn os_override(&self) -> Option<&str> {
        self.titlebar.os_override.as_deref()
    }

    pub fn window_title(&self) -> &str {
        self.window
            .title
            .as_deref()
            .unwrap_or(defaults::DEFAULT_WINDOW_TITLE)
    }

    /// Initial `(width, height)` in logical pixels.
    pub fn window_size(&self) -> (f32, f32) {
        (
            self.window.width.unwrap_or(defaults::DEFAULT_WINDOW_WIDTH),
            self.window.height.unwrap_or(defaults::DEFAULT_WINDOW_HEIGHT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::titlebar::PendingStyle;

    #[test]
    fn test_default_settings() {
        let config = TitlebarConfig::default();
        let settings = config.settings();
        assert_eq!(settings.pending_style, PendingStyle::Fallback);
        assert_eq!(settings.modifier_key, ModifierKey::Alt);
        assert_eq!(config.os_override(), None);
        assert_eq!(config.window_title(), "Titlebar");
        assert_eq!(config.window_size(), (960.0, 640.0));
    }

    #[test]
    fn test_settings_from_config() {
        let mut config = TitlebarConfig::default();
        config.titlebar.pending_style = Some(PendingStyle::Empty);
        config.titlebar.modifier_key = Some("ctrl".to_string());

        let settings = config.settings();
        assert_eq!(settings.pending_style, PendingStyle::Empty);
        assert_eq!(settings.modifier_key, ModifierKey::Control);
    }
}
