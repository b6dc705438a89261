//! Configuration type definitions.
//!
//! These types are deserialized from TOML config files. Every field is
//! optional so that a project file only overrides what it names.
//!
//! # Example Configuration
//!
//! ```toml
//! [titlebar]
//! pending_style = "empty"
//! modifier_key = "alt"
//! os_override = "macos"
//!
//! [window]
//! title = "My App"
//! width = 1024
//! height = 720
//!
//! [logging]
//! quiet = false
//! ```

use serde::{Deserialize, Serialize};

use crate::titlebar::PendingStyle;

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.titlebar/config.toml`
/// 2. Project config: `./.titlebar/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TitlebarConfig {
    /// Control-set behavior
    #[serde(default)]
    pub titlebar: TitlebarSection,

    /// Main window geometry and title
    #[serde(default)]
    pub window: WindowConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[titlebar]` section.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TitlebarSection {
    /// What to render before the OS is known. Default: `fallback`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_style: Option<PendingStyle>,

    /// Key that switches the macOS zoom button from fullscreen to
    /// maximize. One of: alt, shift, control, meta. Default: `alt`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier_key: Option<String>,

    /// Force an OS label instead of detecting the host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_override: Option<String>,
}

/// `[window]` section.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct WindowConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Initial width in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    /// Initial height in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

/// `[logging]` section.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LoggingConfig {
    /// Only emit error-level events. Default: `false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiet: Option<bool>,
}

impl LoggingConfig {
    pub fn is_quiet(&self) -> bool {
        self.quiet.unwrap_or(false)
    }
}
