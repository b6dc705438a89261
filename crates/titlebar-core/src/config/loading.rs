//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.titlebar/config.toml` (global user preferences)
//! 3. **Project config** - `./.titlebar/config.toml` (project-specific overrides)

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::config::types::{LoggingConfig, TitlebarConfig, TitlebarSection, WindowConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a file exists but cannot be read or parsed, or if
/// validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<TitlebarConfig, ConfigError> {
    let user_path = user_config_path()?;
    let project_path = project_config_path()?;
    load_hierarchy_from(&[user_path, project_path])
}

/// Load and merge config files in order; later files override earlier ones.
pub fn load_hierarchy_from(paths: &[PathBuf]) -> Result<TitlebarConfig, ConfigError> {
    let mut config = TitlebarConfig::default();

    for path in paths {
        match load_config_file(path) {
            Ok(file_config) => config = merge_configs(config, file_config),
            Err(e) if e.is_not_found() => {
                debug!(
                    event = "core.config.file_not_found",
                    path = %path.display()
                );
            }
            Err(e) => return Err(e),
        }
    }

    validate_config(&config)?;

    Ok(config)
}

/// Path of the user config file (`~/.titlebar/config.toml`).
pub fn user_config_path() -> Result<PathBuf, ConfigError> {
    let home_dir = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
    Ok(home_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Path of the project config file (`./.titlebar/config.toml`).
pub fn project_config_path() -> Result<PathBuf, ConfigError> {
    let cwd = std::env::current_dir().map_err(|source| ConfigError::ReadFailed {
        path: ".".to_string(),
        source,
    })?;
    Ok(cwd.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<TitlebarConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.display().to_string(),
        source,
    })?;
    let config: TitlebarConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    debug!(event = "core.config.file_loaded", path = %path.display());
    Ok(config)
}

/// Merge two configurations, with override_config taking precedence.
///
/// Optional fields are replaced only when the override sets them.
pub fn merge_configs(base: TitlebarConfig, override_config: TitlebarConfig) -> TitlebarConfig {
    TitlebarConfig {
        titlebar: TitlebarSection {
            pending_style: override_config
                .titlebar
                .pending_style
                .or(base.titlebar.pending_style),
            modifier_key: override_config
                .titlebar
                .modifier_key
                .or(base.titlebar.modifier_key),
            os_override: override_config
                .titlebar
                .os_override
                .or(base.titlebar.os_override),
        },
        window: WindowConfig {
            title: override_config.window.title.or(base.window.title),
            width: override_config.window.width.or(base.window.width),
            height: override_config.window.height.or(base.window.height),
        },
        logging: LoggingConfig {
            quiet: override_config.logging.quiet.or(base.logging.quiet),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::titlebar::PendingStyle;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_files_give_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_hierarchy_from(&[
            dir.path().join("user.toml"),
            dir.path().join("project.toml"),
        ])
        .unwrap();
        assert_eq!(config, TitlebarConfig::default());
    }

    #[test]
    fn test_project_overrides_user() {
        let dir = TempDir::new().unwrap();
        let user = write_config(
            &dir,
            "user.toml",
            r#"
            [titlebar]
            pending_style = "empty"
            modifier_key = "shift"

            [window]
            title = "User"
            "#,
        );
        let project = write_config(
            &dir,
            "project.toml",
            r#"
            [titlebar]
            modifier_key = "meta"
            "#,
        );

        let config = load_hierarchy_from(&[user, project]).unwrap();
        assert_eq!(config.titlebar.pending_style, Some(PendingStyle::Empty));
        assert_eq!(config.titlebar.modifier_key.as_deref(), Some("meta"));
        assert_eq!(config.window.title.as_deref(), Some("User"));
    }

    #[test]
    fn test_parse_error_fails() {
        let dir = TempDir::new().unwrap();
        let broken = write_config(&dir, "broken.toml", "[titlebar\npending_style =");

        let err = load_hierarchy_from(&[broken]).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }

    #[test]
    fn test_invalid_value_fails_validation() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "config.toml",
            r#"
            [titlebar]
            modifier_key = "fn"
            "#,
        );

        let err = load_hierarchy_from(&[path]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidModifierKey { .. }));
    }

    #[test]
    fn test_project_can_turn_quiet_off() {
        let dir = TempDir::new().unwrap();
        let user = write_config(
            &dir,
            "user.toml",
            r#"
            [logging]
            quiet = true
            "#,
        );
        let project = write_config(
            &dir,
            "project.toml",
            r#"
            [logging]
            quiet = false
            "#,
        );

        let config = load_hierarchy_from(&[user, project]).unwrap();
        assert_eq!(config.logging.quiet, Some(false));
        assert!(!config.logging.is_quiet());
    }

    #[test]
    fn test_quiet_kept_when_project_silent() {
        let mut base = TitlebarConfig::default();
        base.logging.quiet = Some(true);
        let merged = merge_configs(base, TitlebarConfig::default());
        assert!(merged.logging.is_quiet());
    }

    #[test]
    fn test_config_paths_end_with_file_name() {
        let project = project_config_path().unwrap();
        assert!(project.ends_with(".titlebar/config.toml"));
    }
}
