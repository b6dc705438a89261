//! Default values for configuration fields.

/// Title of the main window.
pub const DEFAULT_WINDOW_TITLE: &str = "Titlebar";

/// Initial window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 960.0;

/// Initial window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 640.0;

/// Directory holding config files, relative to the home or project dir.
pub const CONFIG_DIR_NAME: &str = ".titlebar";

/// Config file name inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.toml";
