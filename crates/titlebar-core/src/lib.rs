//! titlebar-core: Core library for an OS-aware custom window title bar
//!
//! Detects the host operating system, selects the matching control set
//! (macOS traffic lights or Windows caption buttons) and drives window
//! operations through an abstract window handle. Rendering lives in
//! `titlebar-ui`.
//!
//! # Main Entry Points
//!
//! - [`titlebar`] - OS-aware control-set selection
//! - [`controls`] - macOS and Windows control-set state
//! - [`window`] - Window handle capability, slot and subscriptions
//! - [`platform`] - OS detection
//! - [`config`] - Configuration management

pub mod config;
pub mod controls;
pub mod errors;
pub mod events;
pub mod logging;
pub mod platform;
pub mod titlebar;
pub mod window;

// Re-export commonly used types at crate root for convenience
pub use config::TitlebarConfig;
pub use controls::{
    ButtonView, Icon, MacButton, MacControls, ModifierKey, ModifierState, WindowsButton,
    WindowsControls,
};
pub use errors::{ConfigError, TitlebarError, TitlebarResult};
pub use platform::{OsInfo, OsType, PlatformError, detect_os};
pub use titlebar::{
    ControlSet, ControlSetKind, Detection, PendingStyle, TitleBar, TitlebarSettings,
    select_control_set,
};
pub use window::{
    NativeWindow, RequestOutcome, Subscription, WindowError, WindowRequest, WindowSlot,
};

// Re-export logging initialization
pub use logging::init_logging;
