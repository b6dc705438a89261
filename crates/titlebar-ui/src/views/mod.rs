//! View components for titlebar-ui.
//!
//! - `main_view` - Root view that stacks the title bar over the body
//! - `title_bar` - Title bar that picks a control set for the host OS
//! - `mac_controls` - Traffic-light buttons
//! - `windows_controls` - Caption buttons

pub mod mac_controls;
pub mod main_view;
pub mod title_bar;
pub mod windows_controls;

pub use main_view::MainView;
