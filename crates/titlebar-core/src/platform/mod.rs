//! Operating system identity and detection.

pub mod detection;
pub mod errors;
pub mod types;

pub use detection::{FixedOsInfo, HostOsInfo, OsInfo, detect_os, os_info_for};
pub use errors::PlatformError;
pub use types::OsType;
