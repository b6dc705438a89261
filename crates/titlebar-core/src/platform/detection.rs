//! Host operating system detection.

use tracing::{debug, info};

use crate::errors::TitlebarError;
use crate::platform::errors::PlatformError;
use crate::platform::types::OsType;

/// Source of the host OS label.
///
/// Implementations must be callable from a background thread; detection
/// runs off the UI thread.
pub trait OsInfo: Send + Sync {
    /// Raw OS label, e.g. `"macos"`, `"windows"`, `"linux"`.
    fn os_type(&self) -> Result<String, PlatformError>;
}

/// Reports the OS this binary was compiled for.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostOsInfo;

impl OsInfo for HostOsInfo {
    fn os_type(&self) -> Result<String, PlatformError> {
        Ok(std::env::consts::OS.to_string())
    }
}

/// Always reports the same label. Backs the `os_override` config setting.
#[derive(Debug, Clone)]
pub struct FixedOsInfo {
    label: String,
}

impl FixedOsInfo {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl OsInfo for FixedOsInfo {
    fn os_type(&self) -> Result<String, PlatformError> {
        Ok(self.label.clone())
    }
}

/// Pick the OS-info source: the configured override if any, else the host.
pub fn os_info_for(os_override: Option<&str>) -> Box<dyn OsInfo> {
    match os_override {
        Some(label) => {
            info!(event = "core.platform.override_applied", os = label);
            Box::new(FixedOsInfo::new(label))
        }
        None => Box::new(HostOsInfo),
    }
}

/// Resolve the OS identity once.
///
/// Failures are returned for the caller to report and fall back on; the
/// call is never retried.
pub fn detect_os(info: &dyn OsInfo) -> Result<OsType, PlatformError> {
    debug!(event = "core.platform.detection_started");

    match info.os_type() {
        Ok(label) => {
            let os = OsType::from_label(&label);
            info!(event = "core.platform.detected", os = %os);
            Ok(os)
        }
        Err(e) => {
            debug!(
                event = "core.platform.detection_failed",
                error = %e,
                error_code = e.error_code()
            );
            Err(e)
        }
    }
}
