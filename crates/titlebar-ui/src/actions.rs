//! Business logic handlers for titlebar-ui.
//!
//! Blocking work that runs on the background executor.

use titlebar_core::platform::os_info_for;
use titlebar_core::{OsType, PlatformError};

/// Resolve the host OS, honoring a configured override.
///
/// Runs once per title bar; the result is handed back to the view.
pub fn detect_os(os_override: Option<String>) -> Result<OsType, PlatformError> {
    tracing::debug!(
        event = "ui.detect_os.started",
        os_override = ?os_override
    );

    let info = os_info_for(os_override.as_deref());
    let result = titlebar_core::detect_os(info.as_ref());

    match &result {
        Ok(os) => tracing::debug!(event = "ui.detect_os.completed", os = %os),
        Err(e) => tracing::debug!(event = "ui.detect_os.failed", error = %e),
    }

    result
}
