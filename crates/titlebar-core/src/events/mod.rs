use tracing::{error, info};

use crate::errors::TitlebarError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_shutdown() {
    info!(event = "core.app.shutdown_started");
}

pub fn log_app_error(error: &dyn TitlebarError) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_code = error.error_code(),
        user_error = error.is_user_error()
    );
}
