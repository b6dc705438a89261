use crate::errors::TitlebarError;
use crate::window::types::WindowOp;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Window operation '{operation}' failed: {message}")]
    OperationFailed { operation: WindowOp, message: String },

    #[error("Window has already been closed")]
    Closed,
}

impl TitlebarError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::OperationFailed { .. } => "WINDOW_OPERATION_FAILED",
            WindowError::Closed => "WINDOW_CLOSED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_failed_display() {
        let error = WindowError::OperationFailed {
            operation: WindowOp::SetFullscreen,
            message: "compositor refused".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Window operation 'set-fullscreen' failed: compositor refused"
        );
        assert_eq!(error.error_code(), "WINDOW_OPERATION_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_closed_display() {
        let error = WindowError::Closed;
        assert_eq!(error.to_string(), "Window has already been closed");
        assert_eq!(error.error_code(), "WINDOW_CLOSED");
    }
}
