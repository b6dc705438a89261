use crate::errors::TitlebarError;

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("Failed to detect operating system: {message}")]
    DetectionFailed { message: String },
}

impl TitlebarError for PlatformError {
    fn error_code(&self) -> &'static str {
        match self {
            PlatformError::DetectionFailed { .. } => "OS_DETECTION_FAILED",
        }
    }
}
