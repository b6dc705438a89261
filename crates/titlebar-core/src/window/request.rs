use std::fmt;

use crate::window::errors::WindowError;
use crate::window::traits::NativeWindow;

/// A request a control button issues against the window handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowRequest {
    Minimize,
    ToggleMaximize,
    Close,
    /// Query fullscreen state, then set the opposite.
    ToggleFullscreen,
    QueryMaximized,
}

/// What a completed request reported back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Done,
    /// Fullscreen state that was requested.
    Fullscreen(bool),
    Maximized(bool),
}

impl WindowRequest {
    pub fn execute<W: NativeWindow + ?Sized>(
        &self,
        window: &mut W,
    ) -> Result<RequestOutcome, WindowError> {
        match self {
            WindowRequest::Minimize => window.minimize().map(|_| RequestOutcome::Done),
            WindowRequest::ToggleMaximize => {
                window.toggle_maximize().map(|_| RequestOutcome::Done)
            }
            WindowRequest::Close => window.close().map(|_| RequestOutcome::Done),
            WindowRequest::ToggleFullscreen => {
                let target = !window.is_fullscreen()?;
                window.set_fullscreen(target)?;
                Ok(RequestOutcome::Fullscreen(target))
            }
            WindowRequest::QueryMaximized => window.is_maximized().map(RequestOutcome::Maximized),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WindowRequest::Minimize => "minimize",
            WindowRequest::ToggleMaximize => "toggle_maximize",
            WindowRequest::Close => "close",
            WindowRequest::ToggleFullscreen => "toggle_fullscreen",
            WindowRequest::QueryMaximized => "query_maximized",
        }
    }
}

impl fmt::Display for WindowRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
