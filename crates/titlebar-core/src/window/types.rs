use std::fmt;

/// Operations the native windowing layer exposes to the title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowOp {
    Minimize,
    ToggleMaximize,
    IsMaximized,
    Close,
    IsFullscreen,
    SetFullscreen,
    OnResized,
}

impl WindowOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowOp::Minimize => "minimize",
            WindowOp::ToggleMaximize => "toggle-maximize",
            WindowOp::IsMaximized => "is-maximized",
            WindowOp::Close => "close",
            WindowOp::IsFullscreen => "is-fullscreen",
            WindowOp::SetFullscreen => "set-fullscreen",
            WindowOp::OnResized => "on-resized",
        }
    }
}

impl fmt::Display for WindowOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
