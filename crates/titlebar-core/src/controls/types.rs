/// Icons drawn inside control buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    CloseMac,
    MinimizeMac,
    EnterFullscreen,
    /// Zoom (maximize) while the modifier key is held.
    Expand,
    MinimizeWin,
    MaximizeWin,
    RestoreWin,
    CloseWin,
}

impl Icon {
    /// Glyph used to draw the icon with the UI font.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::CloseMac => "×",
            Icon::MinimizeMac => "−",
            Icon::EnterFullscreen => "⤢",
            Icon::Expand => "+",
            Icon::MinimizeWin => "─",
            Icon::MaximizeWin => "□",
            Icon::RestoreWin => "❐",
            Icon::CloseWin => "✕",
        }
    }
}

/// Buttons of the macOS control set, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacButton {
    Close,
    Minimize,
    Zoom,
}

impl MacButton {
    pub const ALL: [MacButton; 3] = [MacButton::Close, MacButton::Minimize, MacButton::Zoom];

    pub fn id(&self) -> &'static str {
        match self {
            MacButton::Close => "mac-close",
            MacButton::Minimize => "mac-minimize",
            MacButton::Zoom => "mac-zoom",
        }
    }
}

/// Buttons of the Windows control set, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowsButton {
    Minimize,
    Maximize,
    Close,
}

impl WindowsButton {
    pub const ALL: [WindowsButton; 3] = [
        WindowsButton::Minimize,
        WindowsButton::Maximize,
        WindowsButton::Close,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            WindowsButton::Minimize => "win-minimize",
            WindowsButton::Maximize => "win-maximize",
            WindowsButton::Close => "win-close",
        }
    }
}

/// What to draw for one button. `icon` is `None` when the icon is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonView<B> {
    pub button: B,
    pub icon: Option<Icon>,
}
