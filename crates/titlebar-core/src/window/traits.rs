//! Native window capability trait.

use crate::window::errors::WindowError;

/// Interface the title bar needs from the native windowing layer.
///
/// Each host (gpui, the headless window used in tests) implements this
/// trait for its own window type. All operations are fallible; callers go
/// through [`WindowSlot`](crate::window::WindowSlot), which logs and
/// swallows failures.
///
/// The resize notification is not part of this trait: hosts hand the
/// control set a [`Subscription`](crate::window::Subscription) guard for
/// it instead, since delivery is tied to the host's event loop.
pub trait NativeWindow {
    /// Request the window be minimized.
    fn minimize(&mut self) -> Result<(), WindowError>;

    /// Maximize the window, or restore it if already maximized.
    fn toggle_maximize(&mut self) -> Result<(), WindowError>;

    /// Whether the window is currently maximized.
    fn is_maximized(&self) -> Result<bool, WindowError>;

    /// Request the window be closed.
    fn close(&mut self) -> Result<(), WindowError>;

    /// Whether the window is currently fullscreen.
    fn is_fullscreen(&self) -> Result<bool, WindowError>;

    /// Enter or leave fullscreen.
    fn set_fullscreen(&mut self, fullscreen: bool) -> Result<(), WindowError>;
}

impl<W: NativeWindow + ?Sized> NativeWindow for &mut W {
    fn minimize(&mut self) -> Result<(), WindowError> {
        (**self).minimize()
    }

    fn toggle_maximize(&mut self) -> Result<(), WindowError> {
        (**self).toggle_maximize()
    }

    fn is_maximized(&self) -> Result<bool, WindowError> {
        (**self).is_maximized()
    }

    fn close(&mut self) -> Result<(), WindowError> {
        (**self).close()
    }

    fn is_fullscreen(&self) -> Result<bool, WindowError> {
        (**self).is_fullscreen()
    }

    fn set_fullscreen(&mut self, fullscreen: bool) -> Result<(), WindowError> {
        (**self).set_fullscreen(fullscreen)
    }
}
