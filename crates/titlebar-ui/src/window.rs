//! Bridge between GPUI windows and the title bar's window capability.

use gpui::{AnyWindowHandle, Window};
use titlebar_core::{NativeWindow, WindowError, WindowSlot};

/// Borrowed GPUI window exposed as a [`NativeWindow`].
///
/// Built per event from the `&mut Window` GPUI passes to handlers, so it
/// never outlives the callback.
pub struct GpuiWindow<'a> {
    window: &'a mut Window,
}

impl<'a> GpuiWindow<'a> {
    pub fn new(window: &'a mut Window) -> Self {
        Self { window }
    }
}

impl NativeWindow for GpuiWindow<'_> {
    fn minimize(&mut self) -> Result<(), WindowError> {
        self.window.minimize_window();
        Ok(())
    }

    fn toggle_maximize(&mut self) -> Result<(), WindowError> {
        self.window.zoom_window();
        Ok(())
    }

    fn is_maximized(&self) -> Result<bool, WindowError> {
        Ok(self.window.is_maximized())
    }

    fn close(&mut self) -> Result<(), WindowError> {
        self.window.remove_window();
        Ok(())
    }

    fn is_fullscreen(&self) -> Result<bool, WindowError> {
        Ok(self.window.is_fullscreen())
    }

    fn set_fullscreen(&mut self, fullscreen: bool) -> Result<(), WindowError> {
        // GPUI only exposes a toggle
        if self.window.is_fullscreen() != fullscreen {
            self.window.toggle_fullscreen();
        }
        Ok(())
    }
}

/// Slot for the current event.
///
/// Ready only once the view has recorded its window handle and the handle
/// matches the window delivering the event.
pub fn slot_for<'a>(
    handle: Option<AnyWindowHandle>,
    window: &'a mut Window,
) -> WindowSlot<GpuiWindow<'a>> {
    match handle {
        Some(handle) if handle == window.window_handle() => {
            WindowSlot::ready(GpuiWindow::new(window))
        }
        _ => WindowSlot::pending(),
    }
}
