//! Windows control set: minimize / maximize-or-restore / close.

use tracing::{debug, info};

use crate::controls::types::{ButtonView, Icon, WindowsButton};
use crate::window::{NativeWindow, RequestOutcome, Subscription, WindowRequest, WindowSlot};

/// State of the Windows caption buttons.
///
/// The maximized flag is refreshed on mount and on every resize
/// notification. The resize subscription is owned here and released
/// exactly once, on unmount or drop.
#[derive(Debug, Default)]
pub struct WindowsControls {
    maximized: bool,
    mounted: bool,
    resize_subscription: Option<Subscription>,
}

impl WindowsControls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount the control set and read the initial maximized state.
    ///
    /// Returns true when the window handle is available, meaning the host
    /// should now subscribe to resize notifications and hand the guard to
    /// [`attach_resize_subscription`](Self::attach_resize_subscription).
    pub fn mount<W: NativeWindow>(&mut self, slot: &mut WindowSlot<W>) -> bool {
        self.mounted = true;
        self.refresh(slot);
        debug!(
            event = "core.controls.windows_mounted",
            handle_ready = slot.is_ready(),
            maximized = self.maximized
        );
        slot.is_ready()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether the host still needs to subscribe to resize notifications.
    pub fn needs_resize_subscription(&self) -> bool {
        self.mounted && self.resize_subscription.is_none()
    }

    /// Take ownership of the resize subscription.
    ///
    /// A guard arriving after unmount is released immediately. A second
    /// guard replaces (and releases) the first.
    pub fn attach_resize_subscription(&mut self, subscription: Subscription) {
        if !self.mounted {
            debug!(
                event = "core.controls.resize_subscription_discarded",
                reason = "unmounted"
            );
            subscription.release();
            return;
        }
        if let Some(previous) = self.resize_subscription.replace(subscription) {
            previous.release();
        }
    }

    pub fn has_resize_subscription(&self) -> bool {
        self.resize_subscription.is_some()
    }

    /// Handle a resize notification: re-query the maximized state once.
    ///
    /// Returns true if the state was re-queried and the display should be
    /// updated. Notifications after unmount are ignored.
    pub fn on_resized<W: NativeWindow>(&mut self, slot: &mut WindowSlot<W>) -> bool {
        if !self.mounted {
            return false;
        }
        self.refresh(slot)
    }

    fn refresh<W: NativeWindow>(&mut self, slot: &mut WindowSlot<W>) -> bool {
        match slot.query_maximized() {
            Some(maximized) => {
                self.maximized = maximized;
                true
            }
            None => false,
        }
    }

    /// Release the resize subscription and stop accepting updates.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        if let Some(subscription) = self.resize_subscription.take() {
            subscription.release();
        }
        debug!(event = "core.controls.windows_unmounted");
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    pub fn request_for(&self, button: WindowsButton) -> WindowRequest {
        match button {
            WindowsButton::Minimize => WindowRequest::Minimize,
            WindowsButton::Maximize => WindowRequest::ToggleMaximize,
            WindowsButton::Close => WindowRequest::Close,
        }
    }

    /// Handle a click. A pending window slot makes this a no-op.
    ///
    /// The maximized flag is left alone; it changes on the next resize
    /// notification.
    pub fn click<W: NativeWindow>(
        &self,
        button: WindowsButton,
        slot: &mut WindowSlot<W>,
    ) -> Option<RequestOutcome> {
        let request = self.request_for(button);
        info!(
            event = "core.controls.windows_clicked",
            button = button.id(),
            request = %request
        );
        slot.dispatch(request)
    }

    pub fn maximize_icon(&self) -> Icon {
        if self.maximized {
            Icon::RestoreWin
        } else {
            Icon::MaximizeWin
        }
    }

    /// Buttons in display order. Windows icons are always visible.
    pub fn buttons(&self) -> [ButtonView<WindowsButton>; 3] {
        WindowsButton::ALL.map(|button| ButtonView {
            button,
            icon: Some(match button {
                WindowsButton::Minimize => Icon::MinimizeWin,
                WindowsButton::Maximize => self.maximize_icon(),
                WindowsButton::Close => Icon::CloseWin,
            }),
        })
    }
}
