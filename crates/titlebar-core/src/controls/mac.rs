//! macOS control set: close / minimize / zoom traffic lights.

use tracing::{debug, info};

use crate::controls::keys::{KeyTracker, ModifierKey, ModifierState};
use crate::controls::types::{ButtonView, Icon, MacButton};
use crate::window::{NativeWindow, RequestOutcome, WindowRequest, WindowSlot};

/// State of the macOS button row.
///
/// Icons stay hidden until the pointer hovers the row. The zoom button
/// toggles maximize while the modifier key is held and fullscreen
/// otherwise.
#[derive(Debug, Clone)]
pub struct MacControls {
    modifier: KeyTracker,
    hovering: bool,
    mounted: bool,
}

impl MacControls {
    pub fn new(modifier_key: ModifierKey) -> Self {
        Self {
            modifier: KeyTracker::new(modifier_key),
            hovering: false,
            mounted: false,
        }
    }

    /// Start listening for modifier key events.
    pub fn mount(&mut self) {
        self.mounted = true;
        self.modifier.start();
        debug!(
            event = "core.controls.mac_mounted",
            modifier_key = %self.modifier.key()
        );
    }

    /// Stop listening and drop transient state.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.modifier.stop();
        self.hovering = false;
        debug!(event = "core.controls.mac_unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn is_modifier_held(&self) -> bool {
        self.modifier.is_pressed()
    }

    /// Pointer entered (`true`) or left (`false`) the button row.
    /// Returns true if the display needs updating.
    pub fn set_hovering(&mut self, hovering: bool) -> bool {
        if !self.mounted || self.hovering == hovering {
            return false;
        }
        self.hovering = hovering;
        true
    }

    /// Returns true if the display needs updating.
    pub fn key_down(&mut self, key: &str) -> bool {
        self.modifier.key_down(key)
    }

    /// Returns true if the display needs updating.
    pub fn key_up(&mut self, key: &str) -> bool {
        self.modifier.key_up(key)
    }

    /// Returns true if the display needs updating.
    pub fn modifiers_changed(&mut self, state: ModifierState) -> bool {
        self.modifier.modifiers_changed(state)
    }

    /// Request the zoom button issues right now.
    pub fn zoom_request(&self) -> WindowRequest {
        if self.is_modifier_held() {
            WindowRequest::ToggleMaximize
        } else {
            WindowRequest::ToggleFullscreen
        }
    }

    pub fn request_for(&self, button: MacButton) -> WindowRequest {
        match button {
            MacButton::Close => WindowRequest::Close,
            MacButton::Minimize => WindowRequest::Minimize,
            MacButton::Zoom => self.zoom_request(),
        }
    }

    /// Handle a click. A pending window slot makes this a no-op.
    pub fn click<W: NativeWindow>(
        &self,
        button: MacButton,
        slot: &mut WindowSlot<W>,
    ) -> Option<RequestOutcome> {
        let request = self.request_for(button);
        info!(
            event = "core.controls.mac_clicked",
            button = button.id(),
            request = %request
        );
        slot.dispatch(request)
    }

    pub fn zoom_icon(&self) -> Icon {
        if self.is_modifier_held() {
            Icon::Expand
        } else {
            Icon::EnterFullscreen
        }
    }

    fn icon_for(&self, button: MacButton) -> Icon {
        match button {
            MacButton::Close => Icon::CloseMac,
            MacButton::Minimize => Icon::MinimizeMac,
            MacButton::Zoom => self.zoom_icon(),
        }
    }

    /// Buttons in display order with their visible icons.
    pub fn buttons(&self) -> [ButtonView<MacButton>; 3] {
        MacButton::ALL.map(|button| ButtonView {
            button,
            icon: self.hovering.then(|| self.icon_for(button)),
        })
    }
}
