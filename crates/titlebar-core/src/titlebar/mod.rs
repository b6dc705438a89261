//! OS-aware title bar.
//!
//! Resolves the host OS once and keeps exactly one control set mounted,
//! chosen by an exhaustive match over [`ControlSetKind`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::controls::{MacControls, ModifierKey, WindowsControls};
use crate::errors::TitlebarError;
use crate::platform::{OsType, PlatformError};
use crate::window::{NativeWindow, Subscription, WindowSlot};

/// What to show while the OS identity is still being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PendingStyle {
    /// Show the fallback (Windows) control set right away.
    #[default]
    Fallback,
    /// Show no controls until the OS identity is known.
    Empty,
}

/// Settings the title bar is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TitlebarSettings {
    pub pending_style: PendingStyle,
    pub modifier_key: ModifierKey,
}

/// Progress of OS identity resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    Pending,
    Resolved(OsType),
    Failed,
}

/// Closed set of control sets the title bar can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlSetKind {
    Mac,
    Windows,
}

/// The mounted control set.
#[derive(Debug)]
pub enum ControlSet {
    Mac(MacControls),
    Windows(WindowsControls),
}

impl ControlSet {
    pub fn kind(&self) -> ControlSetKind {
        match self {
            ControlSet::Mac(_) => ControlSetKind::Mac,
            ControlSet::Windows(_) => ControlSetKind::Windows,
        }
    }

    fn unmount(&mut self) {
        match self {
            ControlSet::Mac(controls) => controls.unmount(),
            ControlSet::Windows(controls) => controls.unmount(),
        }
    }
}

/// Choose the control set for a detection state.
///
/// `macos` selects the macOS set. Windows, any other label and failures
/// select the Windows set. While pending, the choice follows `pending`.
pub fn select_control_set(detection: &Detection, pending: PendingStyle) -> Option<ControlSetKind> {
    match detection {
        Detection::Resolved(OsType::MacOs) => Some(ControlSetKind::Mac),
        Detection::Resolved(OsType::Windows | OsType::Other(_)) | Detection::Failed => {
            Some(ControlSetKind::Windows)
        }
        Detection::Pending => match pending {
            PendingStyle::Fallback => Some(ControlSetKind::Windows),
            PendingStyle::Empty => None,
        },
    }
}

/// The title bar: detection state plus the single mounted control set.
#[derive(Debug)]
pub struct TitleBar {
    settings: TitlebarSettings,
    detection: Detection,
    active: Option<ControlSet>,
}

impl TitleBar {
    pub fn new(settings: TitlebarSettings) -> Self {
        Self {
            settings,
            detection: Detection::Pending,
            active: None,
        }
    }

    pub fn settings(&self) -> TitlebarSettings {
        self.settings
    }

    pub fn detection(&self) -> &Detection {
        &self.detection
    }

    /// Mount the control set selected for the current detection state.
    ///
    /// Returns the kind that was newly mounted, if any.
    pub fn mount<W: NativeWindow>(&mut self, slot: &mut WindowSlot<W>) -> Option<ControlSetKind> {
        self.sync(slot)
    }

    /// Apply the outcome of OS detection and swap control sets if needed.
    ///
    /// Only the first resolution is applied. Returns the kind that was
    /// newly mounted, if the selection changed.
    pub fn resolve<W: NativeWindow>(
        &mut self,
        result: Result<OsType, PlatformError>,
        slot: &mut WindowSlot<W>,
    ) -> Option<ControlSetKind> {
        if self.detection != Detection::Pending {
            debug!(
                event = "core.titlebar.resolve_ignored",
                reason = "already_resolved"
            );
            return None;
        }

        self.detection = match result {
            Ok(os) => {
                info!(event = "core.titlebar.os_resolved", os = %os);
                Detection::Resolved(os)
            }
            Err(e) => {
                warn!(
                    event = "core.titlebar.os_detection_failed",
                    error = %e,
                    error_code = e.error_code(),
                    "Falling back to default control set"
                );
                Detection::Failed
            }
        };

        self.sync(slot)
    }

    fn sync<W: NativeWindow>(&mut self, slot: &mut WindowSlot<W>) -> Option<ControlSetKind> {
        let wanted = select_control_set(&self.detection, self.settings.pending_style);
        let current = self.active.as_ref().map(ControlSet::kind);
        if wanted == current {
            return None;
        }

        if let Some(mut previous) = self.active.take() {
            previous.unmount();
        }

        let kind = wanted?;
        let control_set = match kind {
            ControlSetKind::Mac => {
                let mut controls = MacControls::new(self.settings.modifier_key);
                controls.mount();
                ControlSet::Mac(controls)
            }
            ControlSetKind::Windows => {
                let mut controls = WindowsControls::new();
                controls.mount(slot);
                ControlSet::Windows(controls)
            }
        };
        info!(event = "core.titlebar.control_set_mounted", kind = ?kind);
        self.active = Some(control_set);
        Some(kind)
    }

    pub fn selected(&self) -> Option<ControlSetKind> {
        self.active.as_ref().map(ControlSet::kind)
    }

    pub fn controls(&self) -> Option<&ControlSet> {
        self.active.as_ref()
    }

    pub fn mac(&self) -> Option<&MacControls> {
        match &self.active {
            Some(ControlSet::Mac(controls)) => Some(controls),
            _ => None,
        }
    }

    pub fn mac_mut(&mut self) -> Option<&mut MacControls> {
        match &mut self.active {
            Some(ControlSet::Mac(controls)) => Some(controls),
            _ => None,
        }
    }

    pub fn windows(&self) -> Option<&WindowsControls> {
        match &self.active {
            Some(ControlSet::Windows(controls)) => Some(controls),
            _ => None,
        }
    }

    pub fn windows_mut(&mut self) -> Option<&mut WindowsControls> {
        match &mut self.active {
            Some(ControlSet::Windows(controls)) => Some(controls),
            _ => None,
        }
    }

    /// Whether the mounted set is waiting for a resize subscription.
    pub fn needs_resize_subscription(&self) -> bool {
        self.windows()
            .is_some_and(WindowsControls::needs_resize_subscription)
    }

    /// Hand a resize subscription to the mounted Windows set. Released
    /// immediately if no Windows set is mounted.
    pub fn attach_resize_subscription(&mut self, subscription: Subscription) {
        match self.windows_mut() {
            Some(controls) => controls.attach_resize_subscription(subscription),
            None => subscription.release(),
        }
    }

    /// Forward a resize notification. Returns true if the display should
    /// be updated.
    pub fn on_resized<W: NativeWindow>(&mut self, slot: &mut WindowSlot<W>) -> bool {
        self.windows_mut()
            .is_some_and(|controls| controls.on_resized(slot))
    }

    /// Unmount whatever is mounted.
    pub fn unmount(&mut self) {
        if let Some(mut control_set) = self.active.take() {
            control_set.unmount();
        }
    }
}

impl Drop for TitleBar {
    fn drop(&mut self) {
        self.unmount();
    }
}
