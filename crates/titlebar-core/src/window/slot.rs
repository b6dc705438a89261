use tracing::{debug, warn};

use crate::errors::TitlebarError;
use crate::window::request::{RequestOutcome, WindowRequest};
use crate::window::traits::NativeWindow;

/// The current window handle as seen by a control set.
///
/// The handle starts out pending until the host bridge hands one over.
/// Every request against a pending slot is a no-op, so call sites never
/// check for the handle themselves.
#[derive(Debug)]
pub struct WindowSlot<W> {
    window: Option<W>,
}

impl<W> WindowSlot<W> {
    /// A slot whose handle has not been obtained yet.
    pub fn pending() -> Self {
        Self { window: None }
    }

    /// A slot holding an available handle.
    pub fn ready(window: W) -> Self {
        Self {
            window: Some(window),
        }
    }

    /// Hand over the window handle once the bridge has initialized.
    pub fn attach(&mut self, window: W) {
        self.window = Some(window);
    }

    pub fn is_ready(&self) -> bool {
        self.window.is_some()
    }

    pub fn get(&self) -> Option<&W> {
        self.window.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut W> {
        self.window.as_mut()
    }
}

impl<W> Default for WindowSlot<W> {
    fn default() -> Self {
        Self::pending()
    }
}

impl<W: NativeWindow> WindowSlot<W> {
    /// Issue a request against the handle.
    ///
    /// Returns `None` when the handle is pending or the request failed.
    /// Failures are logged and swallowed.
    pub fn dispatch(&mut self, request: WindowRequest) -> Option<RequestOutcome> {
        let Some(window) = self.window.as_mut() else {
            debug!(
                event = "core.window.request_skipped",
                request = %request,
                reason = "handle_pending"
            );
            return None;
        };

        match request.execute(window) {
            Ok(outcome) => {
                debug!(
                    event = "core.window.request_completed",
                    request = %request,
                    outcome = ?outcome
                );
                Some(outcome)
            }
            Err(e) => {
                warn!(
                    event = "core.window.request_failed",
                    request = %request,
                    error = %e,
                    error_code = e.error_code()
                );
                None
            }
        }
    }

    /// Current maximized state, if the handle is ready and answered.
    pub fn query_maximized(&mut self) -> Option<bool> {
        match self.dispatch(WindowRequest::QueryMaximized)? {
            RequestOutcome::Maximized(maximized) => Some(maximized),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::headless::{HeadlessWindow, WindowCall};
    use crate::window::types::WindowOp;

    #[test]
    fn test_pending_slot_skips_requests() {
        let mut slot: WindowSlot<HeadlessWindow> = WindowSlot::pending();
        assert!(!slot.is_ready());
        assert_eq!(slot.dispatch(WindowRequest::Close), None);
        assert_eq!(slot.query_maximized(), None);
    }

    #[test]
    fn test_attach_makes_slot_ready() {
        let window = HeadlessWindow::new();
        let mut slot = WindowSlot::pending();
        slot.attach(window.clone());

        assert!(slot.is_ready());
        assert_eq!(
            slot.dispatch(WindowRequest::Minimize),
            Some(RequestOutcome::Done)
        );
        assert_eq!(window.calls(), vec![WindowCall::Minimize]);
    }

    #[test]
    fn test_failed_request_is_swallowed() {
        let window = HeadlessWindow::new();
        window.fail_on(WindowOp::IsMaximized);
        let mut slot = WindowSlot::ready(window.clone());

        assert_eq!(slot.query_maximized(), None);
        assert_eq!(window.calls(), vec![WindowCall::IsMaximized]);
    }

    #[test]
    fn test_slot_over_borrowed_window() {
        let mut window = HeadlessWindow::new().with_maximized(true);
        let mut slot = WindowSlot::ready(&mut window);
        assert_eq!(slot.query_maximized(), Some(true));
    }
}
