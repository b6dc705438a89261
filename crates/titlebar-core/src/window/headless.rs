//! In-memory window for driving control sets without a native window.
//!
//! Records every call made against it, keeps a resize listener registry,
//! and can be told to fail specific operations. Clones share state, so a
//! test can keep one handle while a control set owns another.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::rc::{Rc, Weak};

use crate::window::errors::WindowError;
use crate::window::subscription::Subscription;
use crate::window::traits::NativeWindow;
use crate::window::types::WindowOp;

/// A call recorded by [`HeadlessWindow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowCall {
    Minimize,
    ToggleMaximize,
    IsMaximized,
    Close,
    IsFullscreen,
    SetFullscreen(bool),
}

type ResizeListener = Rc<dyn Fn()>;

#[derive(Default)]
struct HeadlessState {
    maximized: bool,
    fullscreen: bool,
    minimized: bool,
    closed: bool,
    calls: Vec<WindowCall>,
    failing: HashSet<WindowOp>,
    listeners: BTreeMap<u64, ResizeListener>,
    next_listener_id: u64,
}

#[derive(Clone, Default)]
pub struct HeadlessWindow {
    state: Rc<RefCell<HeadlessState>>,
}

impl HeadlessWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_maximized(self, maximized: bool) -> Self {
        self.state.borrow_mut().maximized = maximized;
        self
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<WindowCall> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    /// Number of recorded calls equal to `call`.
    pub fn count(&self, call: WindowCall) -> usize {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|c| **c == call)
            .count()
    }

    /// Make every later `op` call fail.
    pub fn fail_on(&self, op: WindowOp) {
        self.state.borrow_mut().failing.insert(op);
    }

    pub fn is_minimized(&self) -> bool {
        self.state.borrow().minimized
    }

    pub fn is_closed(&self) -> bool {
        self.state.borrow().closed
    }

    /// Register a resize listener. Dropping the returned guard removes it.
    pub fn on_resized(&self, listener: impl Fn() + 'static) -> Result<Subscription, WindowError> {
        self.check(WindowOp::OnResized)?;

        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_listener_id;
            state.next_listener_id += 1;
            state.listeners.insert(id, Rc::new(listener));
            id
        };

        let weak: Weak<RefCell<HeadlessState>> = Rc::downgrade(&self.state);
        Ok(Subscription::new(move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().listeners.remove(&id);
            }
        }))
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Fire every registered resize listener, as the host does after a
    /// geometry change.
    pub fn emit_resized(&self) {
        let listeners: Vec<ResizeListener> =
            self.state.borrow().listeners.values().cloned().collect();
        for listener in listeners {
            listener();
        }
    }

    /// Change the maximized state from outside the title bar (for example a
    /// double-click on the caption) and notify listeners.
    pub fn maximize_externally(&self, maximized: bool) {
        self.state.borrow_mut().maximized = maximized;
        self.emit_resized();
    }

    fn record(&self, call: WindowCall) {
        self.state.borrow_mut().calls.push(call);
    }

    fn check(&self, op: WindowOp) -> Result<(), WindowError> {
        let state = self.state.borrow();
        if state.failing.contains(&op) {
            return Err(WindowError::OperationFailed {
                operation: op,
                message: "injected failure".to_string(),
            });
        }
        if state.closed {
            return Err(WindowError::Closed);
        }
        Ok(())
    }
}

impl NativeWindow for HeadlessWindow {
    fn minimize(&mut self) -> Result<(), WindowError> {
        self.record(WindowCall::Minimize);
        self.check(WindowOp::Minimize)?;
        self.state.borrow_mut().minimized = true;
        Ok(())
    }

    fn toggle_maximize(&mut self) -> Result<(), WindowError> {
        self.record(WindowCall::ToggleMaximize);
        self.check(WindowOp::ToggleMaximize)?;
        let mut state = self.state.borrow_mut();
        state.maximized = !state.maximized;
        Ok(())
    }

    fn is_maximized(&self) -> Result<bool, WindowError> {
        self.record(WindowCall::IsMaximized);
        self.check(WindowOp::IsMaximized)?;
        Ok(self.state.borrow().maximized)
    }

    fn close(&mut self) -> Result<(), WindowError> {
        self.record(WindowCall::Close);
        self.check(WindowOp::Close)?;
        self.state.borrow_mut().closed = true;
        Ok(())
    }

    fn is_fullscreen(&self) -> Result<bool, WindowError> {
        self.record(WindowCall::IsFullscreen);
        self.check(WindowOp::IsFullscreen)?;
        Ok(self.state.borrow().fullscreen)
    }

    fn set_fullscreen(&mut self, fullscreen: bool) -> Result<(), WindowError> {
        self.record(WindowCall::SetFullscreen(fullscreen));
        self.check(WindowOp::SetFullscreen)?;
        self.state.borrow_mut().fullscreen = fullscreen;
        Ok(())
    }
}
