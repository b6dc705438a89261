//! End-to-end title bar behavior against the headless window.
//!
//! Resize notifications are queued by the listener and drained by a small
//! event loop, the way a UI host delivers them on its own thread.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use titlebar_core::controls::ModifierState;
use titlebar_core::platform::FixedOsInfo;
use titlebar_core::window::{HeadlessWindow, WindowCall};
use titlebar_core::{
    ControlSetKind, Icon, MacButton, ModifierKey, OsType, PendingStyle, PlatformError, TitleBar,
    TitlebarSettings, WindowSlot, WindowsButton, detect_os,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HostEvent {
    Resized,
}

struct Host {
    window: HeadlessWindow,
    slot: WindowSlot<HeadlessWindow>,
    queue: Rc<RefCell<VecDeque<HostEvent>>>,
    bar: TitleBar,
}

impl Host {
    fn new(window: HeadlessWindow, pending_style: PendingStyle) -> Self {
        Self {
            slot: WindowSlot::ready(window.clone()),
            window,
            queue: Rc::new(RefCell::new(VecDeque::new())),
            bar: TitleBar::new(TitlebarSettings {
                pending_style,
                modifier_key: ModifierKey::Alt,
            }),
        }
    }

    fn mount(&mut self) {
        self.bar.mount(&mut self.slot);
        self.subscribe_if_needed();
    }

    fn resolve(&mut self, result: Result<OsType, PlatformError>) {
        self.bar.resolve(result, &mut self.slot);
        self.subscribe_if_needed();
    }

    fn subscribe_if_needed(&mut self) {
        if !self.bar.needs_resize_subscription() {
            return;
        }
        let queue = self.queue.clone();
        let subscription = self
            .window
            .on_resized(move || queue.borrow_mut().push_back(HostEvent::Resized))
            .unwrap();
        self.bar.attach_resize_subscription(subscription);
    }

    /// Drain queued events; returns how many display updates were requested.
    fn run_events(&mut self) -> usize {
        let mut updates = 0;
        loop {
            let Some(event) = self.queue.borrow_mut().pop_front() else {
                break;
            };
            match event {
                HostEvent::Resized => {
                    if self.bar.on_resized(&mut self.slot) {
                        updates += 1;
                    }
                }
            }
        }
        updates
    }
}

#[test]
fn macos_selects_mac_controls() {
    let os = detect_os(&FixedOsInfo::new("macos")).unwrap();
    let mut host = Host::new(HeadlessWindow::new(), PendingStyle::Fallback);
    host.mount();
    host.resolve(Ok(os));

    assert_eq!(host.bar.selected(), Some(ControlSetKind::Mac));
}

#[test]
fn windows_unknown_unresolved_and_errors_select_windows_controls() {
    for label in ["windows", "linux", "plan9"] {
        let os = detect_os(&FixedOsInfo::new(label)).unwrap();
        let mut host = Host::new(HeadlessWindow::new(), PendingStyle::Fallback);
        host.mount();
        host.resolve(Ok(os));
        assert_eq!(host.bar.selected(), Some(ControlSetKind::Windows), "{label}");
    }

    let mut unresolved = Host::new(HeadlessWindow::new(), PendingStyle::Fallback);
    unresolved.mount();
    assert_eq!(unresolved.bar.selected(), Some(ControlSetKind::Windows));

    let mut failed = Host::new(HeadlessWindow::new(), PendingStyle::Fallback);
    failed.mount();
    failed.resolve(Err(PlatformError::DetectionFailed {
        message: "os plugin missing".to_string(),
    }));
    assert_eq!(failed.bar.selected(), Some(ControlSetKind::Windows));
}

#[test]
fn mac_hover_without_modifier_shows_fullscreen_icon() {
    let mut host = Host::new(HeadlessWindow::new(), PendingStyle::Empty);
    host.mount();
    host.resolve(Ok(OsType::MacOs));

    let mac = host.bar.mac_mut().unwrap();
    mac.modifiers_changed(ModifierState::default());
    mac.set_hovering(true);

    let icons: Vec<_> = mac.buttons().iter().map(|b| b.icon).collect();
    assert_eq!(
        icons,
        vec![
            Some(Icon::CloseMac),
            Some(Icon::MinimizeMac),
            Some(Icon::EnterFullscreen)
        ]
    );
}

#[test]
fn mac_zoom_respects_modifier() {
    let window = HeadlessWindow::new();
    let mut host = Host::new(window.clone(), PendingStyle::Empty);
    host.mount();
    host.resolve(Ok(OsType::MacOs));

    let mac = host.bar.mac_mut().unwrap();
    mac.key_down("Alt");
    mac.click(MacButton::Zoom, &mut host.slot);
    assert_eq!(window.calls(), vec![WindowCall::ToggleMaximize]);

    window.clear_calls();
    let mac = host.bar.mac_mut().unwrap();
    mac.key_up("Alt");
    mac.click(MacButton::Zoom, &mut host.slot);
    assert_eq!(
        window.calls(),
        vec![WindowCall::IsFullscreen, WindowCall::SetFullscreen(true)]
    );
}

#[test]
fn clicks_without_handle_issue_nothing() {
    let mut slot: WindowSlot<HeadlessWindow> = WindowSlot::pending();
    let mut bar = TitleBar::new(TitlebarSettings::default());
    bar.mount(&mut slot);

    let windows = bar.windows().unwrap();
    for button in WindowsButton::ALL {
        assert_eq!(windows.click(button, &mut slot), None);
    }
    assert_eq!(bar.windows().unwrap().maximize_icon(), Icon::MaximizeWin);

    let late = HeadlessWindow::new();
    slot.attach(late.clone());
    assert!(bar.on_resized(&mut slot));
    assert_eq!(late.calls(), vec![WindowCall::IsMaximized]);
}

#[test]
fn maximized_window_shows_restore_icon() {
    let window = HeadlessWindow::new().with_maximized(true);
    let mut host = Host::new(window, PendingStyle::Fallback);
    host.mount();
    host.resolve(Ok(OsType::Windows));

    let windows = host.bar.windows().unwrap();
    assert_eq!(windows.maximize_icon(), Icon::RestoreWin);
    assert_eq!(windows.buttons()[1].icon, Some(Icon::RestoreWin));
}

#[test]
fn resize_triggers_exactly_one_requery() {
    let window = HeadlessWindow::new();
    let mut host = Host::new(window.clone(), PendingStyle::Fallback);
    host.mount();
    window.clear_calls();

    window.maximize_externally(true);
    assert_eq!(host.run_events(), 1);
    assert_eq!(window.count(WindowCall::IsMaximized), 1);
    assert_eq!(
        host.bar.windows().unwrap().maximize_icon(),
        Icon::RestoreWin
    );
}

#[test]
fn maximize_click_updates_icon_on_next_resize() {
    let window = HeadlessWindow::new();
    let mut host = Host::new(window.clone(), PendingStyle::Fallback);
    host.mount();

    host.bar
        .windows()
        .unwrap()
        .click(WindowsButton::Maximize, &mut host.slot);
    assert_eq!(
        host.bar.windows().unwrap().maximize_icon(),
        Icon::MaximizeWin
    );

    window.emit_resized();
    host.run_events();
    assert_eq!(
        host.bar.windows().unwrap().maximize_icon(),
        Icon::RestoreWin
    );
}

#[test]
fn unmount_releases_subscription_and_stops_updates() {
    let window = HeadlessWindow::new();
    let mut host = Host::new(window.clone(), PendingStyle::Fallback);
    host.mount();
    assert_eq!(window.listener_count(), 1);

    host.bar.unmount();
    assert_eq!(window.listener_count(), 0);

    window.clear_calls();
    window.maximize_externally(true);
    assert_eq!(host.run_events(), 0);
    assert!(window.calls().is_empty());
}

#[test]
fn remount_does_not_duplicate_listeners() {
    let window = HeadlessWindow::new();
    let mut host = Host::new(window.clone(), PendingStyle::Fallback);

    for _ in 0..3 {
        host.mount();
        host.bar.unmount();
    }
    host.mount();
    assert_eq!(window.listener_count(), 1);
}
