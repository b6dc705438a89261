//! Platform-specific `WindowOptions` for the main window.
//!
//! The title bar draws its own controls on every platform, so the native
//! ones must not show:
//! - macOS: AppKit always creates the traffic lights for a titled window.
//!   They are positioned outside the window frame, where they are neither
//!   drawn nor hit-tested.
//! - Windows/Linux: client-side decorations; the OS draws no caption.

use gpui::{
    Bounds, Pixels, SharedString, TitlebarOptions, WindowBounds, WindowDecorations,
    WindowOptions,
};
use titlebar_core::TitlebarConfig;

/// Where the native traffic lights are parked on macOS: up and to the left
/// of the window origin, well past the titlebar.
#[cfg(target_os = "macos")]
pub fn hidden_traffic_lights() -> gpui::Point<Pixels> {
    gpui::point(gpui::px(-1000.0), gpui::px(-1000.0))
}

pub fn main_window_options(config: &TitlebarConfig, bounds: Bounds<Pixels>) -> WindowOptions {
    let title = SharedString::from(config.window_title().to_string());
    WindowOptions {
        titlebar: Some(titlebar_options(title)),
        window_decorations: window_decorations(),
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        ..Default::default()
    }
}

#[cfg(target_os = "macos")]
fn titlebar_options(title: SharedString) -> TitlebarOptions {
    TitlebarOptions {
        title: Some(title),
        appears_transparent: true,
        traffic_light_position: Some(hidden_traffic_lights()),
    }
}

#[cfg(not(target_os = "macos"))]
fn titlebar_options(title: SharedString) -> TitlebarOptions {
    TitlebarOptions {
        title: Some(title),
        appears_transparent: true,
        traffic_light_position: None,
    }
}

#[cfg(target_os = "macos")]
fn window_decorations() -> Option<WindowDecorations> {
    None
}

#[cfg(not(target_os = "macos"))]
fn window_decorations() -> Option<WindowDecorations> {
    Some(WindowDecorations::Client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{point, px, size};

    fn options() -> WindowOptions {
        let bounds = Bounds::new(point(px(0.0), px(0.0)), size(px(800.0), px(500.0)));
        main_window_options(&TitlebarConfig::default(), bounds)
    }

    #[test]
    fn test_title_and_bounds_from_config() {
        let options = options();
        let titlebar = options.titlebar.unwrap();
        assert_eq!(titlebar.title, Some(SharedString::from("Titlebar")));
        assert!(titlebar.appears_transparent);
        assert!(matches!(
            options.window_bounds,
            Some(WindowBounds::Windowed(bounds)) if bounds.size.width == px(800.0)
        ));
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_native_traffic_lights_parked_outside_window() {
        let position = options().titlebar.unwrap().traffic_light_position.unwrap();
        assert!(position.x < px(0.0));
        assert!(position.y < px(0.0));
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn test_client_decorations_off_macos() {
        let options = options();
        assert!(matches!(
            options.window_decorations,
            Some(WindowDecorations::Client)
        ));
        assert!(options.titlebar.unwrap().traffic_light_position.is_none());
    }
}
