//! titlebar-ui: GPUI window with a custom title bar
//!
//! Opens a single window without native caption controls; its title bar
//! draws macOS or Windows controls depending on the detected OS.

use gpui::{App, AppContext, Application, Bounds, px, size};
use titlebar_core::TitlebarConfig;
use titlebar_core::events;

mod actions;
mod theme;
mod views;
mod window;
mod window_options;

use views::MainView;

fn main() {
    let config = match TitlebarConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            // Logging is not configured yet; init with defaults so the error is visible.
            titlebar_core::init_logging(false);
            events::log_app_error(&e);
            TitlebarConfig::default()
        }
    };

    titlebar_core::init_logging(config.logging.is_quiet());
    events::log_app_startup();

    Application::new().run(move |cx: &mut App| {
        let (width, height) = config.window_size();
        let bounds = Bounds::centered(None, size(px(width), px(height)), cx);

        let result = cx.open_window(
            window_options::main_window_options(&config, bounds),
            |window, cx| cx.new(|cx| MainView::new(&config, window, cx)),
        );

        if let Err(e) = result {
            tracing::error!(event = "ui.window.open_failed", error = %e);
            cx.quit();
            return;
        }

        // Single-window app: closing the window (close button included) quits.
        cx.on_window_closed(|cx| cx.quit()).detach();
    });

    events::log_app_shutdown();
}
