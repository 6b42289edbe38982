use tauri::webview::PageLoadEvent;
use tauri::{AppHandle, Manager, Url, WebviewUrl, WebviewWindowBuilder, WindowEvent};
use tauri_plugin_opener::OpenerExt;

use crate::state::AppState;

pub const MAIN_WINDOW: &str = "main";
pub const PLAYER_URL: &str = "https://play.qobuz.com";

/// Only the hosted player's own origin (and its auth subdomains) may load in
/// the webview; everything else goes to the system browser.
pub fn is_player_navigation(url: &Url) -> bool {
    match url.host_str() {
        Some(host) => host == "qobuz.com" || host.ends_with(".qobuz.com"),
        None => false,
    }
}

/// Create the main player window with the bridge script attached.
///
/// The window starts hidden and is shown on the first finished page load to
/// avoid a white flash while the remote app boots.
pub fn create_main_window(
    app: &tauri::App,
    bridge_script: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let handle = app.handle().clone();
    let nav_handle = app.handle().clone();

    let window = WebviewWindowBuilder::new(
        app,
        MAIN_WINDOW,
        WebviewUrl::External(PLAYER_URL.parse()?),
    )
    .title("Qobux")
    .inner_size(1200.0, 800.0)
    .min_inner_size(800.0, 600.0)
    .visible(false)
    .initialization_script(bridge_script)
    .on_navigation(move |url| {
        if is_player_navigation(url) {
            return true;
        }
        log::info!("blocked in-app navigation to {}", url);
        if let Err(e) = nav_handle.opener().open_url(url.as_str(), None::<&str>) {
            log::warn!("failed to hand off {} to the system browser: {}", url, e);
        }
        false
    })
    .on_page_load(|window, payload| {
        if let PageLoadEvent::Finished = payload.event() {
            log::info!("player page loaded: {}", payload.url());
            let _ = window.show();
            let _ = window.set_focus();
        }
    })
    .build()?;

    window.on_window_event(move |event| match event {
        WindowEvent::CloseRequested { api, .. } => {
            let state = handle.state::<AppState>();
            if !state.is_shutdown_requested() {
                // Close means hide while the tray is alive.
                api.prevent_close();
                hide_main_window(&handle);
            }
        }
        WindowEvent::Resized(_) => {
            // Minimize arrives as a resize; fold it into hide-to-tray.
            if let Some(window) = handle.get_webview_window(MAIN_WINDOW) {
                if window.is_minimized().unwrap_or(false) {
                    let _ = window.unminimize();
                    let _ = window.hide();
                }
            }
        }
        _ => {}
    });

    Ok(())
}

pub fn show_main_window(app: &AppHandle) {
    if let Some(window) = app.get_webview_window(MAIN_WINDOW) {
        if window.is_minimized().unwrap_or(false) {
            let _ = window.unminimize();
        }
        let _ = window.show();
        let _ = window.set_focus();
    }
}

pub fn hide_main_window(app: &AppHandle) {
    if let Some(window) = app.get_webview_window(MAIN_WINDOW) {
        let _ = window.hide();
    }
}

pub fn toggle_main_window(app: &AppHandle) {
    if let Some(window) = app.get_webview_window(MAIN_WINDOW) {
        if window.is_visible().unwrap_or(false) {
            let _ = window.hide();
        } else {
            show_main_window(app);
        }
    }
}
