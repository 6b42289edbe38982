use tauri::menu::{CheckMenuItem, MenuBuilder, MenuEvent, MenuItem};
use tauri::tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent};
use tauri::{AppHandle, Manager};

use crate::commands::media::{self, MediaCommand};
use crate::commands::settings;
use crate::state::AppState;
use crate::window;

pub const TRAY_ID: &str = "main";

pub const MENU_SHOW: &str = "show";
pub const MENU_HIDE: &str = "hide";
pub const MENU_NOTIFICATIONS: &str = "notifications";
pub const MENU_QUIT: &str = "quit";

/// Playback menu ids double as the relay's wire symbols, so the mapping is a
/// straight parse of the id.
pub fn media_command_for_menu_id(id: &str) -> Option<MediaCommand> {
    MediaCommand::from_symbol(id)
}

pub fn setup_tray(app: &tauri::App) -> tauri::Result<()> {
    let settings = settings::load_settings(app.handle());

    let show_i = MenuItem::with_id(app, MENU_SHOW, "Show Qobux", true, None::<&str>)?;
    let hide_i = MenuItem::with_id(app, MENU_HIDE, "Hide Qobux", true, None::<&str>)?;
    let play_i = MenuItem::with_id(
        app,
        MediaCommand::PlayPause.as_str(),
        "Play/Pause",
        true,
        None::<&str>,
    )?;
    let next_i = MenuItem::with_id(
        app,
        MediaCommand::Next.as_str(),
        "Next Track",
        true,
        None::<&str>,
    )?;
    let prev_i = MenuItem::with_id(
        app,
        MediaCommand::Previous.as_str(),
        "Previous Track",
        true,
        None::<&str>,
    )?;
    let notifications_i = CheckMenuItem::with_id(
        app,
        MENU_NOTIFICATIONS,
        "Notifications",
        true,
        settings.notifications_enabled,
        None::<&str>,
    )?;
    let quit_i = MenuItem::with_id(app, MENU_QUIT, "Quit", true, None::<&str>)?;

    let menu = MenuBuilder::new(app)
        .item(&show_i)
        .item(&hide_i)
        .separator()
        .item(&play_i)
        .item(&next_i)
        .item(&prev_i)
        .separator()
        .item(&notifications_i)
        .separator()
        .item(&quit_i)
        .build()?;

    // Keep the checkbox handle so toggles can be synced back from the
    // persisted value.
    app.state::<AppState>().set_notifications_item(notifications_i.clone());

    let mut tray = TrayIconBuilder::with_id(TRAY_ID)
        .tooltip("Qobux - Qobuz Desktop Client")
        .menu(&menu)
        .on_menu_event(|app, event| handle_menu_event(app, event))
        .on_tray_icon_event(|tray, event| {
            if let TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } = event
            {
                window::toggle_main_window(tray.app_handle());
            }
        });
    if let Some(icon) = app.default_window_icon() {
        tray = tray.icon(icon.clone());
    }
    tray.build(app)?;

    Ok(())
}

fn handle_menu_event(app: &AppHandle, event: MenuEvent) {
    match event.id.as_ref() {
        MENU_SHOW => window::show_main_window(app),
        MENU_HIDE => window::hide_main_window(app),
        MENU_NOTIFICATIONS => toggle_notifications(app),
        MENU_QUIT => {
            app.state::<AppState>().request_shutdown();
            app.exit(0);
        }
        id => {
            if let Some(command) = media_command_for_menu_id(id) {
                media::relay_media_command(app, command);
            } else {
                log::debug!("unhandled tray menu item: {}", id);
            }
        }
    }
}

fn toggle_notifications(app: &AppHandle) {
    let current = settings::load_settings(app);
    match settings::persist_notifications_enabled(app, !current.notifications_enabled) {
        Ok(updated) => {
            app.state::<AppState>()
                .sync_notifications_item(updated.notifications_enabled);
        }
        Err(e) => log::warn!("failed to persist notifications toggle: {}", e),
    }
}
