use tauri::AppHandle;
use tauri_plugin_notification::NotificationExt;

use crate::commands::settings;

pub const NOW_PLAYING_TITLE: &str = "Now Playing";

/// Show an OS notification unless the user turned them off or the facility
/// is unavailable. Both cases are skips, never errors.
pub fn notify_if_enabled(app: &AppHandle, title: &str, body: &str, icon_url: Option<&str>) {
    let settings = settings::load_settings(app);
    if !settings.notifications_enabled {
        log::debug!("notifications disabled, skipping: {}", title);
        return;
    }

    let mut builder = app.notification().builder().title(title).body(body);
    if let Some(icon) = icon_url {
        builder = builder.icon(icon);
    }
    if let Err(e) = builder.show() {
        log::warn!("notification facility unavailable: {}", e);
    }
}

/// Page-originated notification request, gated by the persisted setting.
#[tauri::command]
pub async fn show_notification(
    app: AppHandle,
    title: String,
    body: String,
    icon_url: Option<String>,
) -> Result<(), String> {
    notify_if_enabled(&app, &title, &body, icon_url.as_deref());
    Ok(())
}
