use serde::{Deserialize, Serialize};
use serde_json::json;
use tauri::AppHandle;
use tauri_plugin_store::StoreExt;

pub const SETTINGS_STORE: &str = "settings.json";
pub const NOTIFICATIONS_ENABLED_KEY: &str = "notificationsEnabled";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub notifications_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
        }
    }
}

/// Build settings from whatever the store holds for the notifications key.
/// Missing keys and wrong-typed values fall back to the default, so a
/// corrupt or hand-edited file can never fail the load.
pub fn settings_from_value(value: Option<&serde_json::Value>) -> Settings {
    Settings {
        notifications_enabled: value
            .and_then(|v| v.as_bool())
            .unwrap_or(Settings::default().notifications_enabled),
    }
}

/// Read the persisted settings, defaulting on any store failure.
pub fn load_settings(app: &AppHandle) -> Settings {
    match app.store(SETTINGS_STORE) {
        Ok(store) => settings_from_value(store.get(NOTIFICATIONS_ENABLED_KEY).as_ref()),
        Err(e) => {
            log::warn!("settings store unavailable, using defaults: {}", e);
            Settings::default()
        }
    }
}

/// Persist a new notifications value, overwriting the stored record.
pub fn persist_notifications_enabled(
    app: &AppHandle,
    enabled: bool,
) -> Result<Settings, String> {
    let store = app.store(SETTINGS_STORE).map_err(|e| e.to_string())?;
    store.set(NOTIFICATIONS_ENABLED_KEY, json!(enabled));
    store.save().map_err(|e| e.to_string())?;
    log::info!("notifications {}", if enabled { "enabled" } else { "disabled" });
    Ok(Settings {
        notifications_enabled: enabled,
    })
}

/// One-shot settings snapshot for the page context.
#[tauri::command]
pub async fn get_settings(app: AppHandle) -> Result<Settings, String> {
    Ok(load_settings(&app))
}
