use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use tauri::menu::CheckMenuItem;
use tauri::Wry;
use tauri_plugin_global_shortcut::Shortcut;

use crate::commands::media::MediaCommand;
use crate::player::track::TrackChangeDetector;

/// Runtime state managed by Tauri.
///
/// `shutdown_requested` is the explicit quit flag the close-to-tray handler
/// consults; only the tray Quit item sets it.
pub struct AppState {
    shutdown_requested: AtomicBool,
    pub detector: Mutex<TrackChangeDetector>,
    media_shortcuts: Mutex<Vec<(Shortcut, MediaCommand)>>,
    notifications_item: Mutex<Option<CheckMenuItem<Wry>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            shutdown_requested: AtomicBool::new(false),
            detector: Mutex::new(TrackChangeDetector::new()),
            media_shortcuts: Mutex::new(Vec::new()),
            notifications_item: Mutex::new(None),
        }
    }

    pub fn request_shutdown(&self) {
        self.shutdown_requested.store(true, Ordering::SeqCst);
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::SeqCst)
    }

    pub fn set_media_shortcuts(&self, bindings: Vec<(Shortcut, MediaCommand)>) {
        if let Ok(mut guard) = self.media_shortcuts.lock() {
            *guard = bindings;
        } else {
            log::error!("failed to acquire media shortcut lock");
        }
    }

    /// Map a pressed global shortcut back to the media command it was
    /// registered for.
    pub fn media_command_for(&self, shortcut: &Shortcut) -> Option<MediaCommand> {
        match self.media_shortcuts.lock() {
            Ok(guard) => MediaCommand::for_shortcut(&guard, shortcut),
            Err(e) => {
                log::error!("failed to acquire media shortcut lock: {}", e);
                None
            }
        }
    }

    pub fn set_notifications_item(&self, item: CheckMenuItem<Wry>) {
        if let Ok(mut guard) = self.notifications_item.lock() {
            *guard = Some(item);
        } else {
            log::error!("failed to acquire notifications menu item lock");
        }
    }

    /// Push the persisted value back into the tray checkbox so the menu never
    /// drifts from the settings file.
    pub fn sync_notifications_item(&self, checked: bool) {
        if let Ok(guard) = self.notifications_item.lock() {
            if let Some(item) = guard.as_ref() {
                if let Err(e) = item.set_checked(checked) {
                    log::warn!("failed to update notifications checkbox: {}", e);
                }
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
