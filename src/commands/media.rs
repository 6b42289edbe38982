use std::time::Duration;

use tauri::{AppHandle, Emitter, Manager};
use tauri_plugin_global_shortcut::Shortcut;

use crate::window::MAIN_WINDOW;

/// Shell -> page command channel.
pub const MEDIA_COMMAND_EVENT: &str = "media-command";
/// Shell -> page request for a fresh markup report.
pub const TRACK_REPORT_EVENT: &str = "request-track-report";

/// Delay before asking the page for fresh markup after a track skip, so the
/// player has time to swap the displayed track.
pub const TRACK_CHECK_DELAY: Duration = Duration::from_millis(1000);

/// Global shortcuts forwarded into the page, paired with their commands.
pub const MEDIA_KEY_BINDINGS: &[(&str, MediaCommand)] = &[
    ("MediaPlayPause", MediaCommand::PlayPause),
    ("MediaTrackNext", MediaCommand::Next),
    ("MediaTrackPrevious", MediaCommand::Previous),
];

/// The closed set of commands the relay carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCommand {
    PlayPause,
    Next,
    Previous,
}

impl MediaCommand {
    /// Wire symbol used on the relay channel.
    pub fn as_str(self) -> &'static str {
        match self {
            MediaCommand::PlayPause => "playpause",
            MediaCommand::Next => "next",
            MediaCommand::Previous => "previous",
        }
    }

    /// Parse a wire symbol. Anything outside the closed set is `None`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "playpause" => Some(MediaCommand::PlayPause),
            "next" => Some(MediaCommand::Next),
            "previous" => Some(MediaCommand::Previous),
            _ => None,
        }
    }

    /// Next/previous change the current track and warrant a delayed re-check.
    pub fn is_track_skip(self) -> bool {
        matches!(self, MediaCommand::Next | MediaCommand::Previous)
    }

    /// Look up the command registered for a pressed shortcut.
    pub fn for_shortcut(
        bindings: &[(Shortcut, MediaCommand)],
        pressed: &Shortcut,
    ) -> Option<MediaCommand> {
        bindings
            .iter()
            .find(|(shortcut, _)| shortcut == pressed)
            .map(|(_, command)| *command)
    }
}

/// Forward a command into the page context, at most once.
///
/// There is no queue: when the main webview is gone the command is dropped
/// and only logged. Track skips schedule a one-shot re-check so the page
/// reports the new track once the player has settled.
pub fn relay_media_command(app: &AppHandle, command: MediaCommand) {
    if app.get_webview_window(MAIN_WINDOW).is_none() {
        log::warn!("dropping {} command: main window not available", command.as_str());
        return;
    }

    log::debug!("relaying media command: {}", command.as_str());
    if let Err(e) = app.emit_to(MAIN_WINDOW, MEDIA_COMMAND_EVENT, command.as_str()) {
        log::warn!("failed to deliver {} command: {}", command.as_str(), e);
        return;
    }

    if command.is_track_skip() {
        let app = app.clone();
        tauri::async_runtime::spawn(async move {
            tokio::time::sleep(TRACK_CHECK_DELAY).await;
            if let Some(_window) = app.get_webview_window(MAIN_WINDOW) {
                if let Err(e) = app.emit_to(MAIN_WINDOW, TRACK_REPORT_EVENT, ()) {
                    log::debug!("failed to request track report: {}", e);
                }
            }
        });
    }
}
