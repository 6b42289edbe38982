use tauri::{AppHandle, Emitter, Manager};

use crate::commands::notifications::{self, NOW_PLAYING_TITLE};
use crate::player::extract;
use crate::state::AppState;
use crate::window::MAIN_WINDOW;

/// Shell -> page metadata push for `navigator.mediaSession`.
pub const TRACK_METADATA_EVENT: &str = "track-metadata";

/// Page-originated markup report. The bridge ships the player region's HTML
/// here after every debounced re-check; the shell extracts the track tuple,
/// runs change detection, and fans the result out to the notification path
/// and back to the page's media session.
#[tauri::command]
pub async fn report_player_markup(app: AppHandle, html: String) -> Result<(), String> {
    let info = extract::extract_track_info(&html);

    let changed = {
        let state = app.state::<AppState>();
        let mut detector = state.detector.lock().map_err(|e| e.to_string())?;
        detector.observe(info)
    };

    if let Some(track) = changed {
        log::info!("track changed: {} - {}", track.artist, track.title);
        notifications::notify_if_enabled(
            &app,
            NOW_PLAYING_TITLE,
            &track.notification_body(),
            track.cover_url.as_deref(),
        );
        if let Err(e) = app.emit_to(MAIN_WINDOW, TRACK_METADATA_EVENT, &track) {
            log::debug!("failed to push media session metadata: {}", e);
        }
    }
    Ok(())
}
