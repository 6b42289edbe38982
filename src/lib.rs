use tauri::Manager;
use tauri_plugin_global_shortcut::{GlobalShortcutExt, Shortcut, ShortcutState};

mod commands;
mod menu;
mod player;
mod state;
mod window;

#[cfg(test)]
mod tests;

use commands::media::{self, MediaCommand, MEDIA_KEY_BINDINGS};
use commands::{notifications::*, player::*, settings::*};
use state::AppState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_log::Builder::new().build())
        .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
            // Second launch just surfaces the existing window.
            window::show_main_window(app);
        }))
        .plugin(tauri_plugin_store::Builder::new().build())
        .plugin(tauri_plugin_notification::init())
        .plugin(tauri_plugin_opener::init())
        .plugin(
            tauri_plugin_global_shortcut::Builder::new()
                .with_handler(|app, shortcut, event| {
                    if !matches!(event.state(), ShortcutState::Pressed) {
                        return;
                    }
                    let state = app.state::<AppState>();
                    if let Some(command) = state.media_command_for(shortcut) {
                        log::debug!("media key pressed: {}", command.as_str());
                        media::relay_media_command(app, command);
                    }
                })
                .build(),
        )
        .setup(|app| {
            app.manage(AppState::new());

            let bridge_script = player::bridge::render_bridge_script()?;
            window::create_main_window(app, &bridge_script)?;
            menu::tray::setup_tray(app)?;
            register_media_keys(app);

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            get_settings,
            show_notification,
            report_player_markup,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Register the hardware media keys. A key that cannot be grabbed (another
/// player already owns it, or the platform refuses) is skipped, not fatal.
fn register_media_keys(app: &tauri::App) {
    let mut bindings: Vec<(Shortcut, MediaCommand)> = Vec::new();

    for (keys, command) in MEDIA_KEY_BINDINGS {
        let shortcut: Shortcut = match keys.parse() {
            Ok(shortcut) => shortcut,
            Err(e) => {
                log::warn!("invalid media key binding {}: {}", keys, e);
                continue;
            }
        };
        if let Err(e) = app.global_shortcut().register(shortcut.clone()) {
            log::warn!("failed to register media key {}: {}", keys, e);
            continue;
        }
        bindings.push((shortcut, *command));
    }

    log::info!("registered {} media key bindings", bindings.len());
    app.state::<AppState>().set_media_shortcuts(bindings);
}
