//! Tests for the tray menu dispatch table.

use crate::commands::media::MediaCommand;
use crate::menu::tray::{
    media_command_for_menu_id, MENU_HIDE, MENU_NOTIFICATIONS, MENU_QUIT, MENU_SHOW,
};

#[test]
fn test_playback_ids_map_to_commands() {
    assert_eq!(
        media_command_for_menu_id("playpause"),
        Some(MediaCommand::PlayPause)
    );
    assert_eq!(media_command_for_menu_id("next"), Some(MediaCommand::Next));
    assert_eq!(
        media_command_for_menu_id("previous"),
        Some(MediaCommand::Previous)
    );
}

#[test]
fn test_window_and_settings_ids_are_not_commands() {
    assert_eq!(media_command_for_menu_id(MENU_SHOW), None);
    assert_eq!(media_command_for_menu_id(MENU_HIDE), None);
    assert_eq!(media_command_for_menu_id(MENU_NOTIFICATIONS), None);
    assert_eq!(media_command_for_menu_id(MENU_QUIT), None);
}

#[test]
fn test_unknown_id_is_ignored() {
    assert_eq!(media_command_for_menu_id("about"), None);
    assert_eq!(media_command_for_menu_id(""), None);
}

#[test]
fn test_menu_ids_are_distinct() {
    let ids = [
        MENU_SHOW,
        MENU_HIDE,
        MediaCommand::PlayPause.as_str(),
        MediaCommand::Next.as_str(),
        MediaCommand::Previous.as_str(),
        MENU_NOTIFICATIONS,
        MENU_QUIT,
    ];
    for (i, a) in ids.iter().enumerate() {
        for b in ids.iter().skip(i + 1) {
            assert_ne!(a, b, "menu ids must be unique");
        }
    }
}
