mod selector_extraction;
mod settings_commands;
mod tray_menu_tests;
