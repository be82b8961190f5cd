//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. Printable characters feed the folder
//! input, so the global shortcuts live on control keys.

use super::messages::AppMsg;

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::{KeyCode, KeyModifiers};

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.key {
            KeyCode::Char('c' | 'q') => Some(AppMsg::Quit),
            _ => None,
        };
    }

    match key.key {
        KeyCode::Char(character) => Some(AppMsg::FolderInput(character)),
        KeyCode::Backspace => Some(AppMsg::FolderBackspace),
        KeyCode::Enter => Some(AppMsg::RunRequested),
        KeyCode::Tab => Some(AppMsg::BrowseRequested),
        KeyCode::Esc => Some(AppMsg::ClearRequested),
        _ => None,
    }
}
