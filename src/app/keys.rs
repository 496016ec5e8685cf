// src/app/keys.rs
// =============================================================================
// Key handling: translates an InputKey into a Message for the focused
// control. Returns None for keys that do nothing in the current focus.
// =============================================================================

use super::input_key::InputKey;
use super::message::Message;
use super::state::{AppState, Focus};

pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Global keys first
    match key {
        InputKey::CharCtrl('c') | InputKey::Esc => return Some(Message::Quit),
        InputKey::Enter => return Some(Message::SubmitSearch),
        InputKey::Tab => return Some(Message::FocusNext),
        InputKey::BackTab => return Some(Message::FocusPrev),
        InputKey::Up => return Some(Message::ScrollUp),
        InputKey::Down => return Some(Message::ScrollDown),
        InputKey::PageUp => return Some(Message::PageUp),
        InputKey::PageDown => return Some(Message::PageDown),
        _ => {}
    }

    match state.focus {
        Focus::Search => handle_search_key(state, key),
        Focus::Language => match key {
            InputKey::Left | InputKey::Char('h') => {
                Some(Message::SetLanguage(state.language.prev_choice()))
            }
            InputKey::Right | InputKey::Char('l') => {
                Some(Message::SetLanguage(state.language.next_choice()))
            }
            InputKey::Char('q') => Some(Message::Quit),
            _ => None,
        },
        Focus::User => match key {
            InputKey::Left | InputKey::Char('h') => Some(Message::SetUsername(state.prev_username())),
            InputKey::Right | InputKey::Char('l') => Some(Message::SetUsername(state.next_username())),
            InputKey::Char('q') => Some(Message::Quit),
            _ => None,
        },
    }
}

// The search box takes every printable character, including 'q'
fn handle_search_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => {
            let mut query = state.search.clone();
            query.push(c);
            Some(Message::SetQuery(query))
        }
        InputKey::Backspace => {
            let mut query = state.search.clone();
            query.pop()?;
            Some(Message::SetQuery(query))
        }
        InputKey::CharCtrl('u') => Some(Message::SetQuery(String::new())),
        _ => None,
    }
}
