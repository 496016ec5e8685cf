// src/app/message.rs
// =============================================================================
// Every event the dashboard reacts to is a `Message`.
//
// The event loop turns key presses and finished fetches into messages and
// feeds them to `update`. Nothing else is allowed to change `AppState`.
// =============================================================================

use crate::dashboard::LanguageFilter;
use crate::github::{FetchError, Repository};

use super::input_key::InputKey;
use super::state::FetchTicket;

#[derive(Debug)]
pub enum Message {
    /// Keyboard event from the terminal
    Key(InputKey),

    /// Select a candidate user (does not fetch)
    SetUsername(String),
    /// Submit the selected user; the only message that can start a fetch
    SubmitSearch,
    /// Replace the repository name filter
    SetQuery(String),
    /// Replace the language filter
    SetLanguage(LanguageFilter),

    /// A fetch task finished, successfully or not
    FetchCompleted {
        ticket: FetchTicket,
        result: Result<Vec<Repository>, FetchError>,
    },

    /// Move keyboard focus to the next / previous control
    FocusNext,
    FocusPrev,

    /// Scroll the repository list
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,

    Quit,
}
