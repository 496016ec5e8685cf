// src/app/mod.rs
// =============================================================================
// Application state and its transitions (The Elm Architecture).
//
// - state: AppState, FetchTicket, FetchStatus, Focus
// - message: every event as a Message
// - update: Message + AppState -> new AppState (+ optional action)
// - keys / input_key: keyboard handling independent of crossterm
// =============================================================================

mod input_key;
mod keys;
mod message;
mod state;
mod update;

pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, FetchStatus, Focus, DEFAULT_USERS};
pub use update::{update, UpdateAction};
