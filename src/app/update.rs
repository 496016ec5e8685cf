// src/app/update.rs
// =============================================================================
// The update function: applies one Message to AppState.
//
// It never performs I/O. When a fetch must happen it returns
// `UpdateAction::Fetch`, and the event loop spawns the request.
// =============================================================================

use tracing::{debug, info, warn};

use super::keys::handle_key;
use super::message::Message;
use super::state::{AppState, FetchStatus, FetchTicket};

// Rows moved by PageUp / PageDown
const PAGE_SIZE: usize = 10;

/// Side effects the event loop performs after an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Fetch repositories for the ticket's user
    Fetch(FetchTicket),
}

/// Result of processing one message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Follow-up message to process right away
    pub message: Option<Message>,
    /// Action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}

/// Process a message and update state
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::SetUsername(username) => {
            // Trimmed here so the selector shows exactly the name we search for
            state.username = username.trim().to_string();
            UpdateResult::none()
        }

        Message::SubmitSearch => submit_search(state),

        Message::SetQuery(query) => {
            state.search = query;
            state.list_offset = 0;
            UpdateResult::none()
        }

        Message::SetLanguage(language) => {
            state.language = language;
            state.list_offset = 0;
            UpdateResult::none()
        }

        Message::FetchCompleted { ticket, result } => {
            if !state.accept(&ticket) {
                debug!(
                    ticket = ticket.id,
                    user = %ticket.username,
                    current = ?state.pending().map(|t| t.id),
                    "discarding stale fetch result"
                );
                return UpdateResult::none();
            }

            match result {
                Ok(repos) => {
                    info!(user = %ticket.username, count = repos.len(), "repositories loaded");
                    state.fetch_status = FetchStatus::Loaded {
                        user: ticket.username,
                        count: repos.len(),
                    };
                    state.repos = repos;
                    state.list_offset = 0;
                }
                Err(e) => {
                    // Keep showing whatever was loaded before
                    warn!(user = %ticket.username, "fetch failed: {}", e);
                    state.fetch_status = FetchStatus::Failed {
                        user: ticket.username,
                        message: e.to_string(),
                    };
                }
            }
            UpdateResult::none()
        }

        Message::FocusNext => {
            state.focus = state.focus.next();
            UpdateResult::none()
        }

        Message::FocusPrev => {
            state.focus = state.focus.prev();
            UpdateResult::none()
        }

        Message::ScrollUp => {
            state.list_offset = state.list_offset.saturating_sub(1);
            UpdateResult::none()
        }

        Message::ScrollDown => {
            scroll_down(state, 1);
            UpdateResult::none()
        }

        Message::PageUp => {
            state.list_offset = state.list_offset.saturating_sub(PAGE_SIZE);
            UpdateResult::none()
        }

        Message::PageDown => {
            scroll_down(state, PAGE_SIZE);
            UpdateResult::none()
        }

        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }
    }
}

fn submit_search(state: &mut AppState) -> UpdateResult {
    state.searched_user = state.username.clone();

    if state.searched_user.is_empty() {
        // Nothing to fetch; a fetch still in flight no longer matches
        state.clear_pending();
        state.fetch_status = FetchStatus::Idle;
        return UpdateResult::none();
    }

    let user = state.searched_user.clone();
    let ticket = state.issue_ticket(&user);
    info!(user = %ticket.username, ticket = ticket.id, "search submitted");
    state.fetch_status = FetchStatus::Loading {
        user: ticket.username.clone(),
    };
    UpdateResult::action(UpdateAction::Fetch(ticket))
}

fn scroll_down(state: &mut AppState, rows: usize) {
    let visible = state.derive().filtered.len();
    let max_offset = visible.saturating_sub(1);
    state.list_offset = (state.list_offset + rows).min(max_offset);
}
