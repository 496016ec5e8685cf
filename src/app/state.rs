// src/app/state.rs
// =============================================================================
// Application state for the interactive dashboard.
//
// Two fields are easy to mix up:
// - `username` is whatever the user selector currently shows
// - `searched_user` is the name that was actually submitted with Enter
// Changing the selector never fetches; only submitting does.
//
// Every fetch gets a `FetchTicket`. Only the result carrying the ticket in
// `pending` may replace `repos`, so a slow response for an older search can
// never overwrite a newer one.
// =============================================================================

use crate::dashboard::{self, DashboardView, LanguageFilter, TOP_N};
use crate::github::Repository;

/// Users offered by the selector when none are configured
pub const DEFAULT_USERS: [&str; 4] = ["facebook", "google", "microsoft", "vercel"];

/// Which control receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Search,
    Language,
    User,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Language,
            Focus::Language => Focus::User,
            Focus::User => Focus::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Search => Focus::User,
            Focus::Language => Focus::Search,
            Focus::User => Focus::Language,
        }
    }
}

/// What the status line reports about the latest search
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading {
        user: String,
    },
    Loaded {
        user: String,
        count: usize,
    },
    Failed {
        user: String,
        message: String,
    },
}

/// Identifies one issued fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub id: u64,
    pub username: String,
}

#[derive(Debug)]
pub struct AppState {
    /// Options of the user selector (the empty "Select User" entry is implicit)
    pub candidates: Vec<String>,
    pub username: String,
    pub searched_user: String,
    /// Result of the last accepted fetch; replaced wholesale
    pub repos: Vec<Repository>,
    pub search: String,
    pub language: LanguageFilter,
    pub focus: Focus,
    pub fetch_status: FetchStatus,
    /// First visible row of the repository list
    pub list_offset: usize,
    pending: Option<FetchTicket>,
    next_ticket: u64,
    should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_candidates(DEFAULT_USERS.iter().map(|u| u.to_string()).collect())
    }

    pub fn with_candidates(candidates: Vec<String>) -> Self {
        Self {
            candidates,
            username: String::new(),
            searched_user: String::new(),
            repos: Vec::new(),
            search: String::new(),
            language: LanguageFilter::All,
            focus: Focus::default(),
            fetch_status: FetchStatus::Idle,
            list_offset: 0,
            pending: None,
            next_ticket: 1,
            should_quit: false,
        }
    }

    /// Filtered list, top-5 and chart data for the current inputs.
    /// Recomputed on every call.
    pub fn derive(&self) -> DashboardView {
        dashboard::derive(&self.repos, &self.search, &self.language, TOP_N)
    }

    /// Starts tracking a new fetch for `username`. Any older ticket is
    /// forgotten, so its result will be discarded.
    pub fn issue_ticket(&mut self, username: &str) -> FetchTicket {
        let ticket = FetchTicket {
            id: self.next_ticket,
            username: username.to_string(),
        };
        self.next_ticket += 1;
        self.pending = Some(ticket.clone());
        ticket
    }

    pub fn pending(&self) -> Option<&FetchTicket> {
        self.pending.as_ref()
    }

    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    /// Consumes the pending ticket if `ticket` is it. Returns false for
    /// results of superseded fetches.
    pub fn accept(&mut self, ticket: &FetchTicket) -> bool {
        match &self.pending {
            Some(current) if current == ticket && ticket.username == self.searched_user => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Selector options in display order; "" stands for "Select User"
    pub fn user_options(&self) -> Vec<&str> {
        std::iter::once("")
            .chain(self.candidates.iter().map(String::as_str))
            .collect()
    }

    fn username_index(&self) -> usize {
        self.user_options()
            .iter()
            .position(|u| *u == self.username)
            .unwrap_or(0)
    }

    pub fn next_username(&self) -> String {
        let options = self.user_options();
        let next = (self.username_index() + 1) % options.len();
        options[next].to_string()
    }

    pub fn prev_username(&self) -> String {
        let options = self.user_options();
        let prev = match self.username_index() {
            0 => options.len() - 1,
            i => i - 1,
        };
        options[prev].to_string()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
