// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - The Repository record (the four fields we read)
// - Fetching `/users/{username}/repos` (first page, unauthenticated)
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod fetch;
mod models;

pub use fetch::{FetchError, FetcherConfig, RepoFetcher, DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS};
pub use models::Repository;

#[cfg(test)]
pub(crate) use models::repo;
