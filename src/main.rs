// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Start file logging (the dashboard owns the terminal)
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 2 = error)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod app;       // src/app/ - dashboard state and transitions
mod cli;       // src/cli.rs - command-line parsing
mod dashboard; // src/dashboard/ - filtering, ranking, chart data
mod github;    // src/github/ - GitHub API access
mod logging;   // src/logging.rs - tracing setup
mod report;    // src/report.rs - output of the list command
mod tui;       // src/tui/ - terminal rendering and event loop

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use app::AppState;
use cli::{ApiArgs, Cli, Commands};
use dashboard::LanguageFilter;
use github::RepoFetcher;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logging is best-effort: a read-only home directory must not stop the tool
    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    match cli.command {
        Commands::Dashboard { user, users, api } => handle_dashboard(user, users, &api).await,
        Commands::List {
            username,
            query,
            language,
            top,
            json,
            api,
        } => handle_list(&username, &query, &language, top, json, &api).await,
    }
}

fn build_fetcher(api: &ApiArgs) -> Result<RepoFetcher> {
    RepoFetcher::new(&api.fetcher_config()).context("Failed to set up the GitHub client")
}

// Handles the 'dashboard' subcommand
async fn handle_dashboard(user: Option<String>, users: Vec<String>, api: &ApiArgs) -> Result<()> {
    let fetcher = build_fetcher(api)?;

    let (users, user) = selector_users(users, user);
    info!(candidates = ?users, initial = ?user, "opening dashboard");
    tui::run(AppState::with_candidates(users), fetcher, user).await
}

// Cleans up the --users / --user values for the user selector.
// Names are trimmed, blanks dropped (the selector has its own empty entry)
// and duplicates removed. A preselected user missing from the list is
// appended so it can be cycled back to.
fn selector_users(users: Vec<String>, user: Option<String>) -> (Vec<String>, Option<String>) {
    let mut candidates: Vec<String> = Vec::with_capacity(users.len() + 1);
    for name in users {
        let name = name.trim();
        if !name.is_empty() && !candidates.iter().any(|c| c == name) {
            candidates.push(name.to_string());
        }
    }

    let user = user
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty());
    if let Some(user) = &user {
        if !candidates.contains(user) {
            candidates.push(user.clone());
        }
    }

    (candidates, user)
}

// Handles the 'list' subcommand
async fn handle_list(
    username: &str,
    query: &str,
    language: &LanguageFilter,
    top: usize,
    json: bool,
    api: &ApiArgs,
) -> Result<()> {
    let fetcher = build_fetcher(api)?;

    if !json {
        println!("🔍 Fetching repositories for: {}", username);
    }

    let repos = fetcher
        .fetch_repositories(username)
        .await
        .with_context(|| format!("Could not fetch repositories for '{}'", username))?;
    info!(user = username, count = repos.len(), "repositories fetched");

    if !json {
        println!("📄 Found {} repositories\n", repos.len());
    }

    let view = dashboard::derive(&repos, query, language, top);
    report::print_results(username, query, language, &view, json)
}
