// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - dashboard: the interactive terminal dashboard
// - list: fetch once, print the filtered list and the top repositories
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::dashboard::{LanguageFilter, ALL_LANGUAGES, TOP_N};
use crate::github::{FetcherConfig, DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS};

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "repo-explorer",
    version,
    about = "Browse, filter and chart a GitHub user's repositories",
    long_about = "repo-explorer fetches a user's public repositories from the GitHub REST API \
                  and shows them as a filterable list plus a bar chart of the most-starred ones."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive dashboard
    ///
    /// Example: repo-explorer dashboard --user vercel
    Dashboard {
        /// Preselect this user and search immediately
        #[arg(long)]
        user: Option<String>,

        /// Users offered by the user selector (comma separated)
        #[arg(long, value_delimiter = ',', default_values_t = default_users())]
        users: Vec<String>,

        #[command(flatten)]
        api: ApiArgs,
    },

    /// Fetch one user's repositories and print them
    ///
    /// Example: repo-explorer list facebook --language JavaScript --json
    List {
        /// GitHub username whose repositories are listed
        username: String,

        /// Only keep repositories whose name contains this text (case-insensitive)
        #[arg(long, short, default_value = "")]
        query: String,

        /// Exact language to keep, or "All" for no restriction
        #[arg(long, short, default_value = ALL_LANGUAGES)]
        language: LanguageFilter,

        /// How many repositories the chart ranks
        #[arg(long, default_value_t = TOP_N)]
        top: usize,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        api: ApiArgs,
    },
}

/// Options shared by every command that talks to GitHub
#[derive(Args, Debug, Clone)]
pub struct ApiArgs {
    /// Base URL of the GitHub REST API
    #[arg(long, env = "REPO_EXPLORER_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl ApiArgs {
    pub fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig {
            api_base: self.api_base.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

fn default_users() -> Vec<String> {
    crate::app::DEFAULT_USERS
        .iter()
        .map(|u| u.to_string())
        .collect()
}
