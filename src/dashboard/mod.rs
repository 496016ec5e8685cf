// src/dashboard/mod.rs
// =============================================================================
// Pure, synchronous logic behind the dashboard.
//
// Submodules:
// - filter: name substring + language predicate
// - rank: top-N by star count
// - chart: maps ranked repositories to bar chart data
// - proptest_dashboard: property tests for filter and rank
//
// `derive` ties them together. It is called on every render and by the
// `list` command; nothing here is cached because one user's repository list
// is small.
// =============================================================================

mod chart;
mod filter;
mod rank;

#[cfg(test)]
mod proptest_dashboard;

pub use chart::{ChartData, SERIES_LABEL};
pub use filter::{filter, LanguageFilter, ALL_LANGUAGES};
pub use rank::{top_by_stars, TOP_N};

use serde::Serialize;

use crate::github::Repository;

/// Everything the dashboard shows for one set of inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    /// Repositories matching the query and language, original order
    pub filtered: Vec<Repository>,
    /// The top `n` of `filtered` by stars
    pub top: Vec<Repository>,
    pub chart: ChartData,
}

/// Runs filter, then ranker on the filtered set, then chart mapping
pub fn derive(
    repos: &[Repository],
    query: &str,
    language: &LanguageFilter,
    n: usize,
) -> DashboardView {
    let filtered = filter(repos, query, language);
    let top = top_by_stars(&filtered, n);
    let chart = ChartData::from_ranked(&top);

    DashboardView {
        filtered,
        top,
        chart,
    }
}
