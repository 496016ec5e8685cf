// src/dashboard/chart.rs
// =============================================================================
// Chart data for the "Stars" bar chart.
//
// Kept separate from the ratatui widget so the mapping (names become
// categories, star counts become the single series, same order) can be
// checked without a terminal and reused by the `list` command's JSON output.
// =============================================================================

use serde::Serialize;

use crate::github::Repository;

/// Name of the only data series
pub const SERIES_LABEL: &str = "Stars";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series_label: &'static str,
    pub values: Vec<u64>,
}

impl ChartData {
    /// Builds chart data from already-ranked repositories
    pub fn from_ranked(ranked: &[Repository]) -> Self {
        Self {
            labels: ranked.iter().map(|r| r.name.clone()).collect(),
            series_label: SERIES_LABEL,
            values: ranked.iter().map(|r| r.stargazers_count).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// (label, value) pairs in chart order
    pub fn bars(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}
