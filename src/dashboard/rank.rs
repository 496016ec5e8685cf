// src/dashboard/rank.rs
// =============================================================================
// The ranker: picks the N most-starred repositories.
//
// `slice::sort_by` is a stable sort, so repositories with the same star
// count keep the order they had in the input.
// =============================================================================

use crate::github::Repository;

/// Number of bars in the stars chart
pub const TOP_N: usize = 5;

/// Returns at most `n` repositories ordered by `stargazers_count`,
/// highest first. The input is left untouched.
pub fn top_by_stars(records: &[Repository], n: usize) -> Vec<Repository> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    ranked.truncate(n);
    ranked
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why to_vec() first?
//    - sort_by works in place; sorting a copy leaves the caller's slice as is
//
// 2. Why b.cmp(&a) instead of a.cmp(&b)?
//    - Swapping the operands sorts descending without a Reverse wrapper
// -----------------------------------------------------------------------------
