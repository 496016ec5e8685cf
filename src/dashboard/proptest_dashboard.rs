// src/dashboard/proptest_dashboard.rs
// =============================================================================
// Property-based tests for the filter engine and the ranker.
//
// The hand-written tests in filter.rs and rank.rs pin down concrete cases.
// These check that the rules hold for any repository list: mixed-case and
// non-ASCII names, missing languages, and many star-count ties.
// =============================================================================

use std::collections::HashSet;

use proptest::prelude::*;

use super::{derive, filter, top_by_stars, LanguageFilter, TOP_N};
use crate::github::Repository;

/// Repository names, including letters whose case mapping is not ASCII
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9äÄöÖéÉßİ_.-]{0,10}"
}

/// Short queries, so that they actually hit some names
fn query_strategy() -> impl Strategy<Value = String> {
    "[a-zA-ZäÄöÖß.-]{0,3}"
}

/// Languages as GitHub reports them, plus a lower-case near miss
fn language_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(
        prop::sample::select(vec!["JavaScript", "Java", "Python", "python", "Rust"])
            .prop_map(str::to_string),
    )
}

fn filter_strategy() -> impl Strategy<Value = LanguageFilter> {
    prop::sample::select(vec!["All", "JavaScript", "Java", "Python", "TypeScript"])
        .prop_map(LanguageFilter::from)
}

/// A list with unique ids and a small star range, so ties are common
fn repos_strategy() -> impl Strategy<Value = Vec<Repository>> {
    prop::collection::vec((name_strategy(), language_strategy(), 0u64..6), 0..25).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (name, language, stars))| Repository {
                    id: i as u64,
                    name,
                    language,
                    stargazers_count: stars,
                })
                .collect()
        },
    )
}

fn ids(repos: &[Repository]) -> Vec<u64> {
    repos.iter().map(|r| r.id).collect()
}

fn is_subsequence(part: &[u64], whole: &[u64]) -> bool {
    let mut rest = whole.iter();
    part.iter().all(|id| rest.any(|w| w == id))
}

proptest! {
    /// Property: a repository is kept exactly when its lower-cased name
    /// contains the lower-cased query and its language passes the filter.
    #[test]
    fn prop_filter_keeps_exactly_the_matching_repos(
        repos in repos_strategy(),
        query in query_strategy(),
        language in filter_strategy(),
    ) {
        let result = filter(&repos, &query, &language);
        let kept: HashSet<u64> = ids(&result).into_iter().collect();
        let needle = query.to_lowercase();

        for repo in &repos {
            let name_hit = repo.name.to_lowercase().contains(&needle);
            let language_hit = match &language {
                LanguageFilter::All => true,
                LanguageFilter::Exact(label) => repo.language.as_deref() == Some(label.as_str()),
            };
            prop_assert_eq!(kept.contains(&repo.id), name_hit && language_hit, "repo {:?}", repo);
        }

        // Kept records are unchanged and in their original order
        prop_assert!(is_subsequence(&ids(&result), &ids(&repos)));
        for repo in &result {
            prop_assert!(repos.contains(repo));
        }
    }

    /// Property: with a specific language, every result has exactly that label.
    #[test]
    fn prop_language_match_is_exact(
        repos in repos_strategy(),
        query in query_strategy(),
        language in filter_strategy(),
    ) {
        if let LanguageFilter::Exact(label) = &language {
            for repo in filter(&repos, &query, &language) {
                prop_assert_eq!(repo.language.as_deref(), Some(label.as_str()));
            }
        }
    }

    /// Property: the query's ASCII letter case never changes the result.
    #[test]
    fn prop_query_case_is_ignored(
        repos in repos_strategy(),
        query in query_strategy(),
        language in filter_strategy(),
    ) {
        prop_assert_eq!(
            filter(&repos, &query.to_ascii_uppercase(), &language),
            filter(&repos, &query.to_ascii_lowercase(), &language)
        );
    }

    /// Property: an empty query with "All" returns the list as is.
    #[test]
    fn prop_no_filter_is_identity(repos in repos_strategy()) {
        prop_assert_eq!(filter(&repos, "", &LanguageFilter::All), repos);
    }

    /// Property: filtering twice with the same inputs equals filtering once.
    #[test]
    fn prop_filter_is_idempotent(
        repos in repos_strategy(),
        query in query_strategy(),
        language in filter_strategy(),
    ) {
        let once = filter(&repos, &query, &language);
        prop_assert_eq!(filter(&once, &query, &language), once);
    }

    /// Property: top-N has min(n, len) entries, sorted by stars descending,
    /// drawn from the input without duplicates, ties in input order.
    #[test]
    fn prop_top_by_stars_is_sorted_stable_prefix(
        repos in repos_strategy(),
        n in 0usize..8,
    ) {
        let top = top_by_stars(&repos, n);

        prop_assert_eq!(top.len(), n.min(repos.len()));
        prop_assert!(top.windows(2).all(|w| w[0].stargazers_count >= w[1].stargazers_count));

        let top_ids = ids(&top);
        let unique: HashSet<u64> = top_ids.iter().copied().collect();
        prop_assert_eq!(unique.len(), top.len());

        // Equal star counts keep the order they had in the input
        for w in top.windows(2) {
            if w[0].stargazers_count == w[1].stargazers_count {
                prop_assert!(w[0].id < w[1].id);
            }
        }

        // Nothing left out outranks anything taken
        if let Some(lowest) = top.last() {
            for repo in repos.iter().filter(|r| !unique.contains(&r.id)) {
                prop_assert!(repo.stargazers_count <= lowest.stargazers_count);
                if repo.stargazers_count == lowest.stargazers_count {
                    prop_assert!(repo.id > lowest.id);
                }
            }
        }
    }

    /// Property: the derived view ranks the filtered list, and the chart
    /// has one bar per ranked repository in the same order.
    #[test]
    fn prop_derive_ranks_the_filtered_list(
        repos in repos_strategy(),
        query in query_strategy(),
        language in filter_strategy(),
    ) {
        let view = derive(&repos, &query, &language, TOP_N);

        prop_assert_eq!(&view.filtered, &filter(&repos, &query, &language));
        prop_assert_eq!(&view.top, &top_by_stars(&view.filtered, TOP_N));

        let bars: Vec<(&str, u64)> = view.chart.bars().collect();
        prop_assert_eq!(bars.len(), view.top.len());
        for ((label, value), repo) in bars.iter().zip(&view.top) {
            prop_assert_eq!(*label, repo.name.as_str());
            prop_assert_eq!(*value, repo.stargazers_count);
        }
    }
}
