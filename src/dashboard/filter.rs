// src/dashboard/filter.rs
// =============================================================================
// The filter engine: narrows a repository list by a name substring and a
// language selector.
//
// Both predicates must hold for a repository to be kept:
// - its name, lower-cased, contains the query, lower-cased
// - the language filter is `All`, or the repository's language equals the
//   selected label exactly (case-sensitive)
//
// The input slice is never modified; we clone the matching records into a
// new Vec, keeping their original order.
// =============================================================================

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::github::Repository;

/// Label of the "no language restriction" sentinel
pub const ALL_LANGUAGES: &str = "All";

/// Options offered by the interactive language selector, in display order
pub const LANGUAGE_CHOICES: [&str; 4] = [ALL_LANGUAGES, "JavaScript", "Python", "Java"];

/// Language selector value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LanguageFilter {
    /// No restriction
    #[default]
    All,
    /// Keep only repositories whose language is exactly this label
    Exact(String),
}

impl LanguageFilter {
    pub fn label(&self) -> &str {
        match self {
            LanguageFilter::All => ALL_LANGUAGES,
            LanguageFilter::Exact(label) => label,
        }
    }

    /// Whether a repository with `language` passes this filter.
    /// Repositories without a language only pass `All`.
    pub fn matches(&self, language: Option<&str>) -> bool {
        match self {
            LanguageFilter::All => true,
            LanguageFilter::Exact(label) => language == Some(label.as_str()),
        }
    }

    // Position in LANGUAGE_CHOICES; custom labels sort before the first entry
    fn choice_index(&self) -> Option<usize> {
        LANGUAGE_CHOICES.iter().position(|c| *c == self.label())
    }

    /// Next option of the fixed selector, wrapping around
    pub fn next_choice(&self) -> LanguageFilter {
        let next = match self.choice_index() {
            Some(i) => (i + 1) % LANGUAGE_CHOICES.len(),
            None => 0,
        };
        LanguageFilter::from(LANGUAGE_CHOICES[next])
    }

    /// Previous option of the fixed selector, wrapping around
    pub fn prev_choice(&self) -> LanguageFilter {
        let prev = match self.choice_index() {
            Some(0) | None => LANGUAGE_CHOICES.len() - 1,
            Some(i) => i - 1,
        };
        LanguageFilter::from(LANGUAGE_CHOICES[prev])
    }
}

impl From<&str> for LanguageFilter {
    fn from(value: &str) -> Self {
        if value == ALL_LANGUAGES {
            LanguageFilter::All
        } else {
            LanguageFilter::Exact(value.to_string())
        }
    }
}

impl FromStr for LanguageFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LanguageFilter::from(s))
    }
}

impl fmt::Display for LanguageFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns the repositories matching both the name query and the language
/// filter, in their original order. An empty query matches every name.
pub fn filter(records: &[Repository], query: &str, language: &LanguageFilter) -> Vec<Repository> {
    let needle = query.to_lowercase();

    records
        .iter()
        .filter(|repo| repo.name.to_lowercase().contains(&needle))
        .filter(|repo| language.matches(repo.language.as_deref()))
        .cloned()
        .collect()
}
