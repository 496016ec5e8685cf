// src/github/models.rs
// =============================================================================
// Data types returned by the GitHub REST API.
//
// GitHub sends a lot of fields for every repository (owner, urls, dates,
// permissions, ...). We only declare the four fields this tool reads;
// serde silently ignores everything else.
// =============================================================================

use serde::{Deserialize, Serialize};

/// One repository from `GET /users/{username}/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Opaque GitHub id, only used as a stable key
    pub id: u64,
    pub name: String,
    /// Primary language as detected by GitHub; `null` for empty or docs-only repos
    #[serde(default)]
    pub language: Option<String>,
    pub stargazers_count: u64,
}

impl Repository {
    /// The line shown in the repository list, e.g. `beta ⭐ 50`
    pub fn list_label(&self) -> String {
        format!("{} ⭐ {}", self.name, self.stargazers_count)
    }
}

#[cfg(test)]
pub(crate) fn repo(id: u64, name: &str, language: Option<&str>, stars: u64) -> Repository {
    Repository {
        id,
        name: name.to_string(),
        language: language.map(str::to_string),
        stargazers_count: stars,
    }
}
