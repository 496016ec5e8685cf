// src/github/fetch.rs
// =============================================================================
// This module fetches a user's repository list from the GitHub REST API.
//
// Strategy:
// - Build `{api_base}/users/{username}/repos` with the `url` crate so the
//   username is always a single, percent-encoded path segment
// - One unauthenticated GET, first page only, no retries
// - Classify failures into a small error enum so callers can log them or
//   show them in the status line
//
// Rust concepts:
// - thiserror: derive Display/Error for our own error enum
// - async functions: For network I/O
// - Clone on reqwest::Client: cheap, shares the connection pool
// =============================================================================

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use thiserror::Error;
use tracing::debug;
use url::Url;

use super::models::Repository;

/// Public GitHub API root
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// Error bodies from GitHub can be long HTML pages when a proxy is involved
const MAX_ERROR_BODY: usize = 200;

/// Everything that can go wrong while fetching a repository list
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no username given")]
    EmptyUsername,

    #[error("invalid API base url: {0}")]
    InvalidUrl(String),

    #[error("request timed out")]
    Timeout,

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("GitHub API error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("could not decode repository list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Settings for [`RepoFetcher`], usually filled in from the command line
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub api_base: String,
    pub timeout: Duration,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Issues the outbound `GET /users/{username}/repos` call
#[derive(Debug, Clone)]
pub struct RepoFetcher {
    client: Client,
    api_base: Url,
}

impl RepoFetcher {
    pub fn new(config: &FetcherConfig) -> Result<Self, FetchError> {
        let api_base = Url::parse(&config.api_base)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", config.api_base, e)))?;

        if api_base.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(config.api_base.clone()));
        }

        // GitHub rejects requests without a User-Agent
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("repo-explorer/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Transport)?;

        Ok(Self { client, api_base })
    }

    /// Builds the listing endpoint for `username`
    pub fn endpoint(&self, username: &str) -> Result<Url, FetchError> {
        let mut url = self.api_base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| FetchError::InvalidUrl(self.api_base.to_string()))?;
            segments.pop_if_empty().extend(["users", username, "repos"]);
        }
        Ok(url)
    }

    /// Fetches the first page of `username`'s public repositories.
    ///
    /// An empty or whitespace-only username is rejected before any request
    /// is made.
    pub async fn fetch_repositories(&self, username: &str) -> Result<Vec<Repository>, FetchError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(FetchError::EmptyUsername);
        }

        let url = self.endpoint(username)?;
        debug!(%url, "fetching repositories");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(categorize_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: truncate(body.trim(), MAX_ERROR_BODY),
            });
        }

        let body = response.text().await.map_err(categorize_error)?;
        let repos = parse_repositories(&body)?;
        debug!(user = username, count = repos.len(), "repositories decoded");
        Ok(repos)
    }
}

/// Decodes a `/users/{username}/repos` response body.
///
/// The body must be a JSON array; GitHub's error objects
/// (`{"message": "Not Found"}`) are rejected as decode errors.
pub fn parse_repositories(body: &str) -> Result<Vec<Repository>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

// Maps reqwest errors onto our variants. Only timeouts get their own
// variant; everything else keeps the original error as its source.
fn categorize_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Transport(error)
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a thiserror enum instead of anyhow here?
//    - The dashboard shows the failure in its status line and the `list`
//      command wraps it with context; both need a real error type
//    - #[from] lets `?` convert serde_json errors automatically
//    - #[source] keeps the reqwest error reachable for `{:#}` printing
//
// 2. Why path_segments_mut()?
//    - format!("{}/users/{}/repos") would let a name like "a/b" change the
//      path; extend() percent-encodes each segment
//
// 3. Why .trim() on the username?
//    - "  " is as empty as "" for GitHub, so both are rejected up front
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    // Answers exactly one request with the given status line and body,
    // then closes the connection. Returns the base url to point at it.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{}", addr)
    }

    fn fetcher(api_base: &str) -> RepoFetcher {
        RepoFetcher::new(&FetcherConfig {
            api_base: api_base.to_string(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_default_base() {
        let fetcher = fetcher(DEFAULT_API_BASE);
        let url = fetcher.endpoint("facebook").unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/users/facebook/repos");
    }

    #[test]
    fn test_endpoint_encodes_username() {
        let fetcher = fetcher("https://ghe.example.com/api/v3/");
        let url = fetcher.endpoint("a b/c").unwrap();
        assert_eq!(
            url.as_str(),
            "https://ghe.example.com/api/v3/users/a%20b%2Fc/repos"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = RepoFetcher::new(&FetcherConfig {
            api_base: "not a url".to_string(),
            timeout: Duration::from_secs(1),
        });
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }

    #[test]
    fn test_parse_repositories() {
        let body = r#"[
            {"id": 1, "name": "alpha", "language": "JavaScript", "stargazers_count": 10},
            {"id": 2, "name": "beta", "language": null, "stargazers_count": 50, "fork": true}
        ]"#;
        let repos = parse_repositories(body).unwrap();
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].name, "alpha");
        assert_eq!(repos[1].language, None);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_repositories("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_error_object() {
        let result = parse_repositories(r#"{"message": "Not Found"}"#);
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }

    #[tokio::test]
    async fn test_empty_username_is_rejected() {
        let fetcher = fetcher(DEFAULT_API_BASE);
        let result = fetcher.fetch_repositories("   ").await;
        assert!(matches!(result, Err(FetchError::EmptyUsername)));
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let base = serve_once(
            "200 OK",
            r#"[{"id": 7, "name": "react", "language": "JavaScript", "stargazers_count": 99}]"#,
        )
        .await;

        let repos = fetcher(&base).fetch_repositories("facebook").await.unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].name, "react");
        assert_eq!(repos[0].stargazers_count, 99);
    }

    #[tokio::test]
    async fn test_fetch_not_found_maps_to_status() {
        let base = serve_once("404 Not Found", r#"{"message": "Not Found"}"#).await;

        let result = fetcher(&base).fetch_repositories("nobody-here").await;
        match result {
            Err(FetchError::Status { status, body }) => {
                assert_eq!(status, 404);
                assert!(body.contains("Not Found"));
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_non_json_maps_to_decode() {
        let base = serve_once("200 OK", "<html>oops</html>").await;

        let result = fetcher(&base).fetch_repositories("facebook").await;
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Grab a free port, then close it again
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = fetcher(&format!("http://{}", addr))
            .fetch_repositories("facebook")
            .await;
        assert!(matches!(result, Err(FetchError::Transport(_))));
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            // Accept and hold the connection without answering
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let fetcher = RepoFetcher::new(&FetcherConfig {
            api_base: format!("http://{}", addr),
            timeout: Duration::from_millis(200),
        })
        .unwrap();

        let result = fetcher.fetch_repositories("facebook").await;
        assert!(matches!(result, Err(FetchError::Timeout)));
    }
}
