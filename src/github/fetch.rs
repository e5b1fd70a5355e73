// src/github/fetch.rs
// =============================================================================
// This module fetches CITATION.cff from GitHub repositories.
//
// Strategy:
// - Check that the URL is a GitHub URL (fail fast, no network)
// - Parse the URL to extract user, repo and (optionally) branch
// - Fetch CITATION.cff via raw.githubusercontent.com, which serves raw files
//
// Why not the GitHub API?
// - The API requires authentication for higher rate limits
// - A single well-known file path is all we need
//
// Rust concepts:
// - async functions: For network I/O
// - Result: For error handling with our own CitationError
// - Builder methods: FetchConfig::new().with_raw_base_url(...)
// =============================================================================

use std::sync::OnceLock;

use regex::Regex;
use reqwest::Client;

use crate::error::{CitationError, Result};

/// Every supported repository URL starts with this
pub const GITHUB_PREFIX: &str = "https://github.com";

/// Where GitHub serves raw file contents
pub const DEFAULT_RAW_BASE_URL: &str = "https://raw.githubusercontent.com";

/// Branch used when the repository URL does not name one
pub const DEFAULT_BRANCH: &str = "master";

/// The file we look for at the repository root
pub const CITATION_FILE_NAME: &str = "CITATION.cff";

/// Settings for resolving and downloading CITATION.cff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Base URL for raw file contents (no trailing slash)
    pub raw_base_url: String,
    /// Branch to use when the URL has none
    pub default_branch: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            raw_base_url: DEFAULT_RAW_BASE_URL.to_string(),
            default_branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

impl FetchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the fetcher at a different raw-content host
    /// (a mirror, or a mock server in tests)
    pub fn with_raw_base_url(mut self, url: impl Into<String>) -> Self {
        self.raw_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_default_branch(mut self, branch: impl Into<String>) -> Self {
        self.default_branch = branch.into();
        self
    }

    /// Builds the raw-content URL of CITATION.cff for a repository
    ///
    /// Example:
    ///   user/repo@devel -> https://raw.githubusercontent.com/user/repo/devel/CITATION.cff
    pub fn citation_file_url(&self, location: &RepoLocation) -> String {
        let branch = location.branch.as_deref().unwrap_or(&self.default_branch);
        format!(
            "{}/{}/{}/{}/{}",
            self.raw_base_url, location.user, location.repo, branch, CITATION_FILE_NAME
        )
    }
}

/// A repository on GitHub, as named by its URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLocation {
    pub user: String,
    pub repo: String,
    /// None when the URL did not name a branch
    pub branch: Option<String>,
}

// Matches https://github.com/{user}/{repo}[/{rest}]
// The rest is split by hand so '/tree/{branch}' can be recognised.
fn repo_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^https://github\.com/(?P<user>[^/\n]*)/(?P<repo>[^/\n]*)(?P<rest>/[^\n]*)?")
            .expect("repository URL pattern is valid")
    })
}

// Parses a GitHub URL into user, repo and branch
//
// Supported formats:
//   - https://github.com/user/repo
//   - https://github.com/user/repo.git
//   - https://github.com/user/repo/branch
//   - https://github.com/user/repo/tree/branch
//
// Anything not starting with https://github.com fails before any parsing.
pub fn parse_github_url(url: &str) -> Result<RepoLocation> {
    if !url.starts_with(GITHUB_PREFIX) {
        return Err(CitationError::UnsupportedHost {
            url: url.to_string(),
        });
    }

    let invalid = || CitationError::InvalidRepositoryUrl {
        url: url.to_string(),
    };

    let captures = repo_url_regex().captures(url).ok_or_else(invalid)?;

    let user = &captures["user"];
    let repo = captures["repo"].trim_end_matches(".git");
    if user.is_empty() || repo.is_empty() {
        return Err(invalid());
    }

    let segments: Vec<&str> = captures
        .name("rest")
        .map(|rest| rest.as_str().split('/').skip(1).collect())
        .unwrap_or_default();

    let branch = match segments.as_slice() {
        ["tree", branch, ..] => Some(*branch),
        [branch, ..] => Some(*branch),
        [] => None,
    }
    .filter(|branch| !branch.is_empty())
    .map(str::to_string);

    Ok(RepoLocation {
        user: user.to_string(),
        repo: repo.to_string(),
        branch,
    })
}

// Fetches content from a URL
//
// Returns the body text on any 2xx status, otherwise a Retrieval error
// carrying the status code. No retries.
pub async fn fetch_file(client: &Client, url: &str) -> Result<String> {
    tracing::debug!(url, "Fetching citation file");

    let response = client.get(url).send().await?;
    let status = response.status();

    if !status.is_success() {
        tracing::warn!(url, status = status.as_u16(), "Citation file request failed");
        return Err(CitationError::Retrieval {
            url: url.to_string(),
            status,
        });
    }

    let content = response.text().await?;
    tracing::info!(url, bytes = content.len(), "Fetched citation file");
    Ok(content)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why OnceLock for the regex?
//    - Compiling a Regex is expensive compared to matching with it
//    - OnceLock compiles it on first use and hands out the same one afterwards
//
// 2. How does `?` turn a reqwest::Error into a CitationError?
//    - CitationError::Request is marked #[from] reqwest::Error
//    - thiserror generates the From impl, and `?` calls From::from for us
//
// 3. Why return Retrieval instead of Ok for a 404?
//    - reqwest only errors when there is no response at all
//    - A 404 is a perfectly good response, so we check the status ourselves
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_github_url() {
        let location = parse_github_url("https://github.com/rust-lang/rust").unwrap();
        assert_eq!(location.user, "rust-lang");
        assert_eq!(location.repo, "rust");
        assert_eq!(location.branch, None);
    }

    #[test]
    fn test_parse_github_url_with_git() {
        let location = parse_github_url("https://github.com/user/repo.git").unwrap();
        assert_eq!(location.user, "user");
        assert_eq!(location.repo, "repo");
    }

    #[test]
    fn test_parse_github_url_with_branch() {
        let location = parse_github_url("https://github.com/user/repo/devel").unwrap();
        assert_eq!(location.branch.as_deref(), Some("devel"));
    }

    #[test]
    fn test_parse_github_url_with_tree_branch() {
        let location = parse_github_url("https://github.com/user/repo/tree/main").unwrap();
        assert_eq!(location.branch.as_deref(), Some("main"));
    }

    #[test]
    fn test_trailing_slash_means_no_branch() {
        let location = parse_github_url("https://github.com/user/repo/").unwrap();
        assert_eq!(location.branch, None);
    }

    #[test]
    fn test_parse_invalid_host() {
        let result = parse_github_url("https://gitlab.com/user/repo");
        assert!(matches!(result, Err(CitationError::UnsupportedHost { .. })));
    }

    #[test]
    fn test_parse_missing_repo() {
        let result = parse_github_url("https://github.com/user");
        assert!(matches!(
            result,
            Err(CitationError::InvalidRepositoryUrl { .. })
        ));
    }

    #[test]
    fn test_default_branch_is_master() {
        let config = FetchConfig::new();
        let location = parse_github_url("https://github.com/user/repo").unwrap();
        assert_eq!(
            config.citation_file_url(&location),
            "https://raw.githubusercontent.com/user/repo/master/CITATION.cff"
        );
    }

    #[test]
    fn test_named_branch_in_file_url() {
        let config = FetchConfig::new();
        let location = parse_github_url("https://github.com/user/repo/devel").unwrap();
        assert_eq!(
            config.citation_file_url(&location),
            "https://raw.githubusercontent.com/user/repo/devel/CITATION.cff"
        );
    }

    #[test]
    fn test_config_overrides() {
        let config = FetchConfig::new()
            .with_raw_base_url("http://127.0.0.1:8080/")
            .with_default_branch("main");
        let location = parse_github_url("https://github.com/user/repo").unwrap();
        assert_eq!(
            config.citation_file_url(&location),
            "http://127.0.0.1:8080/user/repo/main/CITATION.cff"
        );
    }
}
