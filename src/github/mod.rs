// src/github/mod.rs
// =============================================================================
// This module handles finding and downloading CITATION.cff from GitHub.
//
// Currently implements:
// - Parsing GitHub URLs to extract user/repo/branch
// - Deriving the raw.githubusercontent.com URL of CITATION.cff
// - Fetching the file with a single GET request
// =============================================================================

mod fetch;

pub use fetch::{
    fetch_file, parse_github_url, FetchConfig, RepoLocation, CITATION_FILE_NAME,
    DEFAULT_BRANCH, DEFAULT_RAW_BASE_URL, GITHUB_PREFIX,
};
