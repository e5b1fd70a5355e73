// src/error.rs
// =============================================================================
// Error types for fetching, decoding and exporting citations.
//
// The library returns CitationError everywhere so callers can match on the
// exact failure. main.rs wraps it in anyhow at the binary boundary.
// =============================================================================

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between a repository URL and an export.
#[derive(Debug, Error)]
pub enum CitationError {
    /// The URL is not hosted on GitHub
    #[error("Only GitHub is supported at the moment: {url}")]
    UnsupportedHost { url: String },

    /// The URL is on GitHub but has no user/repo path
    #[error("Invalid GitHub repository URL: {url}")]
    InvalidRepositoryUrl { url: String },

    /// The server answered with a non-success status
    #[error("Failed to fetch {url}: HTTP {status}")]
    Retrieval { url: String, status: StatusCode },

    /// The request never produced a response
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// CITATION.cff is not valid YAML, or a field has the wrong shape
    #[error("Could not decode CITATION.cff: {0}")]
    Decode(#[from] serde_yaml::Error),

    /// A formatter needs a field the citation does not have
    #[error("CITATION.cff is missing required field '{field}'")]
    MissingField { field: &'static str },

    /// Reading a local citation file failed
    #[error("Could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CitationError>;
