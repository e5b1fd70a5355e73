// src/citation/source.rs
// =============================================================================
// CitationSource ties the pipeline together:
//
//   repository URL -> raw CITATION.cff URL -> file text -> CitationRecord
//
// A source is built once and never changes. Each export call reads the
// record and returns a fresh String, so exporting twice gives the same bytes.
// =============================================================================

use std::path::Path;

use reqwest::Client;

use crate::citation::CitationRecord;
use crate::error::{CitationError, Result};
use crate::export::{ExportFormat, ToCitation};
use crate::github::{self, FetchConfig};

/// A CITATION.cff file together with where it came from
#[derive(Debug, Clone)]
pub struct CitationSource {
    url: String,
    file_url: String,
    contents: String,
    record: CitationRecord,
}

impl CitationSource {
    /// Fetches and decodes CITATION.cff for a GitHub repository URL
    ///
    /// Example: "https://github.com/user/repo/devel"
    pub async fn fetch(url: &str) -> Result<Self> {
        Self::fetch_with_config(url, &FetchConfig::default()).await
    }

    pub async fn fetch_with_config(url: &str, config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Self::fetch_with_client(&client, url, config).await
    }

    /// Same as fetch_with_config, reusing an existing HTTP client
    pub async fn fetch_with_client(client: &Client, url: &str, config: &FetchConfig) -> Result<Self> {
        // Host check happens here, before any request goes out
        let location = github::parse_github_url(url)?;
        let file_url = config.citation_file_url(&location);
        tracing::debug!(
            user = %location.user,
            repo = %location.repo,
            file_url = %file_url,
            "Resolved citation file"
        );

        let contents = github::fetch_file(client, &file_url).await?;
        Self::from_parts(url, file_url, contents)
    }

    /// Decodes CITATION.cff text that is already in hand
    ///
    /// `url` is kept for reference only; nothing is fetched.
    pub fn from_contents(url: impl Into<String>, contents: impl Into<String>) -> Result<Self> {
        Self::from_parts(url, String::new(), contents)
    }

    /// Reads and decodes a CITATION.cff from disk
    pub fn from_path(path: &Path, url: Option<&str>) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| CitationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file_url = path.display().to_string();
        Self::from_parts(url.unwrap_or_default(), file_url, contents)
    }

    fn from_parts(
        url: impl Into<String>,
        file_url: impl Into<String>,
        contents: impl Into<String>,
    ) -> Result<Self> {
        let contents = contents.into();
        let record = CitationRecord::from_yaml(&contents)?;
        Ok(Self {
            url: url.into(),
            file_url: file_url.into(),
            contents,
            record,
        })
    }

    /// The repository URL this source was created from
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Where CITATION.cff was read from (raw URL or local path)
    pub fn file_url(&self) -> &str {
        &self.file_url
    }

    /// The file text exactly as received
    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn record(&self) -> &CitationRecord {
        &self.record
    }

    pub fn as_bibtex(&self) -> Result<String> {
        self.record.to_bibtex()
    }

    pub fn as_ris(&self) -> Result<String> {
        self.record.to_ris()
    }

    pub fn as_enw(&self) -> Result<String> {
        self.record.to_enw()
    }

    pub fn export(&self, format: ExportFormat) -> Result<String> {
        format.render(&self.record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CFF: &str = "\
title: Example
authors:
  - given-names: Ada
    family-names: Lovelace
date-released: 2020-01-02
doi: 10.0/abc
repository: https://github.com/user/repo
";

    #[test]
    fn test_from_contents_keeps_raw_text() {
        let source = CitationSource::from_contents("https://github.com/user/repo", CFF).unwrap();
        assert_eq!(source.url(), "https://github.com/user/repo");
        assert_eq!(source.contents(), CFF);
        assert_eq!(source.record().title.as_deref(), Some("Example"));
    }

    #[test]
    fn test_export_matches_direct_call() {
        let source = CitationSource::from_contents("", CFF).unwrap();
        assert_eq!(
            source.export(ExportFormat::Ris).unwrap(),
            source.as_ris().unwrap()
        );
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = CitationSource::from_path(Path::new("/definitely/not/here/CITATION.cff"), None);
        assert!(matches!(result, Err(CitationError::Io { .. })));
    }

    #[tokio::test]
    async fn test_fetch_rejects_other_hosts_without_network() {
        // Unroutable base URL: reaching the network would fail differently
        let config = FetchConfig::new().with_raw_base_url("http://0.0.0.0:1");
        let result =
            CitationSource::fetch_with_config("https://gitlab.com/user/repo", &config).await;
        assert!(matches!(result, Err(CitationError::UnsupportedHost { .. })));
    }
}
