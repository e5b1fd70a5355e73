// src/lib.rs
// =============================================================================
// citationcff: turn a GitHub repository's CITATION.cff into BibTeX, RIS or
// EndNote text.
//
//   github   -> find and download CITATION.cff
//   citation -> decode it (CitationRecord) and keep it with its origin
//               (CitationSource)
//   export   -> write the record out in a citation format
//
// The binary in main.rs is a thin CLI over these modules.
// =============================================================================

pub mod citation;
pub mod error;
pub mod export;
pub mod github;

pub use citation::{Author, CitationRecord, CitationSource, ReleaseDate};
pub use error::{CitationError, Result};
pub use export::{ExportFormat, ToCitation, REFERENCE_KEY};
pub use github::{parse_github_url, FetchConfig, RepoLocation};
