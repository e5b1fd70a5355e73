// src/citation/mod.rs
// =============================================================================
// This module holds the citation data and where it came from.
//
// Submodules:
// - record: the decoded CITATION.cff fields (CitationRecord, Author)
// - source: fetch + decode in one immutable value (CitationSource)
// =============================================================================

mod record;
mod source;

pub use record::{Author, CitationRecord, ReleaseDate};
pub use source::CitationSource;
