// src/export/mod.rs
// =============================================================================
// This module turns a CitationRecord into citation manager formats.
//
// Submodules:
// - bibtex: @misc entry for LaTeX
// - ris: tagged lines for Zotero / Mendeley
// - enw: EndNote Refer template
//
// Missing-field policy, applied the same way by all three:
// - keywords absent -> treated as an empty list
// - any other field a format needs absent -> CitationError::MissingField
//
// Rust concepts:
// - Traits: ToCitation adds to_bibtex()/to_ris()/to_enw() to CitationRecord
// - Enums: ExportFormat picks a format at runtime (e.g. from --format)
// =============================================================================

mod bibtex;
mod enw;
mod ris;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::citation::CitationRecord;
use crate::error::Result;

/// Citation key used by the BibTeX and EndNote exports
pub const REFERENCE_KEY: &str = "YourReferenceHere";

/// Export a citation as text in each supported format
pub trait ToCitation {
    /// BibTeX `@misc` entry
    fn to_bibtex(&self) -> Result<String>;

    /// RIS record, `TY` through `ER`
    fn to_ris(&self) -> Result<String>;

    /// EndNote tagged record
    fn to_enw(&self) -> Result<String>;
}

impl ToCitation for CitationRecord {
    fn to_bibtex(&self) -> Result<String> {
        bibtex::to_bibtex(self)
    }

    fn to_ris(&self) -> Result<String> {
        ris::to_ris(self)
    }

    fn to_enw(&self) -> Result<String> {
        enw::to_enw(self)
    }
}

/// The export formats, selectable at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// BibTeX (.bib)
    #[value(alias = "bib")]
    Bibtex,
    /// RIS (.ris)
    Ris,
    /// EndNote (.enw)
    #[value(alias = "endnote")]
    Enw,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Bibtex, ExportFormat::Ris, ExportFormat::Enw];

    /// Conventional file extension, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Bibtex => "bib",
            ExportFormat::Ris => "ris",
            ExportFormat::Enw => "enw",
        }
    }

    pub fn render(self, record: &impl ToCitation) -> Result<String> {
        match self {
            ExportFormat::Bibtex => record.to_bibtex(),
            ExportFormat::Ris => record.to_ris(),
            ExportFormat::Enw => record.to_enw(),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Bibtex => "bibtex",
            ExportFormat::Ris => "ris",
            ExportFormat::Enw => "enw",
        };
        f.write_str(name)
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bibtex" | "bib" => Ok(ExportFormat::Bibtex),
            "ris" => Ok(ExportFormat::Ris),
            "enw" | "endnote" => Ok(ExportFormat::Enw),
            other => Err(format!(
                "Unsupported format '{other}'. Use 'bibtex', 'ris', or 'enw'."
            )),
        }
    }
}
