// src/citation/record.rs
// =============================================================================
// The parsed contents of a CITATION.cff file.
//
// Decoding never checks that citation fields exist: every field is an
// Option, and the require_* accessors turn a missing field into
// CitationError::MissingField at the moment a formatter asks for it.
//
// keywords is the one optional field. It reads as an empty list when absent,
// so every export format treats it the same way.
// =============================================================================

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CitationError, Result};

/// One entry of the `authors` list
///
/// Only the person-name keys are kept. Affiliation, ORCID and friends are
/// accepted and dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Author {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_names: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_names: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_particle: Option<String>,
}

impl Author {
    /// "Given particle Family", skipping absent parts
    ///
    /// Example: given "Ludwig", particle "van", family "Beethoven"
    ///   -> "Ludwig van Beethoven"
    pub fn display_name(&self) -> String {
        [&self.given_names, &self.name_particle, &self.family_names]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// "particle Family, Given", skipping absent parts
    ///
    /// Example: -> "van Beethoven, Ludwig"
    pub fn sort_name(&self) -> String {
        let mut name = String::new();
        if let Some(particle) = &self.name_particle {
            name.push_str(particle);
            name.push(' ');
        }
        if let Some(family) = &self.family_names {
            name.push_str(family);
        }
        if let Some(given) = &self.given_names {
            name.push_str(", ");
            name.push_str(given);
        }
        name
    }
}

/// The citation fields the export formats know about
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CitationRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<Author>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_released: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

/// Calendar parts of `date-released`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl From<NaiveDate> for ReleaseDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

fn require<'a, T: ?Sized>(value: Option<&'a T>, field: &'static str) -> Result<&'a T> {
    value.ok_or(CitationError::MissingField { field })
}

impl CitationRecord {
    /// Decodes CITATION.cff text
    pub fn from_yaml(text: &str) -> Result<Self> {
        let record = serde_yaml::from_str(text)?;
        Ok(record)
    }

    pub fn require_title(&self) -> Result<&str> {
        require(self.title.as_deref(), "title")
    }

    /// The authors, in file order; an empty list counts as missing
    pub fn require_authors(&self) -> Result<&[Author]> {
        let authors = require(self.authors.as_deref(), "authors")?;
        if authors.is_empty() {
            return Err(CitationError::MissingField { field: "authors" });
        }
        Ok(authors)
    }

    pub fn require_date_released(&self) -> Result<ReleaseDate> {
        self.date_released
            .map(ReleaseDate::from)
            .ok_or(CitationError::MissingField {
                field: "date-released",
            })
    }

    pub fn require_doi(&self) -> Result<&str> {
        require(self.doi.as_deref(), "doi")
    }

    pub fn require_repository(&self) -> Result<&str> {
        require(self.repository.as_deref(), "repository")
    }

    /// Keywords in file order, empty when the file has none
    pub fn keywords(&self) -> &[String] {
        self.keywords.as_deref().unwrap_or_default()
    }
}
