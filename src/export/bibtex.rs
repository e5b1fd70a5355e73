// src/export/bibtex.rs
// =============================================================================
// BibTeX export.
//
// Output shape:
//
//   @misc{YourReferenceHere,
//   author   = {
//               Ada Lovelace and
//               Alan Turing
//              },
//   title    = {...},
//   month    = {3},
//   year     = {2021},
//   doi      = {...},
//   url      = {...}
//   }
//
// Field values are written as-is; no LaTeX escaping is applied.
// =============================================================================

use crate::citation::CitationRecord;
use crate::error::Result;

use super::REFERENCE_KEY;

// Labels are padded to this many columns before " = {"
const LABEL_WIDTH: usize = 8;

const AUTHOR_INDENT: usize = 12;
const CLOSING_INDENT: usize = 11;

fn field(label: &str, value: impl std::fmt::Display) -> String {
    format!("{label:<LABEL_WIDTH$} = {{{value}}}")
}

pub(super) fn to_bibtex(record: &CitationRecord) -> Result<String> {
    let authors = record.require_authors()?;
    let title = record.require_title()?;
    let date = record.require_date_released()?;
    let doi = record.require_doi()?;
    let repository = record.require_repository()?;

    let author_lines: Vec<String> = authors
        .iter()
        .map(|author| format!("{:AUTHOR_INDENT$}{}", "", author.display_name()))
        .collect();

    let mut s = String::new();
    s.push_str(&format!("@misc{{{REFERENCE_KEY},\n"));
    s.push_str(&format!("{:<LABEL_WIDTH$} = {{\n", "author"));
    s.push_str(&author_lines.join(" and\n"));
    s.push('\n');
    s.push_str(&format!("{:CLOSING_INDENT$}}},\n", ""));
    s.push_str(&field("title", title));
    s.push_str(",\n");
    s.push_str(&field("month", date.month));
    s.push_str(",\n");
    s.push_str(&field("year", date.year));
    s.push_str(",\n");
    s.push_str(&field("doi", doi));
    s.push_str(",\n");
    s.push_str(&field("url", repository));
    s.push('\n');
    s.push_str("}\n");

    Ok(s)
}
