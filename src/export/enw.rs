// src/export/enw.rs
// =============================================================================
// EndNote (Refer/ENW) export.
//
// EndNote expects the full tag layout, so unused tags are still written as
// bare markers. Only these carry values:
//   %A authors, %D year, %T title, %I publisher, %8 month,
//   %F reference key, %K keywords, %U repository
// =============================================================================

use crate::citation::CitationRecord;
use crate::error::Result;

use super::REFERENCE_KEY;

// Bare tags between %I and %8
const AFTER_PUBLISHER: &[&str] = &["%V", "%6", "%N", "%P", "%&", "%Y", "%S", "%7"];

// Bare tags between %8 and %F, including the two blank lines EndNote writes
const AFTER_MONTH: &[&str] = &[
    "%9", "%?", "%!", "%Z", "%@", "%(", "%)", "%*", "%L", "%M", "", "", "%2", "%3", "%4", "%#",
    "%$",
];

pub(super) fn to_enw(record: &CitationRecord) -> Result<String> {
    let authors = record.require_authors()?;
    let date = record.require_date_released()?;
    let title = record.require_title()?;
    let repository = record.require_repository()?;

    let author_string = authors
        .iter()
        .map(|author| author.sort_name())
        .collect::<Vec<_>>()
        .join(" & ");

    let keyword_string = record
        .keywords()
        .iter()
        .map(|keyword| format!("\"{keyword}\""))
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines: Vec<String> = vec![
        "%0".to_string(),
        "%0 Generic".to_string(),
        format!("%A {author_string}"),
        format!("%D {}", date.year),
        format!("%T {title}"),
        "%E".to_string(),
        "%B".to_string(),
        "%C".to_string(),
        "%I GitHub repository".to_string(),
    ];
    lines.extend(AFTER_PUBLISHER.iter().map(|t| t.to_string()));
    lines.push(format!("%8 {}", date.month));
    lines.extend(AFTER_MONTH.iter().map(|t| t.to_string()));
    lines.push(format!("%F {REFERENCE_KEY}"));
    lines.push(format!("%K {keyword_string}"));
    lines.push("%X".to_string());
    lines.push("%Z".to_string());
    lines.push(format!("%U {repository}"));

    let mut s = lines.join("\n");
    s.push('\n');
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CFF: &str = "\
title: Analytical Engine
authors:
  - given-names: Ada
    family-names: Lovelace
  - given-names: Ludwig
    name-particle: van
    family-names: Beethoven
date-released: 2021-03-15
doi: 10.5281/zenodo.1234
repository: https://github.com/user/repo
keywords:
  - engines
  - music
";

    #[test]
    fn test_full_entry() {
        let record = CitationRecord::from_yaml(CFF).unwrap();
        let expected = "\
%0
%0 Generic
%A Lovelace, Ada & van Beethoven, Ludwig
%D 2021
%T Analytical Engine
%E
%B
%C
%I GitHub repository
%V
%6
%N
%P
%&
%Y
%S
%7
%8 3
%9
%?
%!
%Z
%@
%(
%)
%*
%L
%M


%2
%3
%4
%#
%$
%F YourReferenceHere
%K \"engines\", \"music\"
%X
%Z
%U https://github.com/user/repo
";
        assert_eq!(to_enw(&record).unwrap(), expected);
    }

    #[test]
    fn test_no_keywords_leaves_empty_tag() {
        let yaml = CFF.replace("keywords:\n  - engines\n  - music\n", "");
        let record = CitationRecord::from_yaml(&yaml).unwrap();
        let enw = to_enw(&record).unwrap();
        assert!(enw.contains("\n%K \n"));
    }

    #[test]
    fn test_doi_not_required() {
        let yaml = CFF.replace("doi: 10.5281/zenodo.1234\n", "");
        let record = CitationRecord::from_yaml(&yaml).unwrap();
        assert!(to_enw(&record).is_ok());
    }
}
