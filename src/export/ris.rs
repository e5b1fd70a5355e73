// src/export/ris.rs
// =============================================================================
// RIS export (Zotero, Mendeley, EndNote import).
//
// Tag order is fixed: TY, AU*, DO, KW*, M3, PB, PP, PY, T1, UR, ER.
// Each line is "TAG  - value".
// =============================================================================

use crate::citation::CitationRecord;
use crate::error::Result;

fn tag(s: &mut String, tag: &str, value: &str) {
    s.push_str(tag);
    s.push_str("  - ");
    s.push_str(value);
    s.push('\n');
}

pub(super) fn to_ris(record: &CitationRecord) -> Result<String> {
    let authors = record.require_authors()?;
    let doi = record.require_doi()?;
    let date = record.require_date_released()?;
    let title = record.require_title()?;
    let repository = record.require_repository()?;

    let mut s = String::new();
    tag(&mut s, "TY", "COMP");
    for author in authors {
        tag(&mut s, "AU", &author.sort_name());
    }
    tag(&mut s, "DO", doi);
    for keyword in record.keywords() {
        tag(&mut s, "KW", keyword);
    }
    tag(&mut s, "M3", "software");
    tag(&mut s, "PB", "GitHub Inc.");
    tag(&mut s, "PP", "San Francisco, USA");
    tag(
        &mut s,
        "PY",
        &format!("{}/{:02}/{:02}", date.year, date.month, date.day),
    );
    tag(&mut s, "T1", title);
    tag(&mut s, "UR", repository);
    // ER takes no value
    s.push_str("ER  -\n");

    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CFF: &str = "\
title: Analytical Engine
authors:
  - given-names: Ludwig
    name-particle: van
    family-names: Beethoven
  - family-names: Turing
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
TY  - COMP
AU  - van Beethoven, Ludwig
AU  - Turing
DO  - 10.5281/zenodo.1234
KW  - engines
KW  - music
M3  - software
PB  - GitHub Inc.
PP  - San Francisco, USA
PY  - 2021/03/15
T1  - Analytical Engine
UR  - https://github.com/user/repo
ER  -
";
        assert_eq!(to_ris(&record).unwrap(), expected);
    }

    #[test]
    fn test_date_is_zero_padded() {
        let yaml = CFF.replace("2021-03-15", "2009-01-05");
        let record = CitationRecord::from_yaml(&yaml).unwrap();
        assert!(to_ris(&record).unwrap().contains("PY  - 2009/01/05\n"));
    }

    #[test]
    fn test_no_keywords_means_no_kw_lines() {
        let yaml = CFF.replace("keywords:\n  - engines\n  - music\n", "");
        let record = CitationRecord::from_yaml(&yaml).unwrap();
        let ris = to_ris(&record).unwrap();
        assert!(!ris.contains("KW  -"));
        assert!(ris.contains("DO  - 10.5281/zenodo.1234\nM3  - software\n"));
    }
}
