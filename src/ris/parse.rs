//! RIS format parsing implementation.
//!
//! This module wires the stages of the importer together: dash normalization,
//! record splitting, continuation joining and tag mapping.

use crate::author::AuthorNormalizer;
use crate::regex::Regex;
use crate::ris::split::RecordSplit;
use crate::ris::structure::RawRisRecord;
use crate::ris::whole_lines::TagLines;
use crate::utils::normalize_dashes;
use crate::BibEntry;
use std::sync::LazyLock;
use tracing::{debug, trace};

/// A line opening a RIS record: `TY  - ` followed by anything.
static RECOGNIZED_FORMAT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"TY  - .*").unwrap());

/// Check whether a single line marks the start of a RIS record.
pub(crate) fn is_start_of_record(line: &str) -> bool {
    RECOGNIZED_FORMAT_REGEX.is_match(line)
}

/// Check whether the text contains at least one RIS record start.
pub(crate) fn is_recognized<S: AsRef<str>>(ris_text: S) -> bool {
    ris_text.as_ref().lines().any(is_start_of_record)
}

/// Iterate over the record bodies of already dash-normalized text.
fn record_bodies(text: &str) -> impl Iterator<Item = &str> {
    RecordSplit::new(text).map(|(line_number, body)| {
        trace!(line_number, "found RIS record");
        body
    })
}

/// Turn the body of one record into an entry.
pub(crate) fn parse_record<N: AuthorNormalizer + ?Sized>(body: &str, normalizer: &N) -> BibEntry {
    RawRisRecord::from_tag_values(TagLines::new(body.lines()), normalizer).into_entry()
}

/// Parse the content of a RIS formatted file into entries, in file order.
///
/// Dashes are normalized on the whole text before it is split into records.
pub(crate) fn ris_parse<S: AsRef<str>, N: AuthorNormalizer + ?Sized>(
    ris_text: S,
    normalizer: &N,
) -> Vec<BibEntry> {
    let text = normalize_dashes(ris_text.as_ref());
    let entries: Vec<BibEntry> = record_bodies(&text)
        .map(|body| parse_record(body, normalizer))
        .collect();
    debug!(entries = entries.len(), "parsed RIS records");
    entries
}

/// Parse the content of a RIS formatted file into entries, mapping records in parallel.
///
/// Entries are returned in file order.
#[cfg(feature = "parallel")]
pub(crate) fn ris_parse_parallel<S: AsRef<str>, N: AuthorNormalizer + ?Sized>(
    ris_text: S,
    normalizer: &N,
) -> Vec<BibEntry> {
    use itertools::Itertools;
    use rayon::prelude::*;

    let text = normalize_dashes(ris_text.as_ref());
    let entries: Vec<BibEntry> = record_bodies(&text)
        .collect_vec()
        .into_par_iter()
        .map(|body| parse_record(body, normalizer))
        .collect();
    debug!(entries = entries.len(), "parsed RIS records in parallel");
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::field;
    use crate::{EntryType, LastNameFirst};
    use itertools::Itertools;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("TY  - JOUR", true)]
    #[case("TY  - ", true)]
    #[case("\u{feff}TY  - JOUR", true)]
    #[case("TY  -", false)]
    #[case("TY - JOUR", false)]
    #[case("ty  - jour", false)]
    #[case("PMID- 12345", false)]
    fn test_is_start_of_record(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_start_of_record(line), expected);
    }

    #[rstest]
    #[case("", false)]
    #[case("T1  - Title only\nER  - ", false)]
    #[case("Record #1 of 2\nProvider: x\n\nTY  - JOUR\nER  - ", true)]
    #[case("@article{key, title={x}}", false)]
    fn test_is_recognized(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_recognized(text), expected);
    }

    #[test]
    fn test_ris_parse_normalizes_dashes_before_splitting() {
        let entries = ris_parse(
            "TY  - JOUR\nSP  - 1\u{2013}2\nT1  - A\u{2014}B\nER  - \n",
            &LastNameFirst,
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].field(field::PAGES), Some("1-2"));
        assert_eq!(entries[0].field(field::TITLE), Some("A--B"));
    }

    #[test]
    fn test_record_bodies_skip_blank_tail() {
        let text = "TY  - JOUR\nT1  - A\nER  - \nTY  - BOOK\nT1  - B\nER  - \n\n\n";
        assert_eq!(
            record_bodies(text).collect_vec(),
            vec!["TY  - JOUR\nT1  - A\n", "TY  - BOOK\nT1  - B\n"]
        );
        assert!(record_bodies("").next().is_none());
    }

    #[test]
    fn test_parse_record() {
        let body = "TY  - JOUR\nT1  - Hello\nworld\nAU  - Smith, John\nPY  - 2020/03\n";
        let entry = parse_record(body, &LastNameFirst);
        assert_eq!(entry.entry_type(), EntryType::Article);
        assert_eq!(entry.field(field::TITLE), Some("Hello world"));
        assert_eq!(entry.field(field::AUTHOR), Some("Smith, John"));
        assert_eq!(entry.field(field::YEAR), Some("2020"));
        assert_eq!(entry.field(field::MONTH), Some("#mar#"));
    }

    #[test]
    fn test_parse_malformed_body() {
        let entry = parse_record("just some text\nthat is not RIS", &LastNameFirst);
        assert_eq!(entry.entry_type(), EntryType::Other);
        assert!(entry.fields().is_empty());
    }

    #[test]
    fn test_ris_parse_keeps_order() {
        let text = "TY  - JOUR\nT1  - First\nER  - \nTY  - BOOK\nT1  - Second\nER  - \nTY  - CONF\nT1  - Third\nER  - \n";
        let titles: Vec<_> = ris_parse(text, &LastNameFirst)
            .iter()
            .map(|entry| entry.field(field::TITLE).unwrap_or_default().to_string())
            .collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let text = (0..50)
            .map(|i| format!("TY  - JOUR\nT1  - Title {i}\nPY  - {}\nER  - \n", 1950 + i))
            .collect::<String>();
        assert_eq!(
            ris_parse_parallel(&text, &LastNameFirst),
            ris_parse(&text, &LastNameFirst)
        );
    }
}
